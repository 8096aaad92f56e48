//! Configuration for the arraylist demo.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The demo should work with ZERO arguments. The generated-values scenario
//! uses a time-based seed unless one is given; the seed is always printed so
//! runs can be repeated.

use arraylist_core::{Error, Result};

/// Size of the zeroed list when `--zeroed` is not given.
pub const DEFAULT_ZEROED_SIZE: usize = 25;

/// Number of generated values when `--random` is not given.
pub const DEFAULT_RANDOM_COUNT: usize = 8;

/// Complete configuration for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for generated values
    pub seed: u64,

    /// Length of the zeroed list
    pub zeroed_size: usize,

    /// Number of generated values appended one by one
    pub random_count: usize,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print allocation statistics
    pub print_metrics: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// # Errors
    /// Returns `Error::Config` for unknown flags and missing or invalid values.
    pub fn from_args(args: &[String]) -> Result<Command> {
        let mut seed: Option<u64> = None;
        let mut zeroed_size: Option<usize> = None;
        let mut random_count: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    seed = Some(parse_value(args, &mut i, "--seed")?);
                }
                "--zeroed" => {
                    zeroed_size = Some(parse_value(args, &mut i, "--zeroed")?);
                }
                "--random" => {
                    random_count = Some(parse_value(args, &mut i, "--random")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                other => {
                    return Err(Error::Config(format!("unknown argument: {}", other)));
                }
            }
            i += 1;
        }

        let seed = match seed {
            Some(seed) => seed,
            None => time_seed(),
        };

        Ok(Command::Run(Config {
            seed,
            zeroed_size: zeroed_size.unwrap_or(DEFAULT_ZEROED_SIZE),
            random_count: random_count.unwrap_or(DEFAULT_RANDOM_COUNT),
            print_config,
            print_metrics,
        }))
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!("Zeroed list size: {}", self.zeroed_size);
        println!("Generated values: {}", self.random_count);
        println!("Print metrics: {}", self.print_metrics);
        println!();
    }
}

/// Consume the value following the flag at `args[*i]`.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| Error::Config(format!("{} requires a number", flag)))?;
    raw.parse()
        .map_err(|_| Error::Config(format!("invalid value for {}: {}", flag, raw)))
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn print_help() {
    println!("arraylist-demo: Walkthrough of a growable integer list");
    println!();
    println!("USAGE:");
    println!("    arraylist-demo [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>        Seed for generated values (default: time-based)");
    println!("    --zeroed <N>      Size of the zeroed list (default: {})", DEFAULT_ZEROED_SIZE);
    println!(
        "    --random <N>      Number of generated values (default: {})",
        DEFAULT_RANDOM_COUNT
    );
    println!();
    println!("    --print-config    Print resolved configuration");
    println!("    --no-metrics      Don't print allocation statistics");
    println!("    --help, -h        Print this help");
    println!();
    println!("Set RUST_LOG=trace to see every reallocation.");
    println!();
}
