//! arraylist-demo: prints the list after each step of a fixed walkthrough.

mod config;
mod input_gen;

use std::io::{self, Write};
use std::process::ExitCode;

use arraylist_core::{AllocStats, ArrayList, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            config::print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    info!(seed = config.seed, "starting demo");

    if config.print_config {
        config.print();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out) {
        Ok(stats) => {
            if config.print_metrics {
                println!();
                for (label, stats) in &stats {
                    stats.print_summary(label);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "demo failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run every scenario, writing one labelled line per step to `out`.
///
/// Returns the statistics of the lists that were grown by appending.
fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<(&'static str, AllocStats)>> {
    let empty_list = ArrayList::new();
    writeln!(out, "Empty list: {}", empty_list)?;

    let zeroed_list = ArrayList::zeroed(config.zeroed_size);
    writeln!(out, "Zeroed list: {}", zeroed_list)?;

    let mut from_scratch = ArrayList::new();
    from_scratch.add(15);
    from_scratch.add(128);
    from_scratch.add(-815);
    from_scratch.add(123);
    writeln!(out, "Adding elements to empty list: {}", from_scratch)?;

    from_scratch.replace(666, 0);
    from_scratch.replace(999, 1);
    from_scratch.replace(999, 80); // Out of bounds, ignored
    writeln!(out, "Replaced first and second element: {}", from_scratch)?;

    let some_array = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let copied_array = ArrayList::from_slice(&some_array);
    writeln!(out, "Copied array of ints: {}", copied_array)?;

    let mut generated = ArrayList::new();
    for value in input_gen::generate_values(config.seed, config.random_count) {
        generated.add(value);
        writeln!(out, "  add({}) -> {}", value, generated)?;
    }
    writeln!(out, "Generated list (seed {}): {}", config.seed, generated)?;

    let index = generated.len();
    match generated.try_replace(0, index) {
        Ok(()) => writeln!(out, "Checked replace at index {}: ok", index)?,
        Err(e) => writeln!(out, "Checked replace at index {}: {}", index, e)?,
    }

    Ok(vec![
        ("appended and replaced", *from_scratch.stats()),
        ("generated", *generated.stats()),
    ])
}
