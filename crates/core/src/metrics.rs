//! Allocation statistics for a single container.
//!
//! The container reallocates on every append, so the cost of building a list
//! of `k` elements is quadratic in copies. These counters make that visible:
//! - Storage blocks allocated and released
//! - Elements copied between blocks
//! - Element writes
//!
//! # Thread Safety
//!
//! `AllocStats` is plain data owned by its container. It is updated only
//! through `&mut` access, like the container itself.

/// Counters describing the storage history of one container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Storage blocks allocated (non-empty constructors and every append)
    pub allocations: u64,

    /// Old storage blocks released by an append
    pub releases: u64,

    /// Elements copied from an old block into a new one
    pub elements_copied: u64,

    /// Element writes (appended values and in-bounds replaces)
    pub writes: u64,
}

impl AllocStats {
    /// Create zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh block of `len` elements.
    ///
    /// Empty blocks are not heap allocations and are not counted.
    pub(crate) fn record_allocation(&mut self, len: usize) {
        if len > 0 {
            self.allocations += 1;
        }
    }

    /// Record a grow step: `copied` elements moved into a new block.
    pub(crate) fn record_grow(&mut self, copied: usize) {
        self.allocations += 1;
        self.elements_copied += copied as u64;
        if copied > 0 {
            self.releases += 1;
        }
    }

    pub(crate) fn record_write(&mut self) {
        self.writes += 1;
    }

    /// Average number of elements copied per allocation.
    ///
    /// Returns 0.0 if nothing was allocated.
    pub fn copies_per_allocation(&self) -> f64 {
        if self.allocations == 0 {
            0.0
        } else {
            self.elements_copied as f64 / self.allocations as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self, label: &str) {
        println!("=== Allocation Summary: {} ===", label);
        println!("Allocations: {}", self.allocations);
        println!("Releases: {}", self.releases);
        println!(
            "Elements copied: {} ({:.2} per allocation)",
            self.elements_copied,
            self.copies_per_allocation()
        );
        println!("Writes: {}", self.writes);
        println!();
    }

    /// Export statistics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "allocations={}\n\
             releases={}\n\
             elements_copied={}\n\
             copies_per_allocation={:.4}\n\
             writes={}\n",
            self.allocations,
            self.releases,
            self.elements_copied,
            self.copies_per_allocation(),
            self.writes,
        )
    }
}
