//! Error types for the arraylist crates.
//!
//! The container itself almost never fails: out-of-bounds `replace` is a
//! silent no-op and appends cannot fail short of allocation exhaustion.
//! Errors exist for the checked replace variant and for the demo program.

use thiserror::Error;

/// Top-level error type for all fallible operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Index: checked access past the logical end of a container
/// - Config: invalid command-line configuration for the demo
/// - I/O: console output failures
#[derive(Debug, Error)]
pub enum Error {
    /// Checked replace targeted an index at or past `len`
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
