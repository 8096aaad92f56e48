//! arraylist-core: Educational growable integer container
//!
//! This library provides a dynamic array of `i32` that shows what a growable
//! list does underneath:
//! - Owns a single contiguous block sized to exactly its element count
//! - Grows by reallocating and copying on every append
//! - Ignores out-of-bounds replaces instead of crashing
//! - Renders itself as `[a, b, c]`
//!
//! # Architecture
//!
//! - `arraylist`: The container and its operations
//! - `metrics`: Per-container allocation statistics
//! - `error`: Error types for checked operations and the demo program
//!
//! # Design Principles
//!
//! - **No panics**: Bad indices are ignored or reported, never indexed
//! - **Exact storage**: Capacity always equals length, no amortized growth
//! - **Exclusive ownership**: Storage is released once, when the list drops
//! - **Observable**: Allocation counters expose the cost of each append

pub mod arraylist;
pub mod error;
pub mod metrics;

// Re-export commonly used types
pub use arraylist::ArrayList;
pub use error::{Error, Result};
pub use metrics::AllocStats;
