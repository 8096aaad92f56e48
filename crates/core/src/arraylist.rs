//! A growable list of integers that owns exactly as much storage as it needs.
//!
//! `ArrayList` keeps its elements in a single boxed slice whose length always
//! equals the number of elements. Appending never over-allocates: every `add`
//! allocates a block one element larger, copies the old elements across,
//! writes the new value and releases the old block.
//!
//! # Bounds
//! - `replace` with an index at or past the end does nothing
//! - `try_replace` reports the same case as `Error::IndexOutOfBounds`
//!
//! # Example
//! ```
//! use arraylist_core::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add(15);
//! list.add(128);
//! list.replace(666, 0);
//! list.replace(999, 80); // ignored
//!
//! assert_eq!(list.to_string(), "[666, 128]");
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::metrics::AllocStats;

/// Ordered, index-addressable, appendable list of `i32`.
///
/// # Invariants
/// - `list.len()` is the element count and the allocated capacity
/// - an empty list holds an empty boxed slice (no heap block)
#[derive(Debug)]
pub struct ArrayList {
    /// Exclusively owned element storage
    list: Box<[i32]>,
    /// Storage history of this list
    stats: AllocStats,
}

impl ArrayList {
    /// Create an empty list. No storage is allocated.
    pub fn new() -> Self {
        Self {
            list: Box::default(),
            stats: AllocStats::new(),
        }
    }

    /// Create a list of `size` elements, all set to 0.
    pub fn zeroed(size: usize) -> Self {
        let mut stats = AllocStats::new();
        stats.record_allocation(size);
        Self {
            list: vec![0; size].into_boxed_slice(),
            stats,
        }
    }

    /// Create a list holding a copy of `numbers`, in order.
    pub fn from_slice(numbers: &[i32]) -> Self {
        let mut stats = AllocStats::new();
        stats.record_allocation(numbers.len());
        Self {
            list: numbers.into(),
            stats,
        }
    }

    /// Append `value` at the end.
    ///
    /// Allocates a block of `len + 1` elements, copies the existing elements
    /// into it, writes `value` last and drops the old block. O(len).
    pub fn add(&mut self, value: i32) {
        let size = self.list.len();

        let mut new_list = Vec::with_capacity(size + 1);
        new_list.extend_from_slice(&self.list);
        new_list.push(value);

        trace!(old_len = size, new_len = size + 1, "reallocating list storage");

        // Assigning drops the previous block
        self.list = new_list.into_boxed_slice();
        self.stats.record_grow(size);
        self.stats.record_write();
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// Does nothing if `index` is out of bounds.
    pub fn replace(&mut self, value: i32, index: usize) {
        match self.list.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.stats.record_write();
            }
            None => {
                debug!(index, len = self.list.len(), "ignoring out-of-bounds replace");
            }
        }
    }

    /// Like [`replace`](Self::replace), but reports an out-of-bounds index.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` if `index >= len`. The list and its
    /// statistics are left unchanged in that case.
    pub fn try_replace(&mut self, value: i32, index: usize) -> Result<()> {
        let len = self.list.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.list[index] = value;
        self.stats.record_write();
        Ok(())
    }

    /// Element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.list.get(index).copied()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// True when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Allocated capacity. Always equal to `len()`.
    pub fn capacity(&self) -> usize {
        self.list.len()
    }

    /// Storage statistics since construction.
    pub fn stats(&self) -> &AllocStats {
        &self.stats
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[i32]> for ArrayList {
    fn from(numbers: &[i32]) -> Self {
        Self::from_slice(numbers)
    }
}

// Statistics are history, not content
impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl Eq for ArrayList {}

/// Renders as `[a, b, c]`, or `[]` when empty.
impl fmt::Display for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.list.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl Drop for ArrayList {
    fn drop(&mut self) {
        if !self.list.is_empty() {
            trace!(len = self.list.len(), "releasing list storage");
        }
    }
}
