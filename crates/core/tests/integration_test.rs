//! Integration tests for the arraylist container.
//!
//! These walk through the same sequence the demo program prints: empty list,
//! zeroed list, appends, replaces (including an out-of-bounds one) and a list
//! copied from an array.

use arraylist_core::{ArrayList, Error};

#[test]
fn test_empty_list_renders_brackets() {
    let list = ArrayList::new();
    assert_eq!(list.to_string(), "[]");
}

#[test]
fn test_zeroed_list() {
    let list = ArrayList::zeroed(3);
    assert_eq!(list.to_string(), "[0, 0, 0]");

    let big = ArrayList::zeroed(25);
    assert_eq!(big.len(), 25);
    assert!((0..25).all(|i| big.get(i) == Some(0)));
}

/// Appends followed by replaces, with one replace past the end.
#[test]
fn test_add_then_replace_scenario() {
    let mut list = ArrayList::new();
    list.add(15);
    list.add(128);
    list.add(-815);
    list.add(123);
    assert_eq!(list.to_string(), "[15, 128, -815, 123]");

    list.replace(666, 0);
    list.replace(999, 1);
    let before = *list.stats();
    list.replace(999, 80); // Out of bounds, must not crash
    assert_eq!(list.to_string(), "[666, 999, -815, 123]");
    assert_eq!(*list.stats(), before);

    let stats = list.stats();
    assert_eq!(stats.allocations, 4);
    assert_eq!(stats.elements_copied, 6);
    assert_eq!(stats.writes, 6);
}

#[test]
fn test_copied_array() {
    let some_array = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let copied = ArrayList::from_slice(&some_array);
    assert_eq!(copied.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9]");
    assert_eq!(copied.len(), some_array.len());
}

/// The copy is independent of the source array.
#[test]
fn test_copied_array_is_independent() {
    let mut source = [1, 2, 3];
    let copied = ArrayList::from_slice(&source);
    source[0] = 100;

    assert_eq!(copied.get(0), Some(1));
}

#[test]
fn test_checked_replace_reports_bounds() {
    let mut list = ArrayList::from_slice(&[15, 128, -815, 123]);

    match list.try_replace(999, 80) {
        Err(Error::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 80);
            assert_eq!(len, 4);
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }
    assert_eq!(list.to_string(), "[15, 128, -815, 123]");

    list.try_replace(999, 3).expect("in-bounds replace failed");
    assert_eq!(list.to_string(), "[15, 128, -815, 999]");
}

#[test]
fn test_append_to_copied_list() {
    let mut list = ArrayList::from_slice(&[1, 2]);
    list.add(3);
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.capacity(), 3);

    let stats = list.stats();
    assert_eq!(stats.allocations, 2);
    assert_eq!(stats.releases, 1);
    assert_eq!(stats.elements_copied, 2);
}
