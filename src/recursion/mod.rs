//! Classic recursive algorithms: factorial, Fibonacci, Tower of Hanoi and binary search.
//!
//! The memoized variants keep their results in cache objects owned by the caller,
//! so two callers never see each other's entries.

pub mod binary_search;
pub mod factorial;
pub mod fibonacci;
pub mod hanoi;

/// Deepest recursion the command line will ask any of these algorithms for.
pub const MAX_DEPTH: u32 = 5_000;
