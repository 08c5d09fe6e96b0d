use std::cmp::Ordering;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Recursive binary search over a sorted slice.
///
/// Returns the index of an element equal to `target`, or `None` if there is none.
/// With repeated values, the first midpoint that matches wins.
pub fn search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    search_in(sorted, target, 0, sorted.len() - 1)
}

// closed range [low, high]
fn search_in<T: Ord>(sorted: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low > high {
        return None;
    }

    let mid = (low + high) / 2;
    trace!("binary search: low {} mid {} high {}", low, mid, high);

    match sorted[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => {
            // nothing left of index 0
            let high = mid.checked_sub(1)?;
            search_in(sorted, target, low, high)
        }
        Ordering::Less => search_in(sorted, target, mid + 1, high),
    }
}

/// Whether `values` is in non-decreasing order.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
