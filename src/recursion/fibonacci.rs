use std::collections::HashMap;

use anyhow::ensure;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// `fib(n)` by the textbook double recursion. Exponential in `n`.
pub fn naive(n: u32) -> BigInt {
    if n <= 1 {
        return BigInt::from(n);
    }

    naive(n - 1) + naive(n - 2)
}

/// Largest `n` accepted by [`checked_naive`]. The call count grows as roughly `1.6^n`.
pub const NAIVE_LIMIT: u32 = 35;

/// [`naive`], refusing any `n` above [`NAIVE_LIMIT`].
pub fn checked_naive(n: u32) -> anyhow::Result<BigInt> {
    ensure!(
        n <= NAIVE_LIMIT,
        "naive fibonacci is limited to n <= {}, got {}",
        NAIVE_LIMIT,
        n
    );

    Ok(naive(n))
}

/// Memo table for [`FibonacciCache::get`], seeded with `fib(0) = 0` and `fib(1) = 1`.
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    cache: HashMap<u32, BigInt>,
}

impl FibonacciCache {
    pub fn new() -> Self {
        let mut cache = HashMap::new();
        cache.insert(0, Zero::zero());
        cache.insert(1, One::one());

        Self { cache }
    }

    pub fn get(&mut self, n: u32) -> BigInt {
        if let Some(v) = self.cache.get(&n) {
            return v.clone();
        }

        trace!("fibonacci: computing {}", n);

        let v = self.get(n - 1) + self.get(n - 2);
        self.cache.insert(n, v.clone());

        v
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terms() {
        let terms: Vec<BigInt> = (0..10).map(naive).collect();
        let expected: Vec<BigInt> = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
            .iter()
            .map(|&v| BigInt::from(v))
            .collect();

        assert_eq!(expected, terms);
    }

    #[test]
    fn checked_naive_rejects_large_n() {
        assert_eq!(BigInt::from(6765), checked_naive(20).unwrap());
        assert!(checked_naive(NAIVE_LIMIT + 1).is_err());
        assert!(checked_naive(u32::MAX).is_err());
    }

    #[test]
    fn memoized_matches_naive() {
        let mut cache = FibonacciCache::new();

        for n in [0, 1, 2, 10, 20, 25] {
            assert_eq!(naive(n), cache.get(n));
        }
    }

    #[test]
    fn memoized_handles_large_n() {
        let mut cache = FibonacciCache::new();
        let expected: BigInt = "354224848179261915075".parse().unwrap();

        assert_eq!(expected, cache.get(100));
        assert_eq!(101, cache.len());
    }

    #[test]
    fn caches_are_independent() {
        let mut a = FibonacciCache::new();
        let mut b = FibonacciCache::new();

        a.get(30);
        assert_eq!(2, b.len());

        assert_eq!(BigInt::from(55), b.get(10));
        assert_eq!(31, a.len());
        assert_eq!(11, b.len());
    }
}
