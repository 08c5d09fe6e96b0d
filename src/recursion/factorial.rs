use std::collections::HashMap;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_bigint::BigInt;
use num_traits::One;

/// `n!` by plain recursion, one call per factor.
pub fn naive(n: u32) -> BigInt {
    if n <= 1 {
        return One::one();
    }

    BigInt::from(n) * naive(n - 1)
}

/// Memo table for [`FactorialCache::get`], seeded with `0! = 1! = 1`.
#[derive(Debug, Clone)]
pub struct FactorialCache {
    cache: HashMap<u32, BigInt>,
}

impl FactorialCache {
    pub fn new() -> Self {
        let mut cache = HashMap::new();
        cache.insert(0, One::one());
        cache.insert(1, One::one());

        Self { cache }
    }

    pub fn get(&mut self, n: u32) -> BigInt {
        if let Some(v) = self.cache.get(&n) {
            trace!("factorial: cache hit for {}", n);

            return v.clone();
        }

        let v = BigInt::from(n) * self.get(n - 1);
        self.cache.insert(n, v.clone());

        v
    }

    /// Number of cached entries, including the two seeds.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
