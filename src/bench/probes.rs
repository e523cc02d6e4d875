//! Probe workloads
//!
//! The bodies timed by the runner. Each one is a plain function of its
//! fixed input size so it can be checked without going through the timer.

use std::collections::HashMap;

/// Key rewritten by [`overwrite_key`]
pub const MAP_KEY: &str = "key";

/// Naive double-recursive Fibonacci, `fib(0) = 0`, `fib(1) = 1`
pub fn fib(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Sum of `0..limit` using a counted loop with explicit increment
pub fn accumulate(limit: u64) -> u64 {
    let mut sum = 0u64;
    let mut i = 0u64;
    while i < limit {
        sum += i;
        i += 1;
    }
    sum
}

/// Push `0..count` onto a vector that starts without reserved capacity
pub fn append_sequence(count: u64) -> Vec<u64> {
    let mut values = Vec::new();
    let mut j = 0u64;
    while j < count {
        values.push(j);
        j += 1;
    }
    values
}

/// Write `0..count` to the same map key, one insert per value
pub fn overwrite_key(count: u64) -> HashMap<&'static str, u64> {
    let mut map = HashMap::new();
    let mut k = 0u64;
    while k < count {
        map.insert(MAP_KEY, k);
        k += 1;
    }
    map
}
