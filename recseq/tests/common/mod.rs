#![allow(dead_code)]

use itertools::Itertools;
use std::collections::HashMap;
use std::hash::Hash;

/// Installs a test logger once per test binary; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic pseudo-random integers in `-range/2..range/2`, from a 64-bit LCG.
pub fn sample(seed: u64, len: usize, range: i64) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let high = i64::try_from(state >> 33).unwrap_or(0);
            high % range - range / 2
        })
        .collect()
}

/// A spread of inputs: empty, singleton, duplicates, sorted, reversed, random.
pub fn corpus() -> Vec<Vec<i64>> {
    let mut inputs = vec![
        vec![],
        vec![42],
        vec![7, 7, 7, 7],
        (0..50).collect(),
        (0..50).rev().collect(),
        vec![3, -1, 4, -1, 5, -9, 2, 6],
    ];
    inputs.extend((1..=8u64).map(|seed| sample(seed, 40 * usize::try_from(seed).unwrap_or(1), 100)));
    inputs
}

pub fn is_non_decreasing<T: PartialOrd>(seq: &[T]) -> bool {
    seq.iter().tuple_windows().all(|(a, b)| a <= b)
}

pub fn multiset<T: Hash + Eq + Clone>(seq: &[T]) -> HashMap<T, usize> {
    seq.iter().cloned().counts()
}
