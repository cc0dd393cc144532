#![allow(dead_code)]

use std::path::PathBuf;

/// Number of random dimensions drawn by property tests.
///
/// Set `DELACOURSE_RANDSIZE` to change it.
pub fn random_size_cases() -> u32 {
    std::env::var("DELACOURSE_RANDSIZE")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10)
}

/// Exact solution of `K x = ones(n)`: `x_i = (i + 1)(n - i) / 2`.
pub fn unit_solution(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i + 1) * (n - i)) as f64 / 2.0)
        .collect()
}

/// A fresh scratch directory for one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "delacourse-{}-{}",
        name,
        std::process::id()
    ));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    dir
}
