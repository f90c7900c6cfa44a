//! Shared input generators for the integration tests and benchmarks.

/// Fill `n` values from a linear congruential generator seeded with `seed`.
pub fn lcg_values(n: usize, seed: i32) -> Vec<i32> {
    let mut rng = seed;
    (0..n)
        .map(|_| {
            rng = rng.wrapping_mul(1103515245).wrapping_add(12345);
            rng
        })
        .collect()
}

/// Like [`lcg_values`] but folded into `0..range` so duplicates are common.
pub fn lcg_small_values(n: usize, seed: i32, range: i32) -> Vec<i32> {
    lcg_values(n, seed)
        .into_iter()
        .map(|v| v.rem_euclid(range))
        .collect()
}

/// Fill, bubble sort and return a wrapping checksum of the first `n` values.
pub fn fill_sort_sum(n: usize, seed: i32) -> i32 {
    let mut buf = lcg_values(n, seed);
    bubblesort_core::bubble_sort(&mut buf);
    buf.iter().fold(0i32, |sum, v| sum.wrapping_add(*v))
}

/// Sorted copy of `values` using the standard library sort.
pub fn std_sorted(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort();
    v
}
