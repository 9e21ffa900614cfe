use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Bit-reversal permutation tables, memoized per grid size N.
fn bit_reversal_cache() -> &'static Mutex<HashMap<usize, Vec<usize>>> {
    static CACHE: OnceLock<Mutex<HashMap<usize, Vec<usize>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the bit-reversal table for N complex samples (N a power of two).
pub fn bit_reversal_table(n: usize) -> Vec<usize> {
    let cache = bit_reversal_cache();
    let mut guard = cache.lock().expect("bit-reversal cache poisoned");
    if let Some(table) = guard.get(&n) {
        return table.clone();
    }
    let log2n = n.trailing_zeros();
    let table: Vec<usize> = (0..n)
        .map(|i| {
            let mut x = i;
            let mut r = 0usize;
            for _ in 0..log2n {
                r = (r << 1) | (x & 1);
                x >>= 1;
            }
            r
        })
        .collect();
    guard.insert(n, table.clone());
    table
}

/// Twiddle factor tables, memoized per (half-size, direction).
fn twiddle_cache() -> &'static Mutex<HashMap<(usize, bool), Vec<(f64, f64)>>> {
    static CACHE: OnceLock<Mutex<HashMap<(usize, bool), Vec<(f64, f64)>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns `exp(sign*i*pi*k/h)` for k in [0, h), sign = -1 for forward, +1 for inverse.
pub fn twiddle_table(h: usize, inverse: bool) -> Vec<(f64, f64)> {
    let cache = twiddle_cache();
    let mut guard = cache.lock().expect("twiddle cache poisoned");
    let key = (h, inverse);
    if let Some(table) = guard.get(&key) {
        return table.clone();
    }
    let sign = if inverse { 1.0 } else { -1.0 };
    let table: Vec<(f64, f64)> = (0..h)
        .map(|k| {
            let angle = sign * std::f64::consts::PI * (k as f64) / (h as f64);
            (angle.cos(), angle.sin())
        })
        .collect();
    guard.insert(key, table.clone());
    table
}
