//! Evenly spaced sample grids shared by the solvers and the body builders

/// `n` evenly spaced values from `start` to `end`, both ends included.
/// `n == 1` yields `[start]`, `n == 0` yields nothing
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // pin the endpoint, accumulated rounding must not move it
            out[n - 1] = end;
            out
        }
    }
}

/// `n` evenly spaced values on [start, end), the end excluded
pub fn linspace_open(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = (end - start) / n as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}
