//! Critical-dimension (CD) measurement: locate the widest printed run in
//! the center row of an aerial-image intensity and report its physical width.

use ndarray::Array2;

use crate::consts::PIXEL_SIZE_NM;

/// Measures the CD (in nm) of `intensity` at the given `dose`.
///
/// A pixel in the center row is "printed" when `intensity * dose >= 1.0`.
/// Returns the width of the widest contiguous printed run, breaking ties by
/// proximity of the run's center column to the image center; 0 if nothing
/// printed.
pub fn measure_cd(intensity: &Array2<f32>, dose: f64) -> f64 {
    let n = intensity.ncols();
    let center_row = intensity.nrows() / 2;
    let center_col = n as f64 / 2.0;

    let mut best_len: usize = 0;
    let mut best_dist = f64::INFINITY;

    let mut run_start: Option<usize> = None;
    let mut consider_run = |start: usize, end: usize, best_len: &mut usize, best_dist: &mut f64| {
        let len = end - start;
        let run_center = (start as f64 + end as f64) / 2.0;
        let dist = (run_center - center_col).abs();
        if len > *best_len || (len == *best_len && dist < *best_dist) {
            *best_len = len;
            *best_dist = dist;
        }
    };

    for i in 0..n {
        let printed = (intensity[[center_row, i]] as f64) * dose >= 1.0;
        match (printed, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                consider_run(start, i, &mut best_len, &mut best_dist);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        consider_run(start, n, &mut best_len, &mut best_dist);
    }

    best_len as f64 * PIXEL_SIZE_NM
}
