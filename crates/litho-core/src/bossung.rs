//! Bossung sweep: a focus x dose cross-product that reuses a single pipeline
//! run per focus step across every dose (F pipeline runs, never F*D).

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::cd::measure_cd;
use crate::error::{LithoError, Result};
use crate::pipeline::config::{BossungCurve, BossungParams, BossungPoint, BossungResult, PupilParams};
use crate::pipeline::Pipeline;

/// Linearly interpolates `steps` samples over `[lo, hi]`. A single step
/// returns the midpoint.
fn linspace(lo: f64, hi: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![(lo + hi) / 2.0];
    }
    (0..steps)
        .map(|i| lo + (hi - lo) * (i as f64) / ((steps - 1) as f64))
        .collect()
}

/// Runs a full focus x dose sweep, measuring CD at each (focus, dose) pair
/// from exactly `focusSteps` pipeline evaluations.
pub fn run_bossung_sweep(
    pipeline: &mut Pipeline,
    mask: &[f64],
    base_params: &PupilParams,
    sweep: &BossungParams,
) -> Result<BossungResult> {
    if sweep.focus_steps == 0 {
        return Err(LithoError::InvalidFocusSteps(sweep.focus_steps));
    }
    if sweep.dose_steps == 0 {
        return Err(LithoError::InvalidDoseSteps(sweep.dose_steps));
    }

    let start = Instant::now();

    let focus_values = linspace(sweep.focus_range_um.0, sweep.focus_range_um.1, sweep.focus_steps);
    let dose_values = linspace(sweep.dose_range.0, sweep.dose_range.1, sweep.dose_steps);

    let mut curves: Vec<BossungCurve> = dose_values
        .iter()
        .map(|&dose| BossungCurve {
            dose,
            points: Vec::with_capacity(focus_values.len()),
        })
        .collect();

    for &focus in &focus_values {
        let params = PupilParams {
            defocus_um: focus,
            ..*base_params
        };
        let output = pipeline.run(mask, &params);

        // CD is a read-only post-pipeline scan of the same intensity image
        // for every dose, so the D measurements for this focus step are
        // independent and safe to fan out across rayon.
        let cds: Vec<f64> = dose_values
            .par_iter()
            .map(|&dose| measure_cd(&output.intensity, dose))
            .collect();

        for (curve, cd_nm) in curves.iter_mut().zip(cds) {
            curve.points.push(BossungPoint { focus_um: focus, cd_nm });
        }
    }

    let time_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(
        focus_steps = sweep.focus_steps,
        dose_steps = sweep.dose_steps,
        time_ms,
        "bossung sweep complete"
    );

    Ok(BossungResult {
        focus_values,
        dose_values,
        curves,
        time_ms,
        pipeline_runs: sweep.focus_steps,
    })
}
