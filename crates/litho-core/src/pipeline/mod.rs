//! Single-shot image-formation pipeline: mask -> spectrum -> filtered
//! spectrum -> image -> intensity -> normalized intensity.

pub mod config;

use std::time::Instant;

use ndarray::Array2;
use tracing::debug;

use crate::consts::N;
use crate::fft::{fft2d, fftshift, ComplexGrid};
use crate::pupil::apply_pupil_filter;
use config::PupilParams;

/// Output of a single pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Normalized intensity, N x N, values in [0, 1].
    pub intensity: Array2<f32>,
    pub time_ms: f64,
}

/// Owns the process-wide complex scratch buffer. Not `Sync`: the single-
/// threaded contract means only one call to [`Pipeline::run`] may be in
/// flight at a time.
pub struct Pipeline {
    scratch: ComplexGrid,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            scratch: ComplexGrid::zeros(N),
        }
    }

    /// Runs the full mask -> intensity pipeline described in the module docs.
    ///
    /// `mask` must be an N*N row-major buffer of reals in {0, 1}.
    pub fn run(&mut self, mask: &[f64], params: &PupilParams) -> PipelineOutput {
        let start = Instant::now();

        self.scratch.load_real(mask);
        fft2d(&mut self.scratch, false);
        fftshift(&mut self.scratch);
        apply_pupil_filter(&mut self.scratch, params);
        fftshift(&mut self.scratch);
        fft2d(&mut self.scratch, true);

        let n = self.scratch.n;
        let mut intensity = Array2::<f32>::zeros((n, n));
        let mut max = 0.0f64;
        for r in 0..n {
            for c in 0..n {
                let re = self.scratch.re(r, c);
                let im = self.scratch.im(r, c);
                let i = re * re + im * im;
                if i > max {
                    max = i;
                }
                intensity[[r, c]] = i as f32;
            }
        }

        if max > 0.0 {
            let inv_max = (1.0 / max) as f32;
            intensity.mapv_inplace(|v| v * inv_max);
        }

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(time_ms, %params, "pipeline run complete");

        PipelineOutput { intensity, time_ms }
    }
}
