//! Pupil filter: hard circular aperture, defocus quadratic phase, and
//! Zernike aberration phase, applied in place to a centered spectrum.

use crate::consts::{FREQ_SPACING, N};
use crate::fft::ComplexGrid;
use crate::pipeline::config::PupilParams;
use crate::zernike::zernike_phase_error;

/// Applies the pupil filter to a centered (post-`fftshift`) spectrum in place.
pub fn apply_pupil_filter(grid: &mut ComplexGrid, params: &PupilParams) {
    let n = grid.n;
    let half = n as f64 / 2.0;

    let f_c = params.na * (1.0 + params.sigma) / params.wavelength_nm;
    let f_c2 = f_c * f_c;
    let k_def = std::f64::consts::PI * params.wavelength_nm * (params.defocus_um * 1000.0);
    let has_zernike = !params.zernike.is_all_zero();

    for r in 0..n {
        let fy = (r as f64 - half) * FREQ_SPACING;
        for c in 0..n {
            let fx = (c as f64 - half) * FREQ_SPACING;
            let f2 = fx * fx + fy * fy;

            if f2 > f_c2 {
                grid.set(r, c, 0.0, 0.0);
                continue;
            }

            let mut phi = k_def * f2;
            if has_zernike {
                let rho = (f2.sqrt() / f_c).min(1.0);
                let theta = fy.atan2(fx);
                phi += 2.0 * std::f64::consts::PI * zernike_phase_error(rho, theta, &params.zernike);
            }

            if phi != 0.0 {
                let (s, cphi) = phi.sin_cos();
                let re = grid.re(r, c);
                let im = grid.im(r, c);
                grid.set(r, c, re * cphi - im * s, re * s + im * cphi);
            }
        }
    }
}

/// Effective frequency cutoff `NA*(1+sigma)/lambda`, in cycles/nm.
pub fn frequency_cutoff(params: &PupilParams) -> f64 {
    params.na * (1.0 + params.sigma) / params.wavelength_nm
}

/// Whether `params` puts every representable spatial frequency inside the
/// aperture, i.e. the pupil filter reduces to a no-op passthrough.
pub fn is_wide_open(params: &PupilParams) -> bool {
    let f_c = frequency_cutoff(params);
    let corner_freq = std::f64::consts::SQRT_2 * (N as f64 / 2.0) * FREQ_SPACING;
    f_c >= corner_freq && params.defocus_um == 0.0 && params.zernike.is_all_zero()
}
