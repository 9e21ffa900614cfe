use approx::assert_abs_diff_eq;
use litho_core::fft::ComplexGrid;
use litho_core::pipeline::config::PupilParams;
use litho_core::pupil::{apply_pupil_filter, is_wide_open};

fn flat_spectrum(n: usize) -> ComplexGrid {
    let mut grid = ComplexGrid::zeros(n);
    for r in 0..n {
        for c in 0..n {
            grid.set(r, c, 1.0, 0.0);
        }
    }
    grid
}

#[test]
fn wide_open_aperture_with_no_aberration_is_bit_exact_passthrough() {
    let n = 16;
    let params = PupilParams {
        wavelength_nm: 193.0,
        na: 1.4,
        sigma: 1.0,
        defocus_um: 0.0,
        ..Default::default()
    };
    assert!(is_wide_open(&params));

    let original = flat_spectrum(n);
    let mut grid = original.clone();
    apply_pupil_filter(&mut grid, &params);

    assert_eq!(grid.data, original.data);
}

#[test]
fn samples_outside_the_cutoff_are_zeroed() {
    let n = 16;
    let params = PupilParams {
        wavelength_nm: 248.0,
        na: 0.1,
        sigma: 0.0,
        defocus_um: 0.0,
        ..Default::default()
    };
    assert!(!is_wide_open(&params));

    let mut grid = flat_spectrum(n);
    apply_pupil_filter(&mut grid, &params);

    // The far corners are well outside any realistic cutoff.
    assert_eq!(grid.re(0, 0), 0.0);
    assert_eq!(grid.im(0, 0), 0.0);
}

#[test]
fn defocus_phase_preserves_magnitude_in_aperture() {
    let n = 16;
    let params = PupilParams {
        wavelength_nm: 248.0,
        na: 0.9,
        sigma: 0.5,
        defocus_um: 0.3,
        ..Default::default()
    };

    let mut grid = flat_spectrum(n);
    apply_pupil_filter(&mut grid, &params);

    let center = n / 2;
    let mag = (grid.re(center, center).powi(2) + grid.im(center, center).powi(2)).sqrt();
    assert_abs_diff_eq!(mag, 1.0, epsilon = 1e-9);
}
