use litho_core::fft::{fft1d, fft2d, fftshift, ComplexGrid};

fn ramp_grid(n: usize) -> ComplexGrid {
    let mut grid = ComplexGrid::zeros(n);
    let mask: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64 / 7.0).collect();
    grid.load_real(&mask);
    grid
}

fn norm_sq(data: &[f64]) -> f64 {
    data.iter().map(|v| v * v).sum()
}

#[test]
fn round_trip_restores_input() {
    for &n in &[2usize, 4, 8, 16, 32] {
        let original = ramp_grid(n);
        let mut grid = original.clone();

        fft2d(&mut grid, false);
        fft2d(&mut grid, true);

        let log2n = (n as f64).log2();
        let tol = 1e-10 * norm_sq(&original.data).sqrt().max(1.0) * log2n.max(1.0);
        for (a, b) in original.data.iter().zip(grid.data.iter()) {
            assert!((a - b).abs() < tol, "n={n}: {a} vs {b}, tol={tol}");
        }
    }
}

#[test]
fn fftshift_is_an_involution_for_even_n() {
    let n = 16;
    let original = ramp_grid(n);
    let mut grid = original.clone();

    fftshift(&mut grid);
    assert_ne!(grid.data, original.data);

    fftshift(&mut grid);
    assert_eq!(grid.data, original.data);
}

#[test]
fn fftshift_moves_dc_from_corner_to_center() {
    let n = 8;
    let mut grid = ComplexGrid::zeros(n);
    grid.set(0, 0, 1.0, 0.0);

    fftshift(&mut grid);

    assert_eq!(grid.re(n / 2, n / 2), 1.0);
    assert_eq!(grid.re(0, 0), 0.0);
}

#[test]
fn parseval_identity_holds() {
    let n = 16;
    let original = ramp_grid(n);
    let mut grid = original.clone();
    fft2d(&mut grid, false);

    let spatial_energy = norm_sq(&original.data);
    let spectral_energy = norm_sq(&grid.data) / (n * n) as f64;

    assert!(
        (spatial_energy - spectral_energy).abs() < 1e-9 * spatial_energy.max(1.0),
        "{spatial_energy} vs {spectral_energy}"
    );
}

#[test]
fn fft1d_on_a_single_sample_is_a_no_op() {
    let mut buf = vec![3.0, -2.0];
    fft1d(&mut buf, 1, false, 0, 1);
    assert_eq!(buf, vec![3.0, -2.0]);
}

#[test]
fn fft1d_strided_column_matches_contiguous_row() {
    // A length-4 transform placed at stride 3 in a larger buffer must match
    // the same transform run contiguously.
    let n = 4;
    let mut contiguous = vec![1.0, 0.0, 2.0, 0.0, -1.0, 0.0, 0.5, 0.0];
    fft1d(&mut contiguous, n, false, 0, 1);

    let mut strided = vec![0.0; 2 + 3 * (n - 1) * 2 + 2];
    let values = [(1.0, 0.0), (2.0, 0.0), (-1.0, 0.0), (0.5, 0.0)];
    for (k, (re, im)) in values.iter().enumerate() {
        strided[2 * (3 * k)] = *re;
        strided[2 * (3 * k) + 1] = *im;
    }
    fft1d(&mut strided, n, false, 0, 3);

    for k in 0..n {
        assert!((strided[2 * (3 * k)] - contiguous[2 * k]).abs() < 1e-12);
        assert!((strided[2 * (3 * k) + 1] - contiguous[2 * k + 1]).abs() < 1e-12);
    }
}
