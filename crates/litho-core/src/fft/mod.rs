//! Radix-2 Cooley-Tukey FFT kernel: 1-D and 2-D in-place complex transforms
//! plus the quadrant-swap ("fft-shift") operator used to center the spectrum.

mod tables;

/// An N x N grid of complex samples, stored row-major as interleaved
/// `[re0, im0, re1, im1, ...]` reals in a single contiguous buffer.
#[derive(Clone, Debug)]
pub struct ComplexGrid {
    pub n: usize,
    pub data: Vec<f64>,
}

impl ComplexGrid {
    /// Allocates a zeroed N x N grid.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; 2 * n * n],
        }
    }

    /// Loads a real-valued N x N mask into the real channel, zeroing the imaginary channel.
    pub fn load_real(&mut self, mask: &[f64]) {
        debug_assert_eq!(mask.len(), self.n * self.n);
        for (i, &v) in mask.iter().enumerate() {
            self.data[2 * i] = v;
            self.data[2 * i + 1] = 0.0;
        }
    }

    #[inline]
    pub fn re(&self, r: usize, c: usize) -> f64 {
        self.data[2 * (r * self.n + c)]
    }

    #[inline]
    pub fn im(&self, r: usize, c: usize) -> f64 {
        self.data[2 * (r * self.n + c) + 1]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, re: f64, im: f64) {
        let i = 2 * (r * self.n + c);
        self.data[i] = re;
        self.data[i + 1] = im;
    }
}

/// In-place radix-2 Cooley-Tukey transform over N complex samples drawn from
/// `buf` at positions `offset, offset+stride, offset+2*stride, ...` (positions
/// are complex-sample indices; each occupies two adjacent reals in `buf`).
///
/// N must be a power of two; this is a caller contract, not a runtime check.
pub fn fft1d(buf: &mut [f64], n: usize, inverse: bool, offset: usize, stride: usize) {
    assert!(n.is_power_of_two(), "fft1d: N must be a power of two, got {n}");
    if n <= 1 {
        return;
    }
    let log2n = n.trailing_zeros() as usize;

    let rev = tables::bit_reversal_table(n);
    for i in 0..n {
        let j = rev[i];
        if j > i {
            let pi = offset + stride * i;
            let pj = offset + stride * j;
            buf.swap(2 * pi, 2 * pj);
            buf.swap(2 * pi + 1, 2 * pj + 1);
        }
    }

    for s in 1..=log2n {
        let block = 1usize << s;
        let half = block >> 1;
        let tw = tables::twiddle_table(half, inverse);
        for k in (0..n).step_by(block) {
            for j in 0..half {
                let (wr, wi) = tw[j];
                let p_top = offset + stride * (k + j);
                let p_bot = offset + stride * (k + j + half);
                let br = buf[2 * p_bot];
                let bi = buf[2 * p_bot + 1];
                let tr = wr * br - wi * bi;
                let ti = wr * bi + wi * br;
                let top_re = buf[2 * p_top];
                let top_im = buf[2 * p_top + 1];
                buf[2 * p_top] = top_re + tr;
                buf[2 * p_top + 1] = top_im + ti;
                buf[2 * p_bot] = top_re - tr;
                buf[2 * p_bot + 1] = top_im - ti;
            }
        }
    }

    if inverse {
        let scale = 1.0 / n as f64;
        for i in 0..n {
            let p = offset + stride * i;
            buf[2 * p] *= scale;
            buf[2 * p + 1] *= scale;
        }
    }
}

/// 2-D transform via row-then-column decomposition. Rows are contiguous
/// (stride-1 fast path); columns are strided and go through a reusable
/// gather/scatter scratch buffer.
pub fn fft2d(grid: &mut ComplexGrid, inverse: bool) {
    let n = grid.n;
    for r in 0..n {
        fft1d(&mut grid.data, n, inverse, r * n, 1);
    }

    let mut col = vec![0.0f64; 2 * n];
    for c in 0..n {
        for r in 0..n {
            let src = 2 * (r * n + c);
            col[2 * r] = grid.data[src];
            col[2 * r + 1] = grid.data[src + 1];
        }
        fft1d(&mut col, n, inverse, 0, 1);
        for r in 0..n {
            let dst = 2 * (r * n + c);
            grid.data[dst] = col[2 * r];
            grid.data[dst + 1] = col[2 * r + 1];
        }
    }
}

/// Swaps diagonally opposite quadrants so the DC bin moves between corner
/// (0,0) and center (N/2, N/2). An involution for even N: applying it twice
/// restores the original grid.
pub fn fftshift(grid: &mut ComplexGrid) {
    let n = grid.n;
    debug_assert_eq!(n % 2, 0, "fftshift is only specified for even N");
    let half = n / 2;
    for r in 0..half {
        for c in 0..half {
            let (r0, c0) = (r, c);
            let (r1, c1) = (r + half, c + half);
            swap_cells(grid, r0, c0, r1, c1);

            let (r0, c0) = (r, c + half);
            let (r1, c1) = (r + half, c);
            swap_cells(grid, r0, c0, r1, c1);
        }
    }
}

fn swap_cells(grid: &mut ComplexGrid, r0: usize, c0: usize, r1: usize, c1: usize) {
    let n = grid.n;
    let i0 = 2 * (r0 * n + c0);
    let i1 = 2 * (r1 * n + c1);
    grid.data.swap(i0, i1);
    grid.data.swap(i0 + 1, i1 + 1);
}
