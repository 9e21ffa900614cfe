/// Grid side length. The core only ever simulates this one size.
pub const N: usize = 256;

/// Physical size of one grid sample, in nanometers.
pub const PIXEL_SIZE_NM: f64 = 19.53125;

/// Field of view spanned by the N x N grid, in micrometers.
pub const FIELD_OF_VIEW_UM: f64 = (N as f64) * PIXEL_SIZE_NM / 1000.0;

/// Spatial-frequency bin spacing, in cycles/nm.
pub const FREQ_SPACING: f64 = 1.0 / (N as f64 * PIXEL_SIZE_NM);
