//! Chirp-z transform (Bluestein's algorithm)

pub mod options;
pub mod kernel;
pub mod plan;
pub mod direct;
pub mod range;

pub use options::{Contour, CztOptions, DEFAULT_MAX_FFT_LEN};
pub use plan::CztPlan;
pub use direct::direct_z_transform;
pub use range::FrequencyBand;

use num_complex::Complex64;

use crate::error::Result;

/// Chirp-z transform of `x` with all defaults
///
/// Returns `x.len()` points uniformly spaced around the unit circle, which is
/// the standard DFT of `x`.
pub fn czt<T>(x: &[T]) -> Result<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    czt_with(x, &CztOptions::default())
}

/// Chirp-z transform of `x` along the contour described by `options`
///
/// # Arguments
/// * `x` - Input samples (N >= 1), real or complex
/// * `options` - Point count `m`, ratio `w` and start `a`; see [`CztOptions`]
///
/// # Returns
/// `m` samples of the Z-transform at `a · w^(-k)`, k = 0..m-1
pub fn czt_with<T>(x: &[T], options: &CztOptions) -> Result<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    CztPlan::new(x.len(), options)?.process(x)
}

/// Sample the spectrum of `x` at `m` evenly spaced frequencies over `[fmin, fmax]`
///
/// # Arguments
/// * `x` - Input samples
/// * `m` - Number of output points (>= 2)
/// * `fmin`, `fmax` - Band edges, in Hz when `fs` is given, else cycles/sample
/// * `fs` - Optional sample rate in Hz
///
/// # Returns
/// `m` complex samples, the first at `fmin` and the last at `fmax`
pub fn czt_range<T>(x: &[T], m: usize, fmin: f64, fmax: f64, fs: Option<f64>) -> Result<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    let band = FrequencyBand { fmin, fmax, fs };
    CztPlan::for_band(x.len(), m, &band)?.process(x)
}
