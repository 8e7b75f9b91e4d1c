//! Transform configuration with explicit fallbacks

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{CztError, Result};

/// Default ceiling on the padded FFT length (2^26 complex samples, 1 GiB)
pub const DEFAULT_MAX_FFT_LEN: usize = 1 << 26;

/// Chirp-z transform configuration
///
/// Unset fields fall back as follows once the input length `n` is known:
/// * `m` - `n` (one output per input sample)
/// * `w` - `exp(-2πi / m)`, uniform steps around the whole unit circle
/// * `a` - `1`, start on the positive real axis
///
/// With all three left unset the transform is the plain DFT.
#[derive(Debug, Clone, PartialEq)]
pub struct CztOptions {
    /// Number of output points
    pub m: Option<usize>,

    /// Ratio between successive contour points
    pub w: Option<Complex64>,

    /// Contour starting point
    pub a: Option<Complex64>,

    /// Largest padded FFT length a plan may allocate
    pub max_fft_len: usize,
}

impl Default for CztOptions {
    fn default() -> Self {
        Self {
            m: None,
            w: None,
            a: None,
            max_fft_len: DEFAULT_MAX_FFT_LEN,
        }
    }
}

/// Fully resolved contour parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contour {
    pub m: usize,
    pub w: Complex64,
    pub a: Complex64,
}

impl CztOptions {
    pub fn with_points(mut self, m: usize) -> Self {
        self.m = Some(m);
        self
    }

    pub fn with_ratio(mut self, w: Complex64) -> Self {
        self.w = Some(w);
        self
    }

    pub fn with_start(mut self, a: Complex64) -> Self {
        self.a = Some(a);
        self
    }

    pub fn with_max_fft_len(mut self, max_fft_len: usize) -> Self {
        self.max_fft_len = max_fft_len;
        self
    }

    /// Resolve defaults against input length `n` and validate the contour
    pub fn resolve(&self, n: usize) -> Result<Contour> {
        if n == 0 {
            return Err(CztError::EmptyInput);
        }

        let m = self.m.unwrap_or(n);
        if m == 0 {
            return Err(CztError::InvalidLength {
                name: "m",
                value: m,
                reason: "at least one output point is required",
            });
        }

        let w = self
            .w
            .unwrap_or_else(|| Complex64::from_polar(1.0, -2.0 * PI / m as f64));
        let a = self.a.unwrap_or(Complex64::new(1.0, 0.0));

        check_contour_point("w", w)?;
        check_contour_point("a", a)?;

        Ok(Contour { m, w, a })
    }
}

fn check_contour_point(name: &'static str, z: Complex64) -> Result<()> {
    if !z.is_finite() {
        return Err(CztError::NonFiniteParameter {
            name,
            value: z.to_string(),
        });
    }
    if z.norm_sqr() == 0.0 {
        return Err(CztError::DegenerateContour { name });
    }
    Ok(())
}
