//! Frequency band to contour mapping
//!
//! A band `[fmin, fmax]` sampled at `m` evenly spaced frequencies is the
//! unit-circle contour starting at `a = exp(2πi·fmin)` and stepping by
//! `w = exp(-2πi·(fmax - fmin)/(m - 1))`, with frequencies in cycles/sample.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::options::DEFAULT_MAX_FFT_LEN;
use crate::error::{CztError, Result};

/// Frequency band for a zoomed spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    /// First evaluated frequency
    pub fmin: f64,

    /// Last evaluated frequency
    pub fmax: f64,

    /// Sample rate in Hz; `None` means fmin/fmax are already in cycles/sample
    pub fs: Option<f64>,
}

impl FrequencyBand {
    /// Band given in cycles/sample
    pub fn normalized(fmin: f64, fmax: f64) -> Self {
        Self {
            fmin,
            fmax,
            fs: None,
        }
    }

    /// Band given in Hz for a signal sampled at `fs`
    pub fn with_sample_rate(fmin: f64, fmax: f64, fs: f64) -> Self {
        Self {
            fmin,
            fmax,
            fs: Some(fs),
        }
    }

    /// Band edges in cycles/sample
    pub fn normalized_edges(&self) -> Result<(f64, f64)> {
        check_finite("fmin", self.fmin)?;
        check_finite("fmax", self.fmax)?;

        match self.fs {
            Some(fs) if !(fs.is_finite() && fs > 0.0) => Err(CztError::InvalidSampleRate(fs)),
            Some(fs) => Ok((self.fmin / fs, self.fmax / fs)),
            None => Ok((self.fmin, self.fmax)),
        }
    }

    /// Contour parameters `(w, a)` for `m` points over the band
    pub fn contour(&self, m: usize) -> Result<(Complex64, Complex64)> {
        check_sweep_points(m)?;
        let (fmin, fmax) = self.normalized_edges()?;

        let step = (fmax - fmin) / (m - 1) as f64;
        let w = Complex64::from_polar(1.0, -2.0 * PI * step);
        let a = Complex64::from_polar(1.0, 2.0 * PI * fmin);

        Ok((w, a))
    }

    /// Spacing between neighbouring output bins, in the band's own units
    pub fn bin_width(&self, m: usize) -> Result<f64> {
        check_sweep_points(m)?;
        if m > DEFAULT_MAX_FFT_LEN {
            return Err(CztError::FftTooLarge {
                required: m,
                limit: DEFAULT_MAX_FFT_LEN,
            });
        }
        self.normalized_edges()?;
        Ok((self.fmax - self.fmin) / (m - 1) as f64)
    }

    /// The `m` evaluated frequencies, fmin first and fmax last
    pub fn frequencies(&self, m: usize) -> Result<Vec<f64>> {
        let step = self.bin_width(m)?;
        let mut freqs: Vec<f64> = (0..m).map(|k| self.fmin + k as f64 * step).collect();

        // Pin the last point so rounding in `step` cannot move the band edge
        if let Some(last) = freqs.last_mut() {
            *last = self.fmax;
        }

        Ok(freqs)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CztError::NonFiniteParameter {
            name,
            value: value.to_string(),
        })
    }
}

fn check_sweep_points(m: usize) -> Result<()> {
    if m < 2 {
        return Err(CztError::InvalidLength {
            name: "m",
            value: m,
            reason: "a band sweep needs at least 2 points",
        });
    }
    Ok(())
}
