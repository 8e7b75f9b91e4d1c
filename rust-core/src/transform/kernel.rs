//! Chirp exponents and contour weights for Bluestein's decomposition
//!
//! The cross term `jk` of the Z-transform is split with
//! `jk = (j² + k² - (k - j)²) / 2`, so each index only ever needs the
//! chirp exponent `c(k) = k² / 2`.

use num_complex::Complex64;

use super::options::Contour;
use crate::error::{CztError, Result};

/// Chirp exponent c(k) = k²/2
#[inline]
pub fn chirp_exponent(k: i64) -> f64 {
    let k = k as f64;
    k * k / 2.0
}

/// e1[k] = c(k) for k = 0..n-1
pub fn input_exponents(n: usize) -> Vec<f64> {
    (0..n as i64).map(chirp_exponent).collect()
}

/// e2[k] = -c(k) for k = -(n-1)..m-1 (n + m - 1 values)
pub fn kernel_exponents(n: usize, m: usize) -> Vec<f64> {
    (1 - n as i64..m as i64).map(|k| -chirp_exponent(k)).collect()
}

/// e3[k] = c(k) for k = 0..m-1
pub fn output_exponents(m: usize) -> Vec<f64> {
    (0..m as i64).map(chirp_exponent).collect()
}

/// Smallest power of two >= n + m - 1, bounded by `limit`
pub fn fft_length(n: usize, m: usize, limit: usize) -> Result<usize> {
    let linear_len = n
        .checked_add(m)
        .and_then(|len| len.checked_sub(1))
        .ok_or(CztError::FftTooLarge {
            required: usize::MAX,
            limit,
        })?;

    let nfft = linear_len
        .checked_next_power_of_two()
        .ok_or(CztError::FftTooLarge {
            required: usize::MAX,
            limit,
        })?;

    if nfft > limit {
        return Err(CztError::FftTooLarge {
            required: nfft,
            limit,
        });
    }

    Ok(nfft)
}

/// Pre-weights `a^(-k) · w^e1[k]` applied to the input
pub fn input_weights(contour: &Contour, n: usize) -> Result<Vec<Complex64>> {
    let ln_w = contour.w.ln();
    let ln_a = contour.a.ln();

    let weights: Vec<Complex64> = input_exponents(n)
        .into_iter()
        .enumerate()
        .map(|(k, e)| (ln_w * e - ln_a * k as f64).exp())
        .collect();

    ensure_finite(weights, "input weights")
}

/// Chirp kernel `w^e2[k]`, laid out from k = -(n-1) upwards
pub fn kernel_weights(contour: &Contour, n: usize) -> Result<Vec<Complex64>> {
    let ln_w = contour.w.ln();

    let weights: Vec<Complex64> = kernel_exponents(n, contour.m)
        .into_iter()
        .map(|e| (ln_w * e).exp())
        .collect();

    ensure_finite(weights, "chirp kernel")
}

/// Post-weights `w^e3[k]` applied to the valid convolution region
pub fn output_weights(contour: &Contour) -> Result<Vec<Complex64>> {
    let ln_w = contour.w.ln();

    let weights: Vec<Complex64> = output_exponents(contour.m)
        .into_iter()
        .map(|e| (ln_w * e).exp())
        .collect();

    ensure_finite(weights, "output weights")
}

fn ensure_finite(weights: Vec<Complex64>, stage: &'static str) -> Result<Vec<Complex64>> {
    if weights.iter().all(|z| z.is_finite()) {
        Ok(weights)
    } else {
        Err(CztError::NonFiniteWeights { stage })
    }
}
