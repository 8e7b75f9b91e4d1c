//! Direct O(N·M) evaluation of the Z-transform along a contour

use num_complex::Complex64;

use super::options::Contour;
use crate::error::{CztError, Result};

/// Evaluate X(z_k) = Σ x[j] · z_k^(-j) at z_k = a · w^(-k), k = 0..m-1
///
/// Each point is evaluated with Horner's rule in z_k^(-1), so no large
/// powers of the contour parameters are ever formed. Slow, but free of the
/// FFT round-trip error; useful as a reference for the fast transform.
pub fn direct_z_transform<T>(x: &[T], contour: &Contour) -> Result<Vec<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    let Some((&last, rest)) = x.split_last() else {
        return Err(CztError::EmptyInput);
    };

    let a_inv = contour.a.inv();
    let ln_w = contour.w.ln();

    let y = (0..contour.m)
        .map(|k| {
            // z_k^(-1) = a^(-1) · w^k
            let z_inv = a_inv * (ln_w * k as f64).exp();
            let init: Complex64 = last.into();
            rest.iter().rev().fold(init, |acc, &sample| {
                let sample: Complex64 = sample.into();
                acc * z_inv + sample
            })
        })
        .collect();

    Ok(y)
}
