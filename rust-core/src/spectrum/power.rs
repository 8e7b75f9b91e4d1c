//! Power spectrum helpers for transform output

use num_complex::Complex64;

/// Magnitude |y[k]|
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Power |y[k]|²
pub fn power(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm_sqr()).collect()
}

/// Convert power values to dB relative to `reference` (an amplitude)
///
/// # Returns
/// 10*log10(p / reference²), with p clamped to avoid log(0)
pub fn power_db(power: &[f64], reference: f64) -> Vec<f64> {
    power
        .iter()
        .map(|&p| {
            let p_clamped = p.max(1e-20);
            10.0 * (p_clamped / (reference * reference)).log10()
        })
        .collect()
}

/// Index of the largest finite value
pub fn peak_bin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}
