//! Zero-padded real FFT baseline
//!
//! The spectrum a plain (optionally zero-padded) DFT gives for a real
//! signal, used as the point of comparison for zoomed chirp-z spectra.

use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use crate::error::{CztError, Result};

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples after padding)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size; shorter signals are zero-padded to it
    pub fn new(fft_size: usize) -> Result<Self> {
        if fft_size == 0 {
            return Err(CztError::InvalidLength {
                name: "fft_size",
                value: fft_size,
                reason: "FFT size must be positive",
            });
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the one-sided complex spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal, at most fft_size samples (zero-padded if shorter)
    ///
    /// # Returns
    /// X[k] for k = 0..fft_size/2
    pub fn compute(&mut self, signal: &[f64]) -> Result<Vec<Complex64>> {
        if signal.len() > self.fft_size {
            return Err(CztError::LengthMismatch {
                expected: self.fft_size,
                got: signal.len(),
            });
        }

        let copy_len = signal.len();
        self.input_buffer[..copy_len].copy_from_slice(signal);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| CztError::Fft(e.to_string()))?;

        Ok(self.output_buffer.clone())
    }

    /// Compute power spectrum (magnitude squared)
    pub fn compute_power(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(super::power::power(&self.compute(signal)?))
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Spacing between bins in Hz
    pub fn bin_width_hz(&self, sample_rate: f64) -> f64 {
        sample_rate / self.fft_size as f64
    }

    /// Frequency of every bin in Hz
    pub fn frequency_axis_hz(&self, sample_rate: f64) -> Vec<f64> {
        let df = self.bin_width_hz(sample_rate);
        (0..self.num_bins()).map(|bin| bin as f64 * df).collect()
    }
}
