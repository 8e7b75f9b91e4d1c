//! Precomputed chirp-z plan
//!
//! Evaluates the Z-transform along `z_k = a · w^(-k)` with three FFT steps:
//! forward FFT of the pre-weighted input, pointwise product with the
//! transformed chirp kernel, inverse FFT. Complexity: O((N+M) log(N+M))
//! instead of O(N·M) for direct evaluation.

use log::{debug, trace};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use super::kernel::{fft_length, input_weights, kernel_weights, output_weights};
use super::options::{Contour, CztOptions};
use super::range::FrequencyBand;
use crate::error::{CztError, Result};

/// Chirp-z transform for a fixed input length and contour
///
/// Holds no mutable state after construction, so one plan can be shared
/// across threads and reused for any number of input blocks.
pub struct CztPlan {
    /// Input length N
    n: usize,

    /// Resolved contour (m, w, a)
    contour: Contour,

    /// FFT size (power of 2, >= N + M - 1)
    nfft: usize,

    /// a^(-k) · w^(k²/2), k = 0..N-1
    input_weights: Vec<Complex64>,

    /// w^(k²/2), k = 0..M-1, with the 1/nfft IFFT scale folded in
    output_weights: Vec<Complex64>,

    /// FFT of the chirp kernel w^(-k²/2), k = -(N-1)..M-1, zero-padded
    kernel_fft: Vec<Complex64>,

    /// Forward FFT
    fft: Arc<dyn Fft<f64>>,

    /// Inverse FFT (unnormalized)
    ifft: Arc<dyn Fft<f64>>,
}

impl CztPlan {
    /// Create a plan for `n` input samples
    ///
    /// # Arguments
    /// * `n` - Input length
    /// * `options` - Contour configuration; unset fields take their defaults
    pub fn new(n: usize, options: &CztOptions) -> Result<Self> {
        let contour = options.resolve(n)?;
        Self::with_contour(n, contour, options.max_fft_len)
    }

    /// Create a plan sampling `m` evenly spaced frequencies over `band`
    pub fn for_band(n: usize, m: usize, band: &FrequencyBand) -> Result<Self> {
        let (w, a) = band.contour(m)?;
        let options = CztOptions::default()
            .with_points(m)
            .with_ratio(w)
            .with_start(a);
        Self::new(n, &options)
    }

    fn with_contour(n: usize, contour: Contour, max_fft_len: usize) -> Result<Self> {
        let m = contour.m;
        let nfft = fft_length(n, m, max_fft_len)?;

        let input_weights = input_weights(&contour, n)?;
        let scale = 1.0 / nfft as f64;
        let output_weights: Vec<Complex64> = output_weights(&contour)?
            .into_iter()
            .map(|z| z * scale)
            .collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(nfft);
        let ifft = planner.plan_fft_inverse(nfft);

        // Transform chirp kernel to frequency domain
        let mut kernel_fft = kernel_weights(&contour, n)?;
        kernel_fft.resize(nfft, Complex64::new(0.0, 0.0));
        fft.process(&mut kernel_fft);

        debug!(
            "czt plan: n={} m={} nfft={} w={} a={}",
            n, m, nfft, contour.w, contour.a
        );

        Ok(Self {
            n,
            contour,
            nfft,
            input_weights,
            output_weights,
            kernel_fft,
            fft,
            ifft,
        })
    }

    /// Evaluate the transform of `x`
    ///
    /// # Arguments
    /// * `x` - Exactly `input_len()` samples, real or complex
    ///
    /// # Returns
    /// `output_len()` samples, y[k] = X(a · w^(-k))
    pub fn process<T>(&self, x: &[T]) -> Result<Vec<Complex64>>
    where
        T: Copy + Into<Complex64>,
    {
        if x.len() != self.n {
            return Err(CztError::LengthMismatch {
                expected: self.n,
                got: x.len(),
            });
        }

        trace!("czt block: {} samples -> {} points", self.n, self.contour.m);

        // 1. Pre-weight input and zero-pad
        let mut buffer = vec![Complex64::new(0.0, 0.0); self.nfft];
        for ((slot, &sample), &weight) in buffer
            .iter_mut()
            .zip(x.iter())
            .zip(self.input_weights.iter())
        {
            let sample: Complex64 = sample.into();
            *slot = sample * weight;
        }

        // 2. Circular convolution with the chirp kernel
        self.fft.process(&mut buffer);
        for (b, k) in buffer.iter_mut().zip(self.kernel_fft.iter()) {
            *b *= *k;
        }
        self.ifft.process(&mut buffer);

        // 3. Valid region starts where the kernel index crosses zero
        let start = self.n - 1;
        let y = buffer[start..start + self.contour.m]
            .iter()
            .zip(self.output_weights.iter())
            .map(|(&v, &weight)| v * weight)
            .collect();

        Ok(y)
    }

    /// Input length N
    pub fn input_len(&self) -> usize {
        self.n
    }

    /// Output length M
    pub fn output_len(&self) -> usize {
        self.contour.m
    }

    /// Padded FFT length
    pub fn fft_len(&self) -> usize {
        self.nfft
    }

    /// Resolved contour parameters
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// The k-th evaluation point a · w^(-k)
    pub fn point(&self, k: usize) -> Complex64 {
        self.contour.a * self.contour.w.powf(-(k as f64))
    }
}

impl std::fmt::Debug for CztPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CztPlan")
            .field("n", &self.n)
            .field("contour", &self.contour)
            .field("nfft", &self.nfft)
            .finish()
    }
}
