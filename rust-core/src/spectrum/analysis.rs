//! Zoomed band analyzer
//!
//! Combines a band description with a cached chirp-z plan for repeated
//! analysis of equally sized signal blocks.

use log::info;
use num_complex::Complex64;

use super::power::{peak_bin, power, power_db};
use crate::error::{CztError, Result};
use crate::transform::kernel::fft_length;
use crate::transform::{CztPlan, FrequencyBand, DEFAULT_MAX_FFT_LEN};

/// Band analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Number of frequency points across the band (>= 2)
    pub points: usize,

    /// Analyzed band
    pub band: FrequencyBand,

    /// Reference amplitude for dB output
    pub reference: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            points: 501,
            band: FrequencyBand::with_sample_rate(10.0, 15.0, 1000.0),
            reference: 1.0,
        }
    }
}

/// High-resolution spectrum analyzer for a fixed frequency band
pub struct BandAnalyzer {
    config: AnalyzerConfig,
    plan: Option<CztPlan>,
}

impl BandAnalyzer {
    /// Create new band analyzer
    ///
    /// The plan itself is built on first use, once the block length is known.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self { config, plan: None })
    }

    /// Complex spectrum of `signal` over the configured band
    pub fn analyze_complex<T>(&mut self, signal: &[T]) -> Result<Vec<Complex64>>
    where
        T: Copy + Into<Complex64>,
    {
        self.plan_for(signal.len())?.process(signal)
    }

    /// Power spectrum |X(f)|² over the configured band
    pub fn analyze<T>(&mut self, signal: &[T]) -> Result<Vec<f64>>
    where
        T: Copy + Into<Complex64>,
    {
        Ok(power(&self.analyze_complex(signal)?))
    }

    /// Power spectrum in dB relative to the configured reference
    pub fn analyze_db<T>(&mut self, signal: &[T]) -> Result<Vec<f64>>
    where
        T: Copy + Into<Complex64>,
    {
        let spectrum = self.analyze(signal)?;
        Ok(power_db(&spectrum, self.config.reference))
    }

    /// Frequency of the strongest bin, in the band's units
    pub fn peak_frequency<T>(&mut self, signal: &[T]) -> Result<Option<f64>>
    where
        T: Copy + Into<Complex64>,
    {
        let spectrum = self.analyze(signal)?;
        let freqs = self.frequency_bins()?;
        Ok(peak_bin(&spectrum).map(|bin| freqs[bin]))
    }

    /// Evaluated frequencies (Hz when the band carries a sample rate)
    pub fn frequency_bins(&self) -> Result<Vec<f64>> {
        self.config.band.frequencies(self.config.points)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<()> {
        validate_config(&config)?;

        let needs_new_plan =
            config.band != self.config.band || config.points != self.config.points;
        if needs_new_plan {
            self.plan = None;
        }

        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.config.points
    }

    fn plan_for(&mut self, n: usize) -> Result<&CztPlan> {
        let plan = match self.plan.take() {
            Some(plan) if plan.input_len() == n => plan,
            previous => {
                if let Some(old) = previous {
                    info!(
                        "block length changed from {} to {}, rebuilding czt plan",
                        old.input_len(),
                        n
                    );
                }
                CztPlan::for_band(n, self.config.points, &self.config.band)?
            }
        };

        let plan: &CztPlan = self.plan.insert(plan);
        Ok(plan)
    }
}

/// Band, point count and dB reference must all be usable before any block arrives
fn validate_config(config: &AnalyzerConfig) -> Result<()> {
    config.band.contour(config.points)?;
    // Smallest plan the analyzer could build: a single-sample block
    fft_length(1, config.points, DEFAULT_MAX_FFT_LEN)?;

    if !(config.reference.is_finite() && config.reference > 0.0) {
        return Err(CztError::InvalidReference(config.reference));
    }
    Ok(())
}
