//! Python bindings for band analysis

use numpy::PyArray1;
use pyo3::prelude::*;

use super::transform_bindings::Samples;
use crate::spectrum::{AnalyzerConfig, BandAnalyzer};
use crate::transform::FrequencyBand;

/// Zoomed band analyzer exposed to Python
#[pyclass(name = "BandAnalyzer")]
pub struct PyBandAnalyzer {
    analyzer: BandAnalyzer,
}

#[pymethods]
impl PyBandAnalyzer {
    /// Create a new band analyzer
    ///
    /// Args:
    ///     fmin: First analyzed frequency
    ///     fmax: Last analyzed frequency
    ///     points: Number of frequency points (>= 2)
    ///     fs: Sample rate in Hz; when omitted fmin/fmax are in cycles/sample
    ///     reference: Reference amplitude for dB output
    #[new]
    #[pyo3(signature = (fmin, fmax, points=501, fs=None, reference=1.0))]
    fn new(fmin: f64, fmax: f64, points: usize, fs: Option<f64>, reference: f64) -> PyResult<Self> {
        let config = AnalyzerConfig {
            points,
            band: FrequencyBand { fmin, fmax, fs },
            reference,
        };

        Ok(Self {
            analyzer: BandAnalyzer::new(config)?,
        })
    }

    /// Power spectrum over the band
    fn analyze<'py>(&mut self, py: Python<'py>, signal: Samples<'py>) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze(&signal.to_complex_vec())?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Power spectrum over the band in dB
    fn analyze_db<'py>(&mut self, py: Python<'py>, signal: Samples<'py>) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze_db(&signal.to_complex_vec())?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Frequency of the strongest bin
    fn peak_frequency<'py>(&mut self, signal: Samples<'py>) -> PyResult<Option<f64>> {
        Ok(self.analyzer.peak_frequency(&signal.to_complex_vec())?)
    }

    /// Evaluated frequencies
    fn frequency_bins<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let freqs = self.analyzer.frequency_bins()?;
        Ok(PyArray1::from_vec(py, freqs))
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }
}
