//! Spectral post-processing and band analysis

pub mod power;
pub mod fft;
pub mod analysis;

pub use power::{magnitude, peak_bin, power, power_db};
pub use fft::FftEngine;
pub use analysis::{AnalyzerConfig, BandAnalyzer};
