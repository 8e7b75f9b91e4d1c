//! Chirpz - Zoomed Spectral Analysis Core
//!
//! Chirp-z transform (Bluestein's algorithm): evaluates the Z-transform of a
//! finite sequence along a logarithmic spiral contour, giving high-resolution
//! spectra over narrow frequency bands, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod transform;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{CztError, Result};
pub use transform::{czt, czt_range, czt_with, CztOptions, CztPlan, FrequencyBand};
pub use spectrum::{AnalyzerConfig, BandAnalyzer};
