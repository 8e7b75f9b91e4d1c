//! Python bindings for the chirp-z transform functions

use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::transform::{self, CztOptions};

/// Sample array accepted from Python: float64 or complex128
#[derive(FromPyObject)]
pub enum Samples<'py> {
    Real(PyReadonlyArray1<'py, f64>),
    Complex(PyReadonlyArray1<'py, Complex64>),
}

impl Samples<'_> {
    /// Copy out of the numpy buffer (handles strided views)
    pub fn to_complex_vec(&self) -> Vec<Complex64> {
        match self {
            Samples::Real(arr) => arr
                .as_array()
                .iter()
                .map(|&v| Complex64::new(v, 0.0))
                .collect(),
            Samples::Complex(arr) => arr.as_array().to_vec(),
        }
    }
}

/// Chirp-z transform of x
///
/// Args:
///     x: Input samples (float64 or complex128 numpy array)
///     m: Number of output points (default: len(x))
///     w: Ratio between contour points (default: exp(-2j*pi/m))
///     a: Contour starting point (default: 1)
///
/// Returns:
///     complex128 numpy array of length m
#[pyfunction]
#[pyo3(signature = (x, m=None, w=None, a=None))]
pub fn czt<'py>(
    py: Python<'py>,
    x: Samples<'py>,
    m: Option<usize>,
    w: Option<Complex64>,
    a: Option<Complex64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let samples = x.to_complex_vec();
    let options = CztOptions {
        m,
        w,
        a,
        ..CztOptions::default()
    };

    let y = py.allow_threads(|| transform::czt_with(&samples, &options))?;
    Ok(PyArray1::from_vec(py, y))
}

/// Spectrum of x at m evenly spaced frequencies over [fmin, fmax]
///
/// Args:
///     x: Input samples (float64 or complex128 numpy array)
///     m: Number of output points (>= 2)
///     fmin: First frequency
///     fmax: Last frequency
///     fs: Sample rate in Hz; when omitted fmin/fmax are in cycles/sample
///
/// Returns:
///     complex128 numpy array of length m
#[pyfunction]
#[pyo3(signature = (x, m, fmin, fmax, fs=None))]
pub fn czt_range<'py>(
    py: Python<'py>,
    x: Samples<'py>,
    m: usize,
    fmin: f64,
    fmax: f64,
    fs: Option<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let samples = x.to_complex_vec();

    let y = py.allow_threads(|| transform::czt_range(&samples, m, fmin, fmax, fs))?;
    Ok(PyArray1::from_vec(py, y))
}
