//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::CztError;

mod transform_bindings;
mod analyzer_bindings;

impl From<CztError> for PyErr {
    fn from(err: CztError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn chirpz(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform_bindings::czt, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::czt_range, m)?)?;
    m.add_class::<analyzer_bindings::PyBandAnalyzer>()?;

    Ok(())
}
