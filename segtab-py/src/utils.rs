use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use segtab_core::error::BioError;

pub fn extract_seq_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))
}

pub fn to_py_err(err: BioError) -> PyErr {
    match err {
        BioError::FastaIo(io) => PyIOError::new_err(io.to_string()),
        BioError::LibraryDir { .. } | BioError::MergeIo { .. } => {
            PyIOError::new_err(err.to_string())
        }
        other => PyValueError::new_err(other.to_string()),
    }
}
