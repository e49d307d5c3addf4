use pyo3::prelude::*;
use pyo3::types::PyModule;

use segtab_core::io::SkippedFile as CoreSkippedFile;

#[pyclass(frozen)]
#[derive(Clone)]
pub struct SkippedFile {
    pub(crate) path: String,
    pub(crate) message: String,
}

#[pymethods]
impl SkippedFile {
    #[getter]
    fn path(&self) -> &str {
        &self.path
    }

    #[getter]
    fn message(&self) -> &str {
        &self.message
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "SkippedFile(path={:?}, message={:?})",
            self.path, self.message
        ))
    }
}

impl From<CoreSkippedFile> for SkippedFile {
    fn from(value: CoreSkippedFile) -> Self {
        Self {
            path: value.path.to_string(),
            message: value.message.to_string(),
        }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SkippedFile>()?;
    Ok(())
}
