use pyo3::prelude::*;

mod gene;
mod library;
mod report;
mod translate;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    translate::register(m)?;
    gene::register(m)?;
    library::register(m)?;
    report::register(m)?;
    Ok(())
}
