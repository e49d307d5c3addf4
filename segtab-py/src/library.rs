use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::report::SkippedFile;
use crate::utils::to_py_err;
use segtab_core::io::merge::{merge_library_json, write_merged_json, DEFAULT_MERGED_NAME};
use segtab_core::io::validate;

/// Merge library JSON files into `output`; returns the inputs that were skipped.
#[pyfunction]
#[pyo3(signature = (inputs, output = DEFAULT_MERGED_NAME))]
fn merge_json(inputs: Vec<String>, output: &str) -> PyResult<Vec<SkippedFile>> {
    let report = merge_library_json(&inputs).map_err(to_py_err)?;
    write_merged_json(&report.data, output).map_err(to_py_err)?;
    Ok(report.skipped.into_iter().map(SkippedFile::from).collect())
}

/// Check FASTA text; returns the sequence count and `(line, header)` pairs.
/// Raises `ValueError` describing the first problem.
#[pyfunction]
fn validate_fasta(content: &str) -> PyResult<(usize, Vec<(usize, String)>)> {
    let summary = validate::validate_fasta(content).map_err(to_py_err)?;
    let headers = summary
        .headers
        .into_iter()
        .map(|h| (h.line, h.header.into_string()))
        .collect();
    Ok((summary.sequence_count, headers))
}

#[pyfunction]
fn looks_like_fasta(content: &str) -> bool {
    validate::looks_like_fasta(content)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(merge_json, m)?)?;
    m.add_function(wrap_pyfunction!(validate_fasta, m)?)?;
    m.add_function(wrap_pyfunction!(looks_like_fasta, m)?)?;
    Ok(())
}
