#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::report::SkippedFile;
use crate::utils::to_py_err;
use segtab_core::gene::record::GeneRecord as CoreGeneRecord;
use segtab_core::io::library::{read_library_dir, write_library_table};
use segtab_core::io::OnError;

#[pyclass(frozen)]
#[derive(Clone)]
pub struct GeneRecord {
    pub(crate) inner: CoreGeneRecord,
}

#[pymethods]
impl GeneRecord {
    #[getter]
    fn chain(&self) -> &str {
        self.inner.chain()
    }

    #[getter]
    fn segment(&self) -> &str {
        self.inner.segment().as_str()
    }

    #[getter]
    fn gene_name(&self) -> &str {
        self.inner.gene_name()
    }

    #[getter]
    fn sequence(&self) -> String {
        self.inner.sequence().to_string()
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "GeneRecord(chain={:?}, segment={:?}, gene_name={:?}, sequence={:?})",
            self.inner.chain(),
            self.inner.segment().as_str(),
            self.inner.gene_name(),
            self.inner.sequence().to_string()
        ))
    }
}

fn on_error(skip_invalid: bool) -> OnError {
    if skip_invalid {
        OnError::Skip
    } else {
        OnError::Raise
    }
}

#[pyfunction]
#[pyo3(signature = (input_dir, skip_invalid = true))]
fn build_gene_table(
    input_dir: &str,
    skip_invalid: bool,
) -> PyResult<(Vec<GeneRecord>, Vec<SkippedFile>)> {
    let report = read_library_dir(input_dir, on_error(skip_invalid)).map_err(to_py_err)?;
    let records = report
        .data
        .into_records()
        .into_iter()
        .map(|inner| GeneRecord { inner })
        .collect();
    let skipped = report.skipped.into_iter().map(SkippedFile::from).collect();
    Ok((records, skipped))
}

/// Build the table for `input_dir` and write it as TSV.
///
/// Returns the row count and the skipped files; the count is `None` and no
/// file is written when the library holds no records.
#[pyfunction]
#[pyo3(signature = (input_dir, output = "combined_table.tsv", skip_invalid = true))]
fn write_gene_table(
    input_dir: &str,
    output: &str,
    skip_invalid: bool,
) -> PyResult<(Option<usize>, Vec<SkippedFile>)> {
    let report =
        write_library_table(input_dir, output, on_error(skip_invalid)).map_err(to_py_err)?;
    let skipped = report.skipped.into_iter().map(SkippedFile::from).collect();
    Ok((report.data, skipped))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GeneRecord>()?;
    m.add_function(wrap_pyfunction!(build_gene_table, m)?)?;
    m.add_function(wrap_pyfunction!(write_gene_table, m)?)?;
    Ok(())
}
