use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::extract_seq_bytes;
use segtab_core::gene::segment::{translate_segment as core_translate_segment, Segment};
use segtab_core::seq::dna::NucleotideSeq;
use segtab_core::seq::motif;
use segtab_core::seq::translate::{
    translate as translate_bases, translate_all_frames as all_frames,
};

#[pyfunction]
#[pyo3(signature = (seq, offset = 0))]
fn translate(seq: &Bound<'_, PyAny>, offset: usize) -> PyResult<String> {
    let bytes = extract_seq_bytes(seq)?;
    Ok(translate_bases(&bytes, offset).to_string())
}

#[pyfunction]
fn translate_all_frames(seq: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let bytes = extract_seq_bytes(seq)?;
    Ok(all_frames(&bytes).iter().map(|p| p.to_string()).collect())
}

#[pyfunction]
fn select_translation(translations: Vec<String>) -> String {
    match motif::select_frame_index(&translations) {
        Some(idx) => translations[idx].clone(),
        None => String::new(),
    }
}

#[pyfunction]
fn translate_segment(segment: &str, seq: &Bound<'_, PyAny>) -> PyResult<String> {
    let bases = NucleotideSeq::new(extract_seq_bytes(seq)?);
    Ok(core_translate_segment(&Segment::parse(segment), &bases).to_string())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    m.add_function(wrap_pyfunction!(translate_all_frames, m)?)?;
    m.add_function(wrap_pyfunction!(select_translation, m)?)?;
    m.add_function(wrap_pyfunction!(translate_segment, m)?)?;
    Ok(())
}
