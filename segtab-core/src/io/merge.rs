//! Merge gene library JSON documents.
//!
//! Each input holds a top-level array of library objects. The merged object
//! is the first file's first entry with `genes` replaced by every entry's
//! genes in input order, and `sequenceFragments` likewise when any exist.

use crate::error::{BioError, BioResult};
use crate::io::{ReadReport, SkippedFile};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const GENES_KEY: &str = "genes";
pub const FRAGMENTS_KEY: &str = "sequenceFragments";
pub const DEFAULT_MERGED_NAME: &str = "merged.json";

fn read_json(path: &Path) -> BioResult<Value> {
    let path_str = || path.display().to_string();
    let file = File::open(path).map_err(|source| BioError::MergeIo {
        path: path_str(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| BioError::MergeJson {
        path: path_str(),
        source,
    })
}

fn skipped(path: &Path, message: &str) -> SkippedFile {
    SkippedFile {
        path: path.display().to_string().into_boxed_str(),
        message: message.into(),
    }
}

/// Merge `inputs` in order. Inputs that are not files and documents that are
/// not arrays are reported in `skipped`. The first readable input must be a
/// non-empty array whose first entry is an object.
pub fn merge_library_json<P: AsRef<Path>>(inputs: &[P]) -> BioResult<ReadReport<Value>> {
    let mut skipped_files = Vec::new();
    let mut files = Vec::new();
    for input in inputs {
        let path = input.as_ref();
        if path.is_file() {
            files.push(path);
        } else {
            skipped_files.push(skipped(path, "no such file"));
        }
    }
    let Some(&first) = files.first() else {
        return Err(BioError::NoMergeInputs);
    };

    let mut documents = Vec::with_capacity(files.len());
    for &path in &files {
        documents.push((path, read_json(path)?));
    }

    let mut merged = match documents[0].1.as_array().and_then(|entries| entries.first()) {
        Some(Value::Object(header)) => header.clone(),
        Some(_) => {
            return Err(BioError::MergeInput {
                path: first.display().to_string(),
                msg: "first entry is not a JSON object",
            })
        }
        None => {
            return Err(BioError::MergeInput {
                path: first.display().to_string(),
                msg: "does not contain a non-empty JSON array",
            })
        }
    };

    let mut genes = Vec::new();
    let mut fragments = Vec::new();
    for (path, document) in documents {
        let Value::Array(entries) = document else {
            skipped_files.push(skipped(path, "not a JSON array"));
            continue;
        };
        for mut entry in entries {
            if let Some(Value::Array(list)) = entry.get_mut(GENES_KEY).map(Value::take) {
                genes.extend(list);
            }
            if let Some(Value::Array(list)) = entry.get_mut(FRAGMENTS_KEY).map(Value::take) {
                fragments.extend(list);
            }
        }
    }

    merged.insert(GENES_KEY.to_string(), Value::Array(genes));
    if !fragments.is_empty() {
        merged.insert(FRAGMENTS_KEY.to_string(), Value::Array(fragments));
    }

    Ok(ReadReport {
        data: Value::Object(merged),
        skipped: skipped_files,
    })
}

/// Pretty-print `merged` to `path` with two-space indentation.
pub fn write_merged_json(merged: &Value, path: impl AsRef<Path>) -> BioResult<()> {
    let path = path.as_ref();
    let io_err = |source| BioError::MergeIo {
        path: path.display().to_string(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, merged).map_err(|source| BioError::MergeJson {
        path: path.display().to_string(),
        source,
    })?;
    writer.flush().map_err(io_err)
}
