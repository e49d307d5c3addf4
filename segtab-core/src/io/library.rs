use crate::error::{BioError, BioResult};
use crate::gene::table::GeneTable;
use crate::io::fasta::read_fasta_records_from_path;
use crate::io::filename::parse_library_filename;
use crate::io::table::write_gene_table_to_path;
use crate::io::{OnError, ReadReport, SkippedFile};
use std::fs;
use std::path::{Path, PathBuf};

pub const LIBRARY_EXTENSION: &str = "fasta";

/// `*.fasta` files directly inside `dir`, sorted by path. Hidden files
/// (`.` prefix, e.g. `._V_IGH.fasta` resource forks) are never listed.
pub fn library_files(dir: impl AsRef<Path>) -> BioResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let dir_err = |source: std::io::Error| BioError::LibraryDir {
        path: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_err)? {
        let entry = entry.map_err(dir_err)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == LIBRARY_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Build one gene table from every `SEGMENT_CHAIN.fasta` file in `dir`.
///
/// Files whose name does not carry a segment and chain are reported in
/// `skipped` under [`OnError::Skip`] and fail the call under [`OnError::Raise`].
/// Malformed FASTA content always fails.
pub fn read_library_dir(
    dir: impl AsRef<Path>,
    on_error: OnError,
) -> BioResult<ReadReport<GeneTable>> {
    let mut table = GeneTable::new();
    let mut skipped = Vec::new();

    for path in library_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = match parse_library_filename(&name) {
            Ok(parsed) => parsed,
            Err(err) => match on_error {
                OnError::Raise => return Err(err),
                OnError::Skip => {
                    skipped.push(SkippedFile {
                        path: path.display().to_string().into_boxed_str(),
                        message: err.to_string().into_boxed_str(),
                    });
                    continue;
                }
            },
        };

        let records = read_fasta_records_from_path(&path)?;
        table.append(GeneTable::from_records(
            &parsed.chain,
            &parsed.segment,
            &records,
        ));
    }

    Ok(ReadReport {
        data: table,
        skipped,
    })
}

/// Scan `dir` and write the combined table to `output`.
///
/// `data` is the number of rows written, or `None` when the library held no
/// records; in that case no file is created.
pub fn write_library_table(
    dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    on_error: OnError,
) -> BioResult<ReadReport<Option<usize>>> {
    let report = read_library_dir(dir, on_error)?;
    let written = if report.data.is_empty() {
        None
    } else {
        write_gene_table_to_path(&report.data, output)?;
        Some(report.data.len())
    };
    Ok(ReadReport {
        data: written,
        skipped: report.skipped,
    })
}
