use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid frame: {frame} (must be 0, 1, or 2)")]
    InvalidFrame { frame: usize },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("unrecognized library filename '{name}' (expected SEGMENT_CHAIN.fasta)")]
    UnrecognizedFilename { name: String },

    #[error("cannot read library directory {path}: {source}")]
    LibraryDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("gene table error in {path}: {source}")]
    GeneTable {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("gene table missing column '{name}' in {path}. headers: {headers:?}")]
    GeneTableMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("fasta file is empty")]
    EmptyFasta,

    #[error("line {line}: invalid characters in sequence: {chars}")]
    FastaInvalidChars { line: usize, chars: String },

    #[error("no sequences found after headers")]
    NoFastaSequences,

    #[error("no merge input files found")]
    NoMergeInputs,

    #[error("cannot access {path}: {source}")]
    MergeIo {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    MergeJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {msg}")]
    MergeInput { path: String, msg: &'static str },
}

pub type BioResult<T> = Result<T, BioError>;
