//! Pre-flight checks for user supplied FASTA text.
//!
//! Stricter than the reader in [`crate::io::fasta`]: sequence lines must be
//! IUPAC nucleotide codes (either case, `-` for gaps) and at least one header
//! must carry sequence data.

use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use std::fs;
use std::path::Path;

/// A `>` line, without the `>`, and its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaHeader {
    pub line: usize,
    pub header: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaSummary {
    pub sequence_count: usize,
    pub headers: Vec<FastaHeader>,
}

pub fn validate_fasta(content: &str) -> BioResult<FastaSummary> {
    if content.trim().is_empty() {
        return Err(BioError::EmptyFasta);
    }

    let iupac = dna::iupac_alphabet();
    let mut headers = Vec::new();
    let mut sequence_count = 0;
    let mut in_sequence = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if in_sequence {
                sequence_count += 1;
                in_sequence = false;
            }
            if header.is_empty() {
                return Err(BioError::FastaFormat {
                    msg: "header is empty (only contains '>')",
                    line: line_no,
                });
            }
            headers.push(FastaHeader {
                line: line_no,
                header: header.into(),
            });
            continue;
        }

        if headers.is_empty() {
            return Err(BioError::FastaFormat {
                msg: "found sequence data before any header",
                line: line_no,
            });
        }
        if iupac.first_foreign(trimmed.as_bytes()).is_some() {
            let chars: Vec<String> = trimmed
                .chars()
                .filter(|&c| !(c.is_ascii() && iupac.contains(c as u8)))
                .map(String::from)
                .collect();
            return Err(BioError::FastaInvalidChars {
                line: line_no,
                chars: chars.join(", "),
            });
        }
        in_sequence = true;
    }

    if in_sequence {
        sequence_count += 1;
    }
    if sequence_count == 0 {
        return Err(BioError::NoFastaSequences);
    }

    Ok(FastaSummary {
        sequence_count,
        headers,
    })
}

/// Validate a file; invalid UTF-8 is replaced before checking.
pub fn validate_fasta_path(path: impl AsRef<Path>) -> BioResult<FastaSummary> {
    let data = fs::read(path)?;
    validate_fasta(&String::from_utf8_lossy(&data))
}

/// Every `>` line with its line number, whether or not the file is valid.
pub fn fasta_headers(content: &str) -> Vec<FastaHeader> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            line.trim().strip_prefix('>').map(|header| FastaHeader {
                line: idx + 1,
                header: header.into(),
            })
        })
        .collect()
}

/// Quick sniff: first non-blank line is a header and some base letter appears.
pub fn looks_like_fasta(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with('>') && trimmed.bytes().any(|b| b"ACGTUacgtu".contains(&b))
}
