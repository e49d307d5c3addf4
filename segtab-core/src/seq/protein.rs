use crate::alphabets::protein;
use crate::error::{BioError, BioResult};
use crate::seq::motif;
use std::fmt;

/// Amino-acid string produced by translation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = protein::translation_alphabet().first_foreign(&bytes) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn has_j_anchor(&self) -> bool {
        motif::find_j_anchor(self.as_bytes()).is_some()
    }

    pub fn stop_count(&self) -> usize {
        memchr::memchr_iter(b'*', self.as_bytes()).count()
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // residues are ASCII
        for &b in &self.bytes {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for ProteinSeq {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
