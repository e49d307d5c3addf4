//! Reading-frame translation of nucleotide bytes.
//!
//! Input is normalized first (whitespace dropped, upper-cased), then chunked into
//! non-overlapping codons. A trailing partial codon is discarded.

use crate::error::{BioError, BioResult};
use crate::seq::codon::CodonTable;
use crate::seq::dna::normalize;
use crate::seq::protein::ProteinSeq;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadingFrame {
    Zero,
    One,
    Two,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 3] = [ReadingFrame::Zero, ReadingFrame::One, ReadingFrame::Two];

    #[inline]
    pub fn offset(self) -> usize {
        match self {
            ReadingFrame::Zero => 0,
            ReadingFrame::One => 1,
            ReadingFrame::Two => 2,
        }
    }
}

impl TryFrom<usize> for ReadingFrame {
    type Error = BioError;

    fn try_from(frame: usize) -> BioResult<Self> {
        match frame {
            0 => Ok(ReadingFrame::Zero),
            1 => Ok(ReadingFrame::One),
            2 => Ok(ReadingFrame::Two),
            _ => Err(BioError::InvalidFrame { frame }),
        }
    }
}

/// Translate `seq` after skipping `offset` bases. Offsets past the end give an empty protein.
pub fn translate(seq: &[u8], offset: usize) -> ProteinSeq {
    translate_normalized(&normalize(seq), offset)
}

pub fn translate_frame(seq: &[u8], frame: ReadingFrame) -> ProteinSeq {
    translate(seq, frame.offset())
}

/// Translations in frames 0, 1 and 2, in that order.
pub fn translate_all_frames(seq: &[u8]) -> [ProteinSeq; 3] {
    all_frames_normalized(&normalize(seq))
}

pub(crate) fn translate_normalized(bytes: &[u8], offset: usize) -> ProteinSeq {
    let slice = bytes.get(offset..).unwrap_or_default();
    ProteinSeq::from_bytes_unchecked(translate_to_vec(slice, CodonTable::standard()))
}

pub(crate) fn all_frames_normalized(bytes: &[u8]) -> [ProteinSeq; 3] {
    ReadingFrame::ALL.map(|frame| translate_normalized(bytes, frame.offset()))
}

fn translate_to_vec(bytes: &[u8], table: &CodonTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        out.push(table.lookup(codon));
    }
    out
}
