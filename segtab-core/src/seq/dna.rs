use crate::alphabets::dna;
use crate::seq::protein::ProteinSeq;
use crate::seq::translate;

/// Raw gene bases, whitespace removed and upper-cased. Ambiguity codes pass through;
/// each non-ASCII character becomes a single [`NON_ASCII`] byte.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NucleotideSeq {
    bytes: Vec<u8>,
}

impl NucleotideSeq {
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: normalize(input.as_ref()),
        }
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

    /// True when every base is one of `ACGT`.
    pub fn is_canonical(&self) -> bool {
        dna::alphabet().is_word(self.as_bytes())
    }

    pub fn translate(&self, offset: usize) -> ProteinSeq {
        translate::translate_normalized(self.as_bytes(), offset)
    }

    pub fn translate_all_frames(&self) -> [ProteinSeq; 3] {
        translate::all_frames_normalized(self.as_bytes())
    }
}

impl From<&str> for NucleotideSeq {
    fn from(value: &str) -> Self {
        NucleotideSeq::new(value)
    }
}

/// Stand-in for a non-ASCII character; one per character so codon
/// boundaries follow the text, not its UTF-8 encoding.
pub const NON_ASCII: u8 = b'N';

pub(crate) fn normalize(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    if input.is_ascii() {
        for &b in input {
            if !b.is_ascii_whitespace() {
                out.push(b.to_ascii_uppercase());
            }
        }
        return out;
    }

    for ch in String::from_utf8_lossy(input).chars() {
        if ch.is_ascii() {
            if !ch.is_ascii_whitespace() {
                out.push(ch.to_ascii_uppercase() as u8);
            }
        } else {
            out.push(NON_ASCII);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_uppercases() {
        let s = NucleotideSeq::new("atg ttt\nGGt\r\n\tgct");
        assert_eq!(s.as_bytes(), b"ATGTTTGGTGCT");
        assert_eq!(s.len(), 12);
    }

    #[test]
    fn ambiguity_codes_pass_through() {
        let s = NucleotideSeq::new("acgn-ry");
        assert_eq!(s.as_bytes(), b"ACGN-RY");
        assert!(!s.is_canonical());
        assert!(NucleotideSeq::new("gattaca").is_canonical());
    }

    #[test]
    fn empty_input() {
        let s = NucleotideSeq::new(" \n ");
        assert!(s.is_empty());
        assert!(s.translate(0).is_empty());
    }

    #[test]
    fn construction_never_fails() {
        let s = NucleotideSeq::new(b"#$%".to_vec());
        assert_eq!(s.as_bytes(), b"#$%");
    }

    #[test]
    fn non_ascii_is_one_base_per_char() {
        let s = NucleotideSeq::new("€atg");
        assert_eq!(s.as_bytes(), b"NATG");
        assert_eq!(NucleotideSeq::new("ACé G\u{00a0}T").as_bytes(), b"ACNGNT");
        assert_eq!(s.translate(0).as_bytes(), b"X");
        assert_eq!(s.translate(1).as_bytes(), b"M");
    }

    #[test]
    fn translate_methods_use_frames() {
        let s = NucleotideSeq::from("AATGGCC");
        assert_eq!(s.translate(1).as_bytes(), b"MA");
        let frames = s.translate_all_frames();
        assert_eq!(frames[0].as_bytes(), b"NG");
        assert_eq!(frames[1].as_bytes(), b"MA");
        assert_eq!(frames[2].as_bytes(), b"W");
    }
}
