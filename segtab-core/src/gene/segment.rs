use crate::seq::dna::NucleotideSeq;
use crate::seq::motif;
use crate::seq::protein::ProteinSeq;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Gene segment tag taken from a library filename.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    V,
    D,
    J,
    C,
    Other(Box<str>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationStrategy {
    /// Frame 0, no frame search.
    SingleFrame,
    /// All three frames, first one carrying the J anchor.
    MotifFrame,
}

impl Segment {
    /// Exact, case-sensitive match on the tag; anything unknown is kept as `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "V" => Segment::V,
            "D" => Segment::D,
            "J" => Segment::J,
            "C" => Segment::C,
            other => Segment::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::V => "V",
            Segment::D => "D",
            Segment::J => "J",
            Segment::C => "C",
            Segment::Other(tag) => tag,
        }
    }

    pub fn strategy(&self) -> TranslationStrategy {
        match self {
            Segment::J => TranslationStrategy::MotifFrame,
            _ => TranslationStrategy::SingleFrame,
        }
    }
}

impl FromStr for Segment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Segment::parse(s))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn translate_segment(segment: &Segment, seq: &NucleotideSeq) -> ProteinSeq {
    match segment.strategy() {
        TranslationStrategy::SingleFrame => seq.translate(0),
        TranslationStrategy::MotifFrame => motif::select_frame(seq.translate_all_frames()),
    }
}
