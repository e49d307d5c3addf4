pub mod codon;
pub mod dna;
pub mod motif;
pub mod protein;
pub mod record;
pub mod translate;

pub use codon::CodonTable;
pub use dna::NucleotideSeq;
pub use motif::{find_j_anchor, select_frame_index, select_translation};
pub use protein::ProteinSeq;
pub use record::SeqRecord;
pub use translate::{translate, translate_all_frames, ReadingFrame};

#[cfg(test)]
mod tests;
