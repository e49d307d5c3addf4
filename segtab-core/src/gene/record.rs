use crate::gene::segment::{translate_segment, Segment};
use crate::seq::dna::NucleotideSeq;
use crate::seq::protein::ProteinSeq;
use crate::seq::record::SeqRecord;

/// One row of the gene table. Built once per FASTA entry and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneRecord {
    chain: Box<str>,
    segment: Segment,
    gene_name: Box<str>,
    sequence: ProteinSeq,
}

impl GeneRecord {
    pub fn new(
        chain: impl Into<Box<str>>,
        segment: Segment,
        gene_name: impl Into<Box<str>>,
        sequence: ProteinSeq,
    ) -> Self {
        Self {
            chain: chain.into(),
            segment,
            gene_name: gene_name.into(),
            sequence,
        }
    }

    /// Translate `bases` with the strategy of `segment`.
    pub fn translate(
        chain: impl Into<Box<str>>,
        segment: Segment,
        gene_name: impl Into<Box<str>>,
        bases: &NucleotideSeq,
    ) -> Self {
        let sequence = translate_segment(&segment, bases);
        Self::new(chain, segment, gene_name, sequence)
    }

    pub fn from_seq_record(chain: &str, segment: &Segment, record: &SeqRecord) -> Self {
        Self::translate(chain, segment.clone(), record.id(), record.seq())
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn gene_name(&self) -> &str {
        &self.gene_name
    }

    pub fn sequence(&self) -> &ProteinSeq {
        &self.sequence
    }
}
