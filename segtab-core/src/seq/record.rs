use crate::seq::dna::NucleotideSeq;

/// One FASTA entry: gene name (first `|` field of the header), the remaining
/// header fields, and the normalized bases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: NucleotideSeq,
}

impl SeqRecord {
    pub fn new(id: impl Into<Box<str>>, seq: NucleotideSeq) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &NucleotideSeq {
        &self.seq
    }

    /// Header fields after the gene name, split on `|`.
    pub fn header_fields(&self) -> impl Iterator<Item = &str> {
        self.desc().into_iter().flat_map(|d| d.split('|'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fields_split_on_pipe() {
        let rec = SeqRecord::new("IGHJ1*01", NucleotideSeq::new("ACGT"))
            .with_desc("Homo sapiens|F|J-REGION");
        assert_eq!(rec.id(), "IGHJ1*01");
        let fields: Vec<&str> = rec.header_fields().collect();
        assert_eq!(fields, vec!["Homo sapiens", "F", "J-REGION"]);
    }

    #[test]
    fn no_desc_no_fields() {
        let rec = SeqRecord::new("IGHV1-2*01", NucleotideSeq::default());
        assert_eq!(rec.header_fields().count(), 0);
    }
}
