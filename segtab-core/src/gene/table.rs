use crate::gene::record::GeneRecord;
use crate::gene::segment::Segment;
use crate::seq::record::SeqRecord;

/// Ordered gene rows, one per FASTA entry, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneTable {
    records: Vec<GeneRecord>,
}

impl GeneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate every record of one `SEGMENT_CHAIN` file. Records are independent,
    /// so this runs in parallel when the `parallel` feature is on.
    pub fn from_records(chain: &str, segment: &Segment, records: &[SeqRecord]) -> Self {
        let records: Vec<GeneRecord> =
            par_map!(records, |r| GeneRecord::from_seq_record(chain, segment, r));
        Self { records }
    }

    pub fn push(&mut self, record: GeneRecord) {
        self.records.push(record);
    }

    pub fn append(&mut self, other: GeneTable) {
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<GeneRecord> {
        self.records
    }

    pub fn filter_segment(&self, segment: &Segment) -> GeneTable {
        let records = self
            .records
            .iter()
            .filter(|r| r.segment() == segment)
            .cloned()
            .collect();
        Self { records }
    }
}

impl FromIterator<GeneRecord> for GeneTable {
    fn from_iter<I: IntoIterator<Item = GeneRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<GeneRecord> for GeneTable {
    fn extend<I: IntoIterator<Item = GeneRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GeneTable {
    type Item = &'a GeneRecord;
    type IntoIter = std::slice::Iter<'a, GeneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
