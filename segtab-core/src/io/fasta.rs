use crate::error::{BioError, BioResult};
use crate::seq::dna::NucleotideSeq;
use crate::seq::record::SeqRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Streaming FASTA reader. Headers look like `>GENE|field|field...`.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<BioResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(BioError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(BioError::FastaIo(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = BioResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), self.line_no));
                        break;
                    }
                    self.seq_buf.extend_from_slice(self.buf_line.as_bytes());
                }
                Err(err) => return Some(Err(BioError::FastaIo(err))),
            }
        }

        let seq = NucleotideSeq::new(&self.seq_buf);
        Some(Ok(SeqRecord { id, desc, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> BioResult<Vec<SeqRecord>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> BioResult<Vec<SeqRecord>> {
    let file = File::open(path)?;
    read_fasta_records_from_reader(BufReader::new(file))
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> BioResult<Vec<SeqRecord>> {
    read_fasta_records_from_reader(BufReader::new(Cursor::new(data)))
}

/// Split a header into the gene name (first `|` field) and the rest.
/// Only trailing whitespace is removed; the name is kept as written.
fn parse_header(header_line: &str, line_no: usize) -> BioResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line.strip_prefix('>').ok_or(BioError::FastaFormat {
        msg: "expected header line starting with '>'",
        line: line_no,
    })?;

    let header = header.trim_end();
    if header.is_empty() {
        return Err(BioError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (name, desc) = match header.split_once('|') {
        Some((name, rest)) => (name, Some(rest)),
        None => (header, None),
    };
    if name.is_empty() {
        return Err(BioError::FastaFormat {
            msg: "empty gene name",
            line: line_no,
        });
    }

    Ok((name.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_record() {
        let data = b">IGHV1-2*01\nCAGGTG\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "IGHV1-2*01");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq().as_bytes(), b"CAGGTG");
    }

    #[test]
    fn gene_name_is_first_pipe_field() {
        let data = b">IGHJ4*02|Homo sapiens|F|J-REGION\nact gg\nggcc\r\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), "IGHJ4*02");
        assert_eq!(records[0].desc(), Some("Homo sapiens|F|J-REGION"));
        assert_eq!(records[0].seq().as_bytes(), b"ACTGGGGCC");
    }

    #[test]
    fn header_with_spaces_is_kept_whole() {
        let data = b">TRBV2 partial\nATG\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), "TRBV2 partial");
    }

    #[test]
    fn gene_name_keeps_inner_spacing() {
        let data = b"> IGHV1 |F\nATG\n>IGHV2\t \r\nGGG\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].id(), " IGHV1 ");
        assert_eq!(records[0].desc(), Some("F"));
        assert_eq!(records[1].id(), "IGHV2");
    }

    #[test]
    fn multiple_records() {
        let data = b"\n>a\nAC\n>b|x\nGT\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "a");
        assert_eq!(records[1].id(), "b");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">a\n>b\nA\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].seq().is_empty());
        assert_eq!(records[1].seq().as_bytes(), b"A");
    }

    #[test]
    fn data_before_header() {
        let data = b"ACGT\n>a\nAC\n";
        match read_fasta_records_from_bytes(data).unwrap_err() {
            BioError::FastaFormat { line: 1, .. } => {}
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_header_and_empty_name() {
        for data in [&b">\nACGT\n"[..], b">  \nACGT\n", b">|F\nACGT\n"] {
            match read_fasta_records_from_bytes(data).unwrap_err() {
                BioError::FastaFormat { line: 1, .. } => {}
                other => panic!("expected fasta format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn ambiguous_bases_pass_through() {
        let data = b">a\nACN#\n";
        let records = read_fasta_records_from_bytes(data).unwrap();
        assert_eq!(records[0].seq().as_bytes(), b"ACN#");
    }
}
