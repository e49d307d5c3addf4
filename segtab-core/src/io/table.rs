//! Tab-separated gene table: `chain`, `segment`, `gene_name`, `sequence`.

use crate::error::{BioError, BioResult};
use crate::gene::record::GeneRecord;
use crate::gene::segment::Segment;
use crate::gene::table::GeneTable;
use crate::seq::protein::ProteinSeq;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const COLUMNS: [&str; 4] = ["chain", "segment", "gene_name", "sequence"];

pub fn write_gene_table<W: Write>(table: &GeneTable, writer: W) -> BioResult<()> {
    write_table(table, writer, "<writer>")
}

pub fn write_gene_table_to_path(table: &GeneTable, path: impl AsRef<Path>) -> BioResult<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::create(path_ref).map_err(|e| BioError::GeneTable {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    write_table(table, file, &path_str)
}

fn write_table<W: Write>(table: &GeneTable, writer: W, path: &str) -> BioResult<()> {
    let table_err = |source: csv::Error| BioError::GeneTable {
        path: path.to_string(),
        source,
    };
    let mut out = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    out.write_record(COLUMNS).map_err(table_err)?;
    for record in table {
        out.write_record([
            record.chain().as_bytes(),
            record.segment().as_str().as_bytes(),
            record.gene_name().as_bytes(),
            record.sequence().as_bytes(),
        ])
        .map_err(table_err)?;
    }
    out.flush().map_err(|e| table_err(csv::Error::from(e)))?;
    Ok(())
}

pub fn read_gene_table<R: Read>(reader: R) -> BioResult<GeneTable> {
    read_table(reader, "<reader>")
}

pub fn read_gene_table_from_path(path: impl AsRef<Path>) -> BioResult<GeneTable> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::open(path_ref).map_err(|e| BioError::GeneTable {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    read_table(file, &path_str)
}

fn read_table<R: Read>(reader: R, path: &str) -> BioResult<GeneTable> {
    let table_err = |source: csv::Error| BioError::GeneTable {
        path: path.to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(table_err)?.clone();
    let idx: Vec<usize> = COLUMNS
        .iter()
        .map(|name| resolve_column(name, &headers, path))
        .collect::<BioResult<_>>()?;

    let mut table = GeneTable::new();
    for result in reader.records() {
        let row = result.map_err(table_err)?;
        let field = |i: usize| row.get(idx[i]).unwrap_or_default();
        let sequence = ProteinSeq::new(field(3).as_bytes().to_vec())?;
        table.push(GeneRecord::new(
            field(0),
            Segment::parse(field(1)),
            field(2),
            sequence,
        ));
    }
    Ok(table)
}

fn resolve_column(name: &str, headers: &StringRecord, path: &str) -> BioResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| BioError::GeneTableMissingColumn {
            name: name.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::NucleotideSeq;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn sample_table() -> GeneTable {
        [
            GeneRecord::translate(
                "IGH",
                Segment::V,
                "IGHV1-2*01",
                &NucleotideSeq::new("CAGGTGCAG"),
            ),
            GeneRecord::translate(
                "IGH",
                Segment::J,
                "IGHJ4*02",
                &NucleotideSeq::new("ACTGGGGCCAGGGAACC"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buf = Vec::new();
        write_gene_table(&sample_table(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "chain\tsegment\tgene_name\tsequence\n\
             IGH\tV\tIGHV1-2*01\tQVQ\n\
             IGH\tJ\tIGHJ4*02\tWGQGT\n"
        );
    }

    #[test]
    fn empty_table_writes_header_only() {
        let mut buf = Vec::new();
        write_gene_table(&GeneTable::new(), &mut buf).unwrap();
        assert_eq!(buf, b"chain\tsegment\tgene_name\tsequence\n");
    }

    #[test]
    fn path_write_then_read() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("segtab_table_test_{nanos}.tsv"));
        let table = sample_table();
        write_gene_table_to_path(&table, &path).unwrap();
        let back = read_gene_table_from_path(&path).unwrap();
        assert_eq!(back, table);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn reordered_columns() {
        let data = "sequence\tgene_name\tsegment\tchain\nMA*X\tTRBC1\tC\tTRB\n";
        let table = read_gene_table(data.as_bytes()).unwrap();
        let rec = &table.records()[0];
        assert_eq!(rec.chain(), "TRB");
        assert_eq!(rec.segment(), &Segment::C);
        assert_eq!(rec.sequence().to_string(), "MA*X");
    }

    #[test]
    fn missing_column() {
        let data = "chain\tsegment\tsequence\nIGH\tV\tQVQ\n";
        match read_gene_table(data.as_bytes()).unwrap_err() {
            BioError::GeneTableMissingColumn { name, .. } => assert_eq!(name, "gene_name"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_residue() {
        let data = "chain\tsegment\tgene_name\tsequence\nIGH\tV\tv1\tQBQ\n";
        match read_gene_table(data.as_bytes()).unwrap_err() {
            BioError::InvalidChar { ch: 'B', pos: 1 } => {}
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }
}
