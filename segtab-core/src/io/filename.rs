use crate::error::{BioError, BioResult};
use crate::gene::segment::Segment;

/// Segment and chain encoded in a library file name, `SEGMENT_CHAIN.fasta`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryFileName {
    pub segment: Segment,
    pub chain: Box<str>,
}

/// Split at the first `_`; the chain loses only its last extension.
pub fn parse_library_filename(name: &str) -> BioResult<LibraryFileName> {
    let (segment, rest) = name
        .split_once('_')
        .ok_or_else(|| BioError::UnrecognizedFilename {
            name: name.to_string(),
        })?;
    let chain = match rest.rsplit_once('.') {
        Some((chain, _ext)) => chain,
        None => rest,
    };
    Ok(LibraryFileName {
        segment: Segment::parse(segment),
        chain: chain.into(),
    })
}
