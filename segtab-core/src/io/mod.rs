pub mod fasta;
pub mod filename;
pub mod library;
pub mod merge;
pub mod table;
pub mod validate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnError {
    Raise,
    #[default]
    Skip,
}

/// An input the reader declined, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: Box<str>,
    pub message: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadReport<T> {
    pub data: T,
    pub skipped: Vec<SkippedFile>,
}
