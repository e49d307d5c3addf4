pub mod record;
pub mod segment;
pub mod table;

pub use record::GeneRecord;
pub use segment::{translate_segment, Segment, TranslationStrategy};
pub use table::GeneTable;
