pub mod extraction;

pub use extraction::{extract_questions, Extraction, ExtractionStats, RejectedChunk};
