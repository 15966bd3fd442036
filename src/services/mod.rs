pub mod bank_writer;
pub mod markdown_export;
pub mod record_parser;
pub mod reject_writer;
pub mod splitter;

pub use bank_writer::{to_json, write_bank};
pub use markdown_export::{render_markdown, write_markdown};
pub use record_parser::{parse_record, RejectReason};
pub use reject_writer::RejectWriter;
pub use splitter::{split_questions, QuestionChunks};
