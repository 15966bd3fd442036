pub mod bank;
pub mod loaders;
pub mod question;

pub use bank::{ExamBank, ExamInfo};
pub use loaders::{load_bank, load_config_toml};
pub use question::{Answer, QuestionOptions, QuestionRecord, QuestionType};
