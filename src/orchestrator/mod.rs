//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (读源文件 / 写题库)
//!     ↓
//! workflow::extract_questions (切分 + 逐块解析)
//!     ↓
//! services (能力层：splitter / record_parser / writers)
//!     ↓
//! models (QuestionRecord / ExamBank)
//! ```
//!
//! 编排层只做 I/O 和统计，不做具体解析判断

pub mod app;

pub use app::App;
