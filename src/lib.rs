//! # PMP Question Parser
//!
//! 把按固定格式排版的题目文本解析为结构化 JSON 题库
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 题目记录、题库文档，以及配置/题库的加载器
//!
//! ### ② 业务能力层（Services）
//! - `splitter` - 按题号把文档切成题目块
//! - `record_parser` - 逐阶段解析单个题目块
//! - `bank_writer` / `markdown_export` - 写出 JSON 题库和 Markdown
//! - `reject_writer` - 记录无法解析的题目块
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一份文档的完整提取流程，不做 I/O
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 读取源文件、写出结果、输出统计
//!
//! 源文件格式示例：
//!
//! ```text
//! 1．【单选题】项目管理的定义是什么？
//! A、临时性工作
//! B、日常运营
//! 答案: A
//! 解析：项目是临时性的。
//!
//! 2．【多选题】……
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, ExamBank, ExamInfo, QuestionOptions, QuestionRecord, QuestionType};
pub use orchestrator::App;
pub use services::{parse_record, split_questions, RejectReason};
pub use workflow::{extract_questions, Extraction, ExtractionStats};
