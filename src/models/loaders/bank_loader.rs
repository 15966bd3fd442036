use crate::config::Config;
use crate::error::{AppError, AppResult, BankError};
use crate::models::bank::ExamBank;
use crate::models::question::QuestionRecord;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// 带 questions 字段的题库，exam_info 可以缺省
#[derive(Deserialize)]
struct BankDocument {
    exam_info: Option<BankInfo>,
    questions: Vec<QuestionRecord>,
}

/// 读取时只信任标题和描述，题目总数重新计算
#[derive(Deserialize)]
struct BankInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// 从 JSON 文件加载题库
///
/// 兼容 `{ "questions": [...] }` 或直接的题目数组
pub async fn load_bank(bank_file_path: &Path) -> AppResult<ExamBank> {
    let content = fs::read_to_string(bank_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(bank_file_path.display().to_string(), e))?;

    let bank = parse_bank(&content, &bank_file_path.display().to_string())?;
    tracing::info!(
        "成功加载题库 {}，共 {} 道题目",
        bank_file_path.display(),
        bank.len()
    );
    Ok(bank)
}

/// 解析题库 JSON 文本
pub fn parse_bank(content: &str, source: &str) -> AppResult<ExamBank> {
    let json_err = |e: serde_json::Error| BankError::JsonParseFailed {
        path: source.to_string(),
        source: e,
    };

    let value: Value = serde_json::from_str(content).map_err(json_err)?;
    let defaults = Config::default();

    if value.is_array() {
        let questions: Vec<QuestionRecord> = serde_json::from_value(value).map_err(json_err)?;
        return Ok(ExamBank::new(
            defaults.exam_title,
            defaults.exam_description,
            questions,
        ));
    }

    let has_questions = value
        .as_object()
        .is_some_and(|map| map.contains_key("questions"));
    if !has_questions {
        return Err(BankError::UnexpectedShape {
            path: source.to_string(),
        }
        .into());
    }

    let doc: BankDocument = serde_json::from_value(value).map_err(json_err)?;
    let (title, description) = match doc.exam_info {
        Some(info) => (
            info.title.unwrap_or(defaults.exam_title),
            info.description.unwrap_or(defaults.exam_description),
        ),
        None => (defaults.exam_title, defaults.exam_description),
    };
    Ok(ExamBank::new(title, description, doc.questions))
}
