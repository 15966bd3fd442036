//! 题库写入服务 - 业务能力层
//!
//! 负责把题库序列化成 JSON 并写入文件

use crate::error::{AppError, AppResult};
use crate::models::ExamBank;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 把题库序列化为带缩进的 JSON，中文保持原样不转义
pub fn to_json(bank: &ExamBank) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(bank)?)
}

/// 写入题库 JSON 文件，已存在时直接覆盖
pub async fn write_bank(bank: &ExamBank, output_path: &Path) -> AppResult<()> {
    let json = to_json(bank)?;
    debug!(
        "写入题库: {} | {} 道题目 | {} 字节",
        output_path.display(),
        bank.exam_info.total_questions,
        json.len()
    );

    fs::write(output_path, json)
        .await
        .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, QuestionOptions, QuestionRecord, QuestionType};

    fn sample_bank() -> ExamBank {
        let record = QuestionRecord {
            id: 1,
            question_type: QuestionType::Single,
            question: "项目管理的定义是什么？".into(),
            options: QuestionOptions::from([('A', "临时性工作")]),
            answer: Answer::Single("A".into()),
            explanation: "项目是临时性的。".into(),
        };
        ExamBank::new("PMP考试题目集", "描述", vec![record])
    }

    #[test]
    fn json_layout_matches_bank_schema() {
        let json = to_json(&sample_bank()).unwrap();

        let expected = r#"{
  "exam_info": {
    "title": "PMP考试题目集",
    "total_questions": 1,
    "description": "描述"
  },
  "questions": [
    {
      "id": 1,
      "type": "单选题",
      "question": "项目管理的定义是什么？",
      "options": {
        "A": "临时性工作"
      },
      "answer": "A",
      "explanation": "项目是临时性的。"
    }
  ]
}"#;
        assert_eq!(json, expected);
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn json_round_trips() {
        let bank = sample_bank();
        let json = to_json(&bank).unwrap();
        let back: ExamBank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bank);
    }
}
