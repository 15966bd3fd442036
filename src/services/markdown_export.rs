//! Markdown 导出服务 - 业务能力层
//!
//! 把题库渲染成便于打印或分享的 Markdown，可选是否附带答案和解析

use crate::error::{AppError, AppResult};
use crate::models::ExamBank;
use std::path::Path;
use tokio::fs;

/// 渲染题库为 Markdown 文本
///
/// # 参数
/// - `bank`: 题库
/// - `include_answers`: 是否附带正确答案和解析
pub fn render_markdown(bank: &ExamBank, include_answers: bool) -> String {
    let info = &bank.exam_info;
    let mut markdown = format!(
        "# {}\n\n> {}\n\n总题数：{}\n\n---\n\n",
        info.title, info.description, info.total_questions
    );

    for q in &bank.questions {
        markdown.push_str(&format!(
            "## {}. {}\n\n{}\n\n",
            q.id, q.question_type, q.question
        ));

        for (key, value) in q.options.iter() {
            markdown.push_str(&format!("{}. {}\n\n", key, value));
        }

        if include_answers {
            markdown.push_str(&format!(
                "**正确答案：{}**\n\n**解析：**\n\n{}\n\n",
                q.answer, q.explanation
            ));
        }

        markdown.push_str("---\n\n");
    }

    markdown
}

/// 渲染并写入 Markdown 文件
pub async fn write_markdown(
    bank: &ExamBank,
    include_answers: bool,
    output_path: &Path,
) -> AppResult<()> {
    fs::write(output_path, render_markdown(bank, include_answers))
        .await
        .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, QuestionOptions, QuestionRecord, QuestionType};

    fn bank() -> ExamBank {
        ExamBank::new(
            "模拟题",
            "两道题",
            vec![QuestionRecord {
                id: 2,
                question_type: QuestionType::Multiple,
                question: "哪些是过程组？".into(),
                options: QuestionOptions::from([('A', "启动"), ('B', "收尾")]),
                answer: Answer::Multiple(vec!["A".into(), "B".into()]),
                explanation: "都是。".into(),
            }],
        )
    }

    #[test]
    fn full_export_includes_answer_and_explanation() {
        let md = render_markdown(&bank(), true);
        assert_eq!(
            md,
            "# 模拟题\n\n> 两道题\n\n总题数：1\n\n---\n\n\
             ## 2. 多选题\n\n哪些是过程组？\n\nA. 启动\n\nB. 收尾\n\n\
             **正确答案：A,B**\n\n**解析：**\n\n都是。\n\n---\n\n"
        );
    }

    #[test]
    fn answer_free_export_hides_solutions() {
        let md = render_markdown(&bank(), false);
        assert!(md.contains("B. 收尾"));
        assert!(!md.contains("正确答案"));
        assert!(!md.contains("都是。"));
    }
}
