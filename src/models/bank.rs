use crate::models::question::QuestionRecord;
use serde::{Deserialize, Serialize};

/// 题库元信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInfo {
    pub title: String,
    pub total_questions: usize,
    pub description: String,
}

/// 完整的题库文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamBank {
    pub exam_info: ExamInfo,
    pub questions: Vec<QuestionRecord>,
}

impl ExamBank {
    /// 创建题库，题目总数总是按题目列表长度计算
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<QuestionRecord>,
    ) -> Self {
        Self {
            exam_info: ExamInfo {
                title: title.into(),
                total_questions: questions.len(),
                description: description.into(),
            },
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 按题号查找题目
    pub fn find(&self, id: u32) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == id)
    }
}
