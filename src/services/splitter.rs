//! 文档切分 - 业务能力层
//!
//! 把整份题目文本切成"每块一道题"的候选文本块

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

/// 题目之间的分界：两个以上换行，紧跟 `<题号>．【`
///
/// 分界只消耗换行，题头保留在下一块的开头
pub(crate) static QUESTION_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n){2,}[0-9０-９]+．【").unwrap());

/// 惰性的题目块迭代器，借用原文档
///
/// 去掉首尾空白后为空的块会被跳过
pub struct QuestionChunks<'a> {
    document: &'a str,
    boundaries: Matches<'static, 'a>,
    /// 下一块的起始位置，None 表示已遍历完毕
    next_start: Option<usize>,
}

impl<'a> Iterator for QuestionChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.next_start?;

            let chunk = match self.boundaries.next() {
                Some(boundary) => {
                    let header_len = boundary
                        .as_str()
                        .trim_start_matches(|c: char| c == '\r' || c == '\n')
                        .len();
                    self.next_start = Some(boundary.end() - header_len);
                    &self.document[start..boundary.start()]
                }
                None => {
                    self.next_start = None;
                    &self.document[start..]
                }
            };

            if !chunk.trim().is_empty() {
                return Some(chunk);
            }
        }
    }
}

/// 按题号分界切分文档
pub fn split_questions(document: &str) -> QuestionChunks<'_> {
    QuestionChunks {
        document,
        boundaries: QUESTION_BOUNDARY.find_iter(document),
        next_start: Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stays_with_following_chunk() {
        let doc = "1．【单选题】甲？A、x 答案: A\n\n2．【多选题】乙？A、y 答案: A,B";
        let chunks: Vec<&str> = split_questions(doc).collect();

        assert_eq!(
            chunks,
            vec!["1．【单选题】甲？A、x 答案: A", "2．【多选题】乙？A、y 答案: A,B"]
        );
    }

    #[test]
    fn several_blank_lines_and_crlf_are_one_boundary() {
        let doc = "1．【单选题】甲\r\n\r\n\r\n2．【单选题】乙\n\n\n\n3．【单选题】丙";
        let chunks: Vec<&str> = split_questions(doc).collect();

        assert_eq!(chunks.len(), 3);
        assert!(chunks[1].starts_with("2．【单选题】"));
        assert!(chunks[2].starts_with("3．【单选题】"));
    }

    #[test]
    fn full_width_question_number_starts_a_chunk() {
        let doc = "１．【单选题】甲\n\n１２．【单选题】乙";
        let chunks: Vec<&str> = split_questions(doc).collect();

        assert_eq!(chunks, vec!["１．【单选题】甲", "１２．【单选题】乙"]);
    }

    #[test]
    fn single_newline_does_not_split() {
        let doc = "1．【单选题】甲\n2．【单选题】乙";
        assert_eq!(split_questions(doc).count(), 1);
    }

    #[test]
    fn blank_line_without_bracket_marker_does_not_split() {
        let doc = "1．【单选题】甲\n\n解析补充\n\n2．单选题 乙";
        assert_eq!(split_questions(doc).count(), 1);
    }

    #[test]
    fn whitespace_only_chunks_are_skipped() {
        let doc = "\n\n   \n\n1．【单选题】甲\n\n2．【单选题】乙\n\n";
        let chunks: Vec<&str> = split_questions(doc).collect();

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].starts_with("1．"));
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert_eq!(split_questions("").count(), 0);
        assert_eq!(split_questions(" \n\t ").count(), 0);
    }
}
