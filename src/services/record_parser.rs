//! 题目解析 - 业务能力层
//!
//! 把一个题目块解析成 [`QuestionRecord`]。
//!
//! 解析按固定顺序推进：题头 → 选项 → 答案 → 解析 → 完成。
//! 每个阶段只在上一阶段之后的文本里查找，避免多个独立匹配互相越界。
//! 缺少题头或答案的题目块会被整块丢弃。

use crate::models::{Answer, QuestionOptions, QuestionRecord, QuestionType};
use crate::services::splitter::QUESTION_BOUNDARY;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// `<题号>．【单选题|多选题】`，题号可以是半角或全角数字
static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9０-９]+)．【(单选题|多选题)】").unwrap());

/// 选项字母标记 `A、` ~ `E、`
static OPTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-E]、").unwrap());

/// `答案:` 后跟一个或多个以逗号分隔的字母
static ANSWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"答案:\s*([A-E](?:\s*[,，]\s*[A-E])*)").unwrap());

static ANSWER_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[,，]\s*").unwrap());

static EXPLANATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"解析[：:]").unwrap());

/// 题干结束于第一个 A 选项
const FIRST_OPTION: &str = "A、";

/// 选项区结束于答案关键字
const ANSWER_KEYWORD: &str = "答案";

/// 题目块被丢弃的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// 找不到 `<题号>．【题型】`
    #[error("缺少题头（题号与题型）")]
    MissingHeader,
    /// 题号超出范围
    #[error("题号无效: {0}")]
    InvalidId(String),
    /// 找不到 `答案:`
    #[error("题目 {id} 缺少答案")]
    MissingAnswer { id: u32 },
}

/// 题头解析结果
#[derive(Debug)]
struct Header<'a> {
    id: u32,
    question_type: QuestionType,
    question: &'a str,
    /// 题头之后的正文起点
    body_start: usize,
}

/// 解析状态，每个状态携带到目前为止的结果
enum ParseState<'a> {
    ExpectHeader,
    ExpectOption {
        header: Header<'a>,
        options: QuestionOptions,
        cursor: usize,
        options_end: usize,
    },
    ExpectAnswer {
        header: Header<'a>,
        options: QuestionOptions,
    },
    ExpectExplanation {
        header: Header<'a>,
        options: QuestionOptions,
        answer: Answer,
        cursor: usize,
    },
    Done(QuestionRecord),
}

/// 解析单个题目块
///
/// # 参数
/// - `chunk`: 由 [`split_questions`](crate::services::split_questions) 产生的题目块
///
/// # 返回
/// 成功返回题目记录，缺少题头或答案时返回丢弃原因
pub fn parse_record(chunk: &str) -> Result<QuestionRecord, RejectReason> {
    let mut state = ParseState::ExpectHeader;

    loop {
        state = match state {
            ParseState::ExpectHeader => {
                let header = parse_header(chunk)?;
                let question_end = header.body_start + header.question.len();
                let cursor = chunk[question_end..]
                    .find(FIRST_OPTION)
                    .map_or(chunk.len(), |i| question_end + i);
                let options_end = chunk[cursor..]
                    .find(ANSWER_KEYWORD)
                    .map_or(chunk.len(), |i| cursor + i);

                ParseState::ExpectOption {
                    header,
                    options: QuestionOptions::new(),
                    cursor,
                    options_end,
                }
            }
            ParseState::ExpectOption {
                header,
                mut options,
                cursor,
                options_end,
            } => {
                let region = &chunk[cursor..options_end];
                match OPTION_MARKER.find(region) {
                    Some(marker) => {
                        let text_end = OPTION_MARKER
                            .find_at(region, marker.end())
                            .map_or(region.len(), |next| next.start());
                        let raw = &region[marker.end()..text_end];

                        let letter = marker.as_str().chars().next().filter(|_| !raw.is_empty());
                        if let Some(letter) = letter {
                            if !options.insert_first(letter, clean_option(raw)) {
                                debug!("题目 {} 的选项 {} 重复，保留首次出现的内容", header.id, letter);
                            }
                        }

                        ParseState::ExpectOption {
                            header,
                            options,
                            cursor: cursor + text_end,
                            options_end,
                        }
                    }
                    None => ParseState::ExpectAnswer { header, options },
                }
            }
            ParseState::ExpectAnswer { header, options } => {
                let caps = ANSWER
                    .captures_at(chunk, header.body_start)
                    .ok_or(RejectReason::MissingAnswer { id: header.id })?;
                let (raw, cursor) = match caps.get(1) {
                    Some(m) => (m.as_str(), m.end()),
                    None => return Err(RejectReason::MissingAnswer { id: header.id }),
                };
                let answer = normalize_answer(header.question_type, raw);

                ParseState::ExpectExplanation {
                    header,
                    options,
                    answer,
                    cursor,
                }
            }
            ParseState::ExpectExplanation {
                header,
                options,
                answer,
                cursor,
            } => ParseState::Done(QuestionRecord {
                id: header.id,
                question_type: header.question_type,
                question: header.question.to_string(),
                options,
                answer,
                explanation: find_explanation(chunk, cursor).to_string(),
            }),
            ParseState::Done(record) => return Ok(record),
        };
    }
}

/// 查找题头并截取题干
fn parse_header(chunk: &str) -> Result<Header<'_>, RejectReason> {
    let caps = HEADER.captures(chunk).ok_or(RejectReason::MissingHeader)?;
    let (digits, marker, whole) = match (caps.get(1), caps.get(2), caps.get(0)) {
        (Some(d), Some(m), Some(w)) => (d.as_str(), m.as_str(), w),
        _ => return Err(RejectReason::MissingHeader),
    };

    let id = parse_id(digits).ok_or_else(|| RejectReason::InvalidId(digits.to_string()))?;
    let question_type = QuestionType::from_marker(marker).ok_or(RejectReason::MissingHeader)?;

    let body_start = whole.end();
    let body = &chunk[body_start..];
    let question_end = body.find(FIRST_OPTION).unwrap_or(body.len());
    let untrimmed = &body[..question_end];
    let leading = untrimmed.len() - untrimmed.trim_start().len();

    Ok(Header {
        id,
        question_type,
        question: untrimmed.trim(),
        body_start: body_start + leading,
    })
}

/// 把半角或全角数字组成的题号转成数值，超出 u32 时返回 None
fn parse_id(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '０'..='９' => c as u32 - '０' as u32,
            _ => c.to_digit(10)?,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// 去掉选项首尾空白和结尾的句号
fn clean_option(raw: &str) -> &str {
    raw.trim().trim_end_matches('。').trim_end()
}

/// 多选题按逗号拆成字母序列，其余题型保留原文
fn normalize_answer(question_type: QuestionType, raw: &str) -> Answer {
    match question_type {
        QuestionType::Multiple => Answer::Multiple(
            ANSWER_SEPARATOR
                .split(raw)
                .map(|token| token.trim().to_string())
                .collect(),
        ),
        QuestionType::Single => Answer::Single(raw.to_string()),
    }
}

/// 解析文字到下一道题的分界或块末尾，缺失时为空串
fn find_explanation(chunk: &str, from: usize) -> &str {
    let Some(marker) = EXPLANATION_MARKER.find_at(chunk, from) else {
        return "";
    };
    let rest = &chunk[marker.end()..];
    let end = QUESTION_BOUNDARY
        .find(rest)
        .map_or(rest.len(), |boundary| boundary.start());
    rest[..end].trim()
}
