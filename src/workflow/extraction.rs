//! 题目提取流程
//!
//! 定义"一份文档"的完整解析流程：切分 → 逐块解析 → 汇总。
//! 流程本身不做 I/O，结果以返回值交给编排层。

use crate::models::QuestionRecord;
use crate::services::{parse_record, split_questions, RejectReason};
use crate::utils::truncate_text;
use tracing::debug;

/// 解析统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// 非空题目块数量
    pub chunks: usize,
    pub parsed: usize,
    pub rejected: usize,
}

/// 被丢弃的题目块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedChunk<'a> {
    /// 题目块序号（从1开始）
    pub chunk_index: usize,
    pub reason: RejectReason,
    pub text: &'a str,
}

/// 一次提取的结果
#[derive(Debug, Default)]
pub struct Extraction<'a> {
    /// 按源文本顺序排列的题目
    pub records: Vec<QuestionRecord>,
    pub rejected: Vec<RejectedChunk<'a>>,
    pub stats: ExtractionStats,
}

/// 从整份文档中提取题目
///
/// 单块失败只影响该块，不会中断整个流程
pub fn extract_questions(document: &str) -> Extraction<'_> {
    split_questions(document)
        .enumerate()
        .fold(Extraction::default(), |mut acc, (i, chunk)| {
            let chunk_index = i + 1;
            acc.stats.chunks += 1;

            match parse_record(chunk) {
                Ok(record) => {
                    acc.stats.parsed += 1;
                    acc.records.push(record);
                }
                Err(reason) => {
                    debug!(
                        "[块 {}] 丢弃: {} | {}",
                        chunk_index,
                        reason,
                        truncate_text(chunk.trim(), 40)
                    );
                    acc.stats.rejected += 1;
                    acc.rejected.push(RejectedChunk {
                        chunk_index,
                        reason,
                        text: chunk,
                    });
                }
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    const DOCUMENT: &str = "\
1．【单选题】项目管理的定义是什么？A、临时性工作 B、日常运营 答案: A 解析：项目是临时性的。

2．【多选题】以下哪些属于过程组？
A、启动
B、采购
C、执行
答案: A,C
解析：启动和执行。

3．【单选题】这道题没有答案
A、甲
B、乙

没有题头的段落

5．【单选题】最后一题？A、是 B、否 答案: B";

    #[test]
    fn keeps_source_order_and_drops_bad_chunks() {
        let extraction = extract_questions(DOCUMENT);

        let ids: Vec<u32> = extraction.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
        assert_eq!(
            extraction.records[1].answer,
            Answer::Multiple(vec!["A".into(), "C".into()])
        );
        assert_eq!(
            extraction.stats,
            ExtractionStats {
                chunks: 4,
                parsed: 3,
                rejected: 1
            }
        );
    }

    #[test]
    fn rejected_chunk_keeps_reason_and_text() {
        let extraction = extract_questions(DOCUMENT);
        let rejected = &extraction.rejected[0];

        assert_eq!(rejected.chunk_index, 3);
        assert_eq!(rejected.reason, RejectReason::MissingAnswer { id: 3 });
        assert!(rejected.text.contains("没有题头的段落"));
    }

    #[test]
    fn empty_document_extracts_nothing() {
        let extraction = extract_questions("   \n\n  ");
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.stats, ExtractionStats::default());
    }
}
