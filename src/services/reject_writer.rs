//! 丢弃记录写入服务 - 业务能力层
//!
//! 只负责"把无法解析的题目块写进文件"，不关心解析流程

use crate::error::{AppError, AppResult};
use crate::services::record_parser::RejectReason;
use crate::utils::truncate_text;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 丢弃记录写入服务
///
/// 每次运行开始时清空文件，之后逐条追加
pub struct RejectWriter {
    reject_file_path: PathBuf,
}

impl RejectWriter {
    /// 创建写入服务并清空已有内容
    pub fn create(path: impl AsRef<Path>) -> AppResult<Self> {
        let reject_file_path = path.as_ref().to_path_buf();
        std::fs::write(&reject_file_path, "").map_err(|e| {
            AppError::file_write_failed(reject_file_path.display().to_string(), e)
        })?;
        Ok(Self { reject_file_path })
    }

    pub fn path(&self) -> &Path {
        &self.reject_file_path
    }

    /// 写入一条丢弃记录
    ///
    /// # 参数
    /// - `chunk_index`: 题目块序号（从1开始）
    /// - `reason`: 丢弃原因
    /// - `chunk`: 题目块原文
    pub fn write(&self, chunk_index: usize, reason: &RejectReason, chunk: &str) -> AppResult<()> {
        debug!(
            "写入丢弃记录: 块 {} | 原因: {} | 长度: {}",
            chunk_index,
            reason,
            chunk.len()
        );

        let write_err =
            |e: std::io::Error| AppError::file_write_failed(self.reject_file_path.display().to_string(), e);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.reject_file_path)
            .map_err(write_err)?;

        let line = format!(
            "块 {} | {} | {}\n",
            chunk_index,
            reason,
            truncate_text(&chunk.trim().replace('\n', " "), 120)
        );

        file.write_all(line.as_bytes()).map_err(write_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_truncates_and_write_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejected.txt");
        std::fs::write(&path, "旧内容\n").unwrap();

        let writer = RejectWriter::create(&path).unwrap();
        writer
            .write(2, &RejectReason::MissingAnswer { id: 5 }, "5．【单选题】题？\nA、a")
            .unwrap();
        writer
            .write(3, &RejectReason::MissingHeader, "没有题头")
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "块 2 | 题目 5 缺少答案 | 5．【单选题】题？ A、a\n块 3 | 缺少题头（题号与题型） | 没有题头\n"
        );
    }
}
