//! 应用编排器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责文件读写和流程调度。
//!
//! ## 核心功能
//!
//! 1. **读取源文件**：整份文本一次性读入内存
//! 2. **提取题目**：委托 workflow 完成切分和解析
//! 3. **写出题库**：JSON 题库，失败时中止
//! 4. **附加输出**：按配置写入丢弃记录和 Markdown，失败只记录警告
//! 5. **全局统计**：输出解析结果统计

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::ExamBank;
use crate::services::{write_bank, write_markdown, RejectWriter};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{extract_questions, Extraction, ExtractionStats, RejectedChunk};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config.input_file, &config.output_file);
        Self { config }
    }

    /// 运行应用主逻辑
    ///
    /// 只有源文件读取失败或题库写入失败会中止运行；
    /// 丢弃记录和 Markdown 导出在题库写出之后进行，失败只记录警告
    pub async fn run(&self) -> Result<ExtractionStats> {
        let document = self.load_document().await?;

        let Extraction {
            records,
            rejected,
            stats,
        } = extract_questions(&document);
        if records.is_empty() {
            warn!("⚠️ 没有解析出任何题目，请检查源文件格式");
        }

        let bank = ExamBank::new(
            self.config.exam_title.as_str(),
            self.config.exam_description.as_str(),
            records,
        );

        write_bank(&bank, Path::new(&self.config.output_file))
            .await
            .context("保存题库失败")?;

        if let Err(e) = self.write_rejected(&rejected) {
            warn!("⚠️ 丢弃记录写入失败: {:#}", anyhow::Error::from(e));
        }
        self.export_markdown(&bank).await;

        info!("成功解析 {} 道题目", bank.exam_info.total_questions);
        print_final_stats(&stats, &self.config.output_file);

        Ok(stats)
    }

    /// 读取源文件
    async fn load_document(&self) -> Result<String> {
        info!("\n📁 正在读取源文件...");
        let path = &self.config.input_file;
        let document = fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.as_str(), e))?;
        info!("✓ 读取完成，共 {} 个字符", document.chars().count());
        Ok(document)
    }

    /// 写入丢弃记录（仅在配置了文件路径时）
    fn write_rejected(&self, rejected: &[RejectedChunk<'_>]) -> AppResult<()> {
        let Some(path) = self.config.reject_file.as_deref() else {
            return Ok(());
        };

        let writer = RejectWriter::create(path)?;
        for chunk in rejected {
            writer.write(chunk.chunk_index, &chunk.reason, chunk.text)?;
        }

        if !rejected.is_empty() {
            info!(
                "📝 {} 个无法解析的题目块已写入: {}",
                rejected.len(),
                writer.path().display()
            );
        }
        Ok(())
    }

    /// 导出 Markdown（仅在配置了文件路径时），单个导出失败不影响其他导出
    async fn export_markdown(&self, bank: &ExamBank) {
        let exports = [
            (self.config.markdown_full_file.as_deref(), true),
            (self.config.markdown_no_answers_file.as_deref(), false),
        ];

        for (path, include_answers) in exports {
            let Some(path) = path else { continue };
            match write_markdown(bank, include_answers, Path::new(path)).await {
                Ok(()) => info!("✓ Markdown 已导出: {}", path),
                Err(e) => warn!("⚠️ 导出 Markdown 失败: {:#}", anyhow::Error::from(e)),
            }
        }
    }
}
