use crate::error::{AppResult, ConfigError};
use crate::models::loaders::load_config_toml;
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "extractor.toml";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目源文本文件
    pub input_file: String,
    /// 输出的 JSON 题库文件
    pub output_file: String,
    /// 题库标题
    pub exam_title: String,
    /// 题库描述
    pub exam_description: String,
    /// 记录被丢弃题目的文件，未设置时不写
    pub reject_file: Option<String>,
    /// 含答案的 Markdown 导出路径
    pub markdown_full_file: Option<String>,
    /// 不含答案的 Markdown 导出路径
    pub markdown_no_answers_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "data.md".to_string(),
            output_file: "pmp_questions_new.json".to_string(),
            exam_title: "PMP考试题目集".to_string(),
            exam_description: "本题库包含PMP考试相关的单选题和多选题，涵盖项目管理各个知识领域"
                .to_string(),
            reject_file: None,
            markdown_full_file: None,
            markdown_no_answers_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 按 默认值 → TOML 文件 → 环境变量 的顺序加载配置
    ///
    /// TOML 文件路径取自 `EXTRACTOR_CONFIG`，未设置时尝试当前目录下的
    /// `extractor.toml`，文件不存在则跳过。
    pub fn load() -> AppResult<Self> {
        let explicit = std::env::var("EXTRACTOR_CONFIG").ok();
        let base = match explicit.as_deref() {
            Some(path) => load_config_toml(Path::new(path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                load_config_toml(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 用变量查询函数覆盖已有配置
    pub fn with_env_overrides<F>(self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value,
                expected_type: "bool".to_string(),
            })?,
            None => self.verbose_logging,
        };

        Ok(Self {
            input_file: lookup("INPUT_FILE").unwrap_or(self.input_file),
            output_file: lookup("OUTPUT_FILE").unwrap_or(self.output_file),
            exam_title: lookup("EXAM_TITLE").unwrap_or(self.exam_title),
            exam_description: lookup("EXAM_DESCRIPTION").unwrap_or(self.exam_description),
            reject_file: lookup("REJECT_FILE").or(self.reject_file),
            markdown_full_file: lookup("MARKDOWN_FULL_FILE").or(self.markdown_full_file),
            markdown_no_answers_file: lookup("MARKDOWN_NO_ANSWERS_FILE")
                .or(self.markdown_no_answers_file),
            verbose_logging,
        })
    }
}
