use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use std::path::Path;

/// 从 TOML 文件加载配置，未出现的字段使用默认值
pub fn load_config_toml(toml_file_path: &Path) -> AppResult<Config> {
    let content = std::fs::read_to_string(toml_file_path)
        .map_err(|e| AppError::file_read_failed(toml_file_path.display().to_string(), e))?;

    parse_config_toml(&content, toml_file_path)
}

/// 解析 TOML 配置文本
pub fn parse_config_toml(content: &str, source_path: &Path) -> AppResult<Config> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::TomlParseFailed {
        path: source_path.display().to_string(),
        source: e,
    })?;

    tracing::debug!("已加载配置文件: {}", source_path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let content = r#"
input_file = "questions.txt"
markdown_full_file = "full.md"
"#;
        let config = parse_config_toml(content, Path::new("extractor.toml")).unwrap();

        assert_eq!(config.input_file, "questions.txt");
        assert_eq!(config.markdown_full_file.as_deref(), Some("full.md"));
        assert_eq!(config.output_file, Config::default().output_file);
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let err = parse_config_toml("input_file = ", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
