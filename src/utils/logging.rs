//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::workflow::ExtractionStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info 级别。
/// 重复调用是安全的，已初始化时直接返回。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input_file`: 题目源文件
/// - `output_file`: JSON 输出文件
pub fn log_startup(input_file: &str, output_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目解析模式");
    info!("📄 源文件: {}", input_file);
    info!("💾 输出文件: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 本次解析统计
/// - `output_file`: JSON 输出文件
pub fn print_final_stats(stats: &ExtractionStats, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 解析完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📦 题目块: {}", stats.chunks);
    info!("✅ 成功: {}", stats.parsed);
    info!("❌ 丢弃: {}", stats.rejected);
    info!("{}", "=".repeat(60));
    info!("\n题库已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn truncates_by_chars_not_bytes() {
        assert_eq!(truncate_text("项目管理的定义", 4), "项目管理...");
        assert_eq!(truncate_text("短文本", 10), "短文本");
    }
}
