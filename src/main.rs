use anyhow::Result;
use pmp_question_parser::utils::logging;
use pmp_question_parser::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 运行应用
    App::initialize(config).run().await?;

    Ok(())
}
