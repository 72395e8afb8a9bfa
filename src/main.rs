use anyhow::Result;
use question_paper_gen::utils::logging;
use question_paper_gen::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（CONFIG_FILE 指向 TOML 时优先，否则读环境变量）
    let config = match std::env::var("CONFIG_FILE") {
        Ok(path) => Config::from_file(&path)?,
        Err(_) => Config::from_env(),
    };

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
