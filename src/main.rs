use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use files_finder::application::{self, Config};
use files_finder::infrastructure::{Logger, LoggerTrait};

fn main() -> Result<()> {
    // 参数格式为 `-键=值`，不经过通用的命令行解析器
    let args: Vec<String> = std::env::args().skip(1).collect();

    // 加载配置，不存在时使用默认值
    let config_path = Config::default_config_path();
    let config = Config::load_or_default(&config_path)?;
    config
        .validate()
        .with_context(|| format!("配置无效: {}", config_path.display()))?;

    // 初始化日志记录器
    let logger = Logger::new(config.logging.enabled, Path::new(&config.logging.directory))?;
    if logger.is_enabled() {
        eprintln!("日志文件已创建: {}", logger.log_path().display());
    }

    let mut stdout = io::stdout().lock();
    application::run(&args, &config, &logger, &mut stdout)?;

    Ok(())
}
