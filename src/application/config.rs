use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// 配置文件名，位于当前工作目录
pub const CONFIG_FILE_NAME: &str = "files-finder.toml";

/// 应用程序配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 结果输出相关配置
    pub output: OutputConfig,
    /// 日志相关配置
    pub logging: LoggingConfig,
    /// 显示相关配置
    pub display: DisplayConfig,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 结果文件所在目录，相对于工作目录
    pub directory: String,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 是否写入查找日志
    pub enabled: bool,
    /// 日志文件所在目录
    pub directory: String,
}

/// 显示配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 遍历时是否在 stderr 显示进度
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "data".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: ".".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

impl Config {
    /// 配置文件存在时加载，否则使用默认配置 (不会创建文件)
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }

    /// 获取配置文件的默认路径
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// 结果文件所在目录
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.directory)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.output.directory.trim().is_empty() {
            anyhow::bail!("output.directory 不能为空");
        }

        if self.logging.enabled && self.logging.directory.trim().is_empty() {
            anyhow::bail!("启用日志时 logging.directory 不能为空");
        }

        Ok(())
    }
}
