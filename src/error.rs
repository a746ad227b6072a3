use std::path::PathBuf;

use thiserror::Error;

/// 查找过程中的结果类型
pub type FinderResult<T> = Result<T, FinderError>;

/// 查找过程中可能出现的错误，全部为致命错误
#[derive(Error, Debug)]
pub enum FinderError {
    /// 原始参数列表格式错误
    #[error("{0}")]
    ArgFormat(String),
    /// 请求的键不合法或不存在
    #[error("{0}")]
    ArgLookup(String),
    /// 参数值语义校验失败
    #[error("{0}")]
    Validation(String),
    /// 遍历目录时出现的 I/O 错误
    #[error("Failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
    /// 写入结果文件时出现的 I/O 错误
    #[error("Failed to write results to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 回显匹配结果到标准输出失败
    #[error("Failed to print results: {0}")]
    Echo(#[source] std::io::Error),
}

impl FinderError {
    pub fn arg_format(msg: impl Into<String>) -> Self {
        Self::ArgFormat(msg.into())
    }

    pub fn arg_lookup(msg: impl Into<String>) -> Self {
        Self::ArgLookup(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn walk(path: impl Into<PathBuf>, source: ignore::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn echo(source: std::io::Error) -> Self {
        Self::Echo(source)
    }
}
