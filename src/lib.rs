//! 按文件名、通配符掩码或正则表达式在目录树中查找文件，并将结果写入文件。

// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod error;

// 重新导出主要类型
pub use domain::{mask_to_regex, ArgumentStore, MatchPredicate, SearchMode, SearchParams};
pub use application::{run, Config};
pub use infrastructure::{Logger, LoggerTrait};
pub use error::{FinderError, FinderResult};
