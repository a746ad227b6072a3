use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{FinderError, FinderResult};

/// 搜索模式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// 通配符掩码搜索 (`*` 与 `?`)
    Mask,
    /// 按文件名后缀搜索
    Name,
    /// 正则表达式搜索
    Regex,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Mask => "mask",
            SearchMode::Name => "name",
            SearchMode::Regex => "regex",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" => Ok(SearchMode::Mask),
            "name" => Ok(SearchMode::Name),
            "regex" => Ok(SearchMode::Regex),
            other => Err(FinderError::validation(format!(
                "Incorrect third parameter: {}. This must be: \"mask\", \"name\" or \"regex\".",
                other
            ))),
        }
    }
}

/// 将通配符掩码转换为正则表达式
///
/// 先转义 `.`，再展开 `?` 与 `*`，否则展开产生的 `.` 会被再次转义。
pub fn mask_to_regex(mask: &str) -> String {
    mask.replace('.', r"\.").replace('?', ".").replace('*', ".*")
}

/// 文件名匹配条件
#[derive(Debug, Clone)]
pub enum MatchPredicate {
    /// 整个文件名须与正则完全匹配
    Regex(Regex),
    /// 文件名以给定字符串结尾 (区分大小写)
    Suffix(String),
}

impl MatchPredicate {
    /// 根据搜索模式与模式串创建匹配条件
    pub fn new(mode: SearchMode, pattern: &str) -> FinderResult<Self> {
        match mode {
            SearchMode::Regex => Self::full_match(pattern),
            SearchMode::Mask => Self::full_match(&mask_to_regex(pattern)),
            SearchMode::Name => Ok(MatchPredicate::Suffix(pattern.to_string())),
        }
    }

    fn full_match(pattern: &str) -> FinderResult<Self> {
        let invalid = |err: regex::Error| {
            FinderError::validation(format!(
                "Incorrect regular expression: {}. Expected a valid regular expression ({})",
                pattern, err
            ))
        };

        // 先单独编译，避免未配对的括号破坏外层锚定
        Regex::new(pattern).map_err(invalid)?;

        let anchored = format!("^(?:{})$", pattern);
        Regex::new(&anchored)
            .map(MatchPredicate::Regex)
            .map_err(invalid)
    }

    /// 检查文件名是否满足条件
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            MatchPredicate::Regex(regex) => regex.is_match(file_name),
            MatchPredicate::Suffix(suffix) => file_name.ends_with(suffix.as_str()),
        }
    }
}
