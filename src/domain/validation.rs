use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::args::ArgumentStore;
use crate::domain::pattern::SearchMode;
use crate::error::{FinderError, FinderResult};

/// 普通文件名格式：字母数字 + 点 + 至少两位小写扩展名
static NAME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]*\.[a-z0-9]{2,}$").expect("无效的文件名格式表达式"));
/// 掩码格式：文件名与扩展名中允许 `?` 和 `*`
static MASK_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9?*]*\.[a-z0-9?*]{2,}$").expect("无效的掩码格式表达式"));
/// 输出文件格式：需要 2 到 5 位的扩展名
static OUTPUT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*\.[a-z0-9]{2,5}$").expect("无效的输出文件格式表达式"));

const NAME_FORMAT_HINT: &str =
    "Expected letters/digits, '.', and an extension of 2+ lowercase letters/digits (e.g. file.txt)";
const MASK_FORMAT_HINT: &str = "Expected letters/digits or '*'/'?' wildcards, '.', and an extension of 2+ lowercase letters/digits or wildcards (e.g. *.?xt)";
const OUTPUT_FORMAT_HINT: &str =
    "Expected a name ending in '.' plus 2-5 lowercase letters/digits (e.g. log.txt)";

/// 校验通过的查找参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// 查找起始目录 (`-d`)
    pub root: PathBuf,
    /// 文件名、掩码或正则 (`-n`)
    pub pattern: String,
    /// 搜索模式原始值 (`-t`)
    pub mode: String,
    /// 结果文件名 (`-o`)
    pub output: String,
}

impl SearchParams {
    /// 解析后的搜索模式，未知模式返回 `None`
    pub fn search_mode(&self) -> Option<SearchMode> {
        self.mode.parse().ok()
    }
}

/// 校验四个必需参数
///
/// 检查顺序固定：目录存在、是目录、文件名格式、掩码格式、模式取值、输出文件格式。
/// 非 `regex`/`mask` 的模式 (包括未知模式) 先按普通文件名格式校验，
/// 之后才检查模式取值本身。
pub fn validate(store: &ArgumentStore) -> FinderResult<SearchParams> {
    let root = PathBuf::from(store.get("d")?);
    let pattern = store.get("n")?;
    let mode = store.get("t")?;
    let output = store.get("o")?;

    if !root.exists() {
        return Err(FinderError::validation(format!(
            "Not exist {}",
            absolute(&root).display()
        )));
    }
    if !root.is_dir() {
        return Err(FinderError::validation(format!(
            "Not directory {}",
            absolute(&root).display()
        )));
    }

    if mode != "regex" && mode != "mask" && !NAME_FORMAT.is_match(pattern) {
        return Err(FinderError::validation(format!(
            "Incorrect search file format: {}. {}",
            pattern, NAME_FORMAT_HINT
        )));
    }
    if mode == "mask" && !MASK_FORMAT.is_match(pattern) {
        return Err(FinderError::validation(format!(
            "Incorrect search file format: {}. {}",
            pattern, MASK_FORMAT_HINT
        )));
    }

    mode.parse::<SearchMode>()?;

    if !OUTPUT_FORMAT.is_match(output) {
        return Err(FinderError::validation(format!(
            "Incorrect file format: {}. {}",
            output, OUTPUT_FORMAT_HINT
        )));
    }

    Ok(SearchParams {
        root,
        pattern: pattern.to_string(),
        mode: mode.to_string(),
        output: output.to_string(),
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store(dir: &str, pattern: &str, mode: &str, output: &str) -> ArgumentStore {
        ArgumentStore::of(&[
            format!("-d={}", dir),
            format!("-n={}", pattern),
            format!("-t={}", mode),
            format!("-o={}", output),
        ])
        .unwrap()
    }

    fn validation_message(result: FinderResult<SearchParams>) -> String {
        match result {
            Err(FinderError::Validation(msg)) => msg,
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_parameters() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();

        let params = validate(&store(&root, "*.txt", "mask", "out.txt")).unwrap();
        assert_eq!(params.root, temp_dir.path());
        assert_eq!(params.pattern, "*.txt");
        assert_eq!(params.search_mode(), Some(SearchMode::Mask));
        assert_eq!(params.output, "out.txt");

        assert!(validate(&store(&root, "file.txt", "name", "log.log")).is_ok());
        assert!(validate(&store(&root, r".*\.(rs|toml)", "regex", "out.csv")).is_ok());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope").to_string_lossy().to_string();

        let msg = validation_message(validate(&store(&missing, "a.txt", "name", "out.txt")));
        assert!(msg.starts_with("Not exist"));
        assert!(msg.contains("nope"));
    }

    #[test]
    fn test_root_is_a_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let msg = validation_message(validate(&store(
            &file.to_string_lossy(),
            "a.txt",
            "name",
            "out.txt",
        )));
        assert!(msg.starts_with("Not directory"));
    }

    #[test]
    fn test_name_format() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();

        let msg = validation_message(validate(&store(&root, "*.txt", "name", "out.txt")));
        assert!(msg.starts_with("Incorrect search file format: *.txt. "));
        assert!(msg.contains("an extension of 2+ lowercase letters/digits"));

        let msg = validation_message(validate(&store(&root, "a.TXT", "name", "out.txt")));
        assert!(msg.starts_with("Incorrect search file format: a.TXT. "));
        assert!(msg.contains(NAME_FORMAT_HINT));

        // 只有扩展名也是合法的文件名
        assert!(validate(&store(&root, ".txt", "name", "out.txt")).is_ok());
    }

    #[test]
    fn test_mask_format() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();

        assert!(validate(&store(&root, "fi?e.*?", "mask", "out.txt")).is_ok());

        let msg = validation_message(validate(&store(&root, "[ab].txt", "mask", "out.txt")));
        assert!(msg.starts_with("Incorrect search file format: [ab].txt. "));
        assert!(msg.contains("'*'/'?' wildcards"));
    }

    #[test]
    fn test_unknown_mode_checked_after_name_format() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();

        let msg = validation_message(validate(&store(&root, "x.txt", "bogus", "out.txt")));
        assert!(msg.contains("Incorrect third parameter: bogus"));

        // 未知模式下文件名格式错误会先被报告
        let msg = validation_message(validate(&store(&root, "*.txt", "bogus", "out.txt")));
        assert!(msg.starts_with("Incorrect search file format: *.txt. "));
    }

    #[test]
    fn test_output_format() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();

        let msg = validation_message(validate(&store(&root, "a.txt", "name", "out")));
        assert!(msg.starts_with("Incorrect file format: out. "));
        assert!(msg.contains("2-5 lowercase letters/digits"));

        let msg = validation_message(validate(&store(&root, "a.txt", "name", "out.backup")));
        assert!(msg.starts_with("Incorrect file format: out.backup. "));
        assert!(msg.contains(OUTPUT_FORMAT_HINT));
    }

    #[test]
    fn test_missing_key_is_lookup_error() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_string_lossy().to_string();
        let store = ArgumentStore::of(&[
            format!("-d={}", root),
            "-n=a.txt".to_string(),
            "-t=name".to_string(),
            "-x=out.txt".to_string(),
        ])
        .unwrap();

        let err = validate(&store).unwrap_err();
        assert!(matches!(err, FinderError::ArgLookup(ref msg) if msg.contains("'o' is missing")));
    }
}
