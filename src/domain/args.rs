use std::collections::HashMap;

use crate::error::{FinderError, FinderResult};

/// 程序要求的最少参数个数
pub const REQUIRED_ARGS: usize = 4;

/// 参数不足时输出的用法说明
pub const USAGE: &str = "Incorrect parameters. \
The program must be launched with 4 parameters,\n \
for example: -d=c: -n=*.?xt -t=mask -o=log.txt\n\
Keys\n\
-d - directory in which to start searching.\n\
-n - file name, mask, or any regular expression.\n\
-t - search type: mask -- search by mask, name -- by location of name match, regex -- by regular expression.\n\
-o - write the result to a file.\n";

/// 命令行参数存储，构建后不可变
#[derive(Debug, Clone, Default)]
pub struct ArgumentStore {
    values: HashMap<String, String>,
}

impl ArgumentStore {
    /// 从原始参数创建存储，格式为 `-键=值`
    pub fn of<S: AsRef<str>>(args: &[S]) -> FinderResult<Self> {
        if args.len() < REQUIRED_ARGS {
            return Err(FinderError::arg_format(USAGE));
        }

        let mut values = HashMap::new();
        for arg in args {
            let (key, value) = parse_argument(arg.as_ref())?;
            values.insert(key, value);
        }

        Ok(Self { values })
    }

    /// 按键取值，键必须为小写字母且已提供
    pub fn get(&self, key: &str) -> FinderResult<&str> {
        if key.trim().is_empty() {
            return Err(FinderError::arg_lookup("Key cannot be null or empty"));
        }
        if !key.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(FinderError::arg_lookup(
                "The key can only contain small letters",
            ));
        }

        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| FinderError::arg_lookup(format!("This key: '{}' is missing", key)))
    }
}

/// 解析单个参数，按第一个 `=` 拆分
fn parse_argument(arg: &str) -> FinderResult<(String, String)> {
    let Some((raw_key, raw_value)) = arg.split_once('=') else {
        return Err(FinderError::arg_format(format!(
            "Error: This argument '{}' does not contain an equal sign",
            arg
        )));
    };

    let Some(key) = raw_key.strip_prefix('-') else {
        return Err(FinderError::arg_format(format!(
            "Error: This argument '{}' does not start with a '-' character",
            arg
        )));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(FinderError::arg_format(format!(
            "Error: This argument '{}' does not contain a key",
            arg
        )));
    }

    let value = raw_value.trim();
    if value.is_empty() {
        return Err(FinderError::arg_format(format!(
            "Error: This argument '{}' does not contain a value",
            arg
        )));
    }

    Ok((key.to_string(), value.to_string()))
}
