use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use indicatif::ProgressBar;

use crate::error::{FinderError, FinderResult};
use crate::infrastructure::{Logger, LoggerTrait};

/// 一次扫描的结果
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// 访问过的文件数
    pub total_files: u64,
    /// 匹配的文件路径，按遍历顺序排列
    pub matches: Vec<PathBuf>,
}

/// 深度优先遍历目录，对每个非目录条目调用 `visit`
///
/// `visit` 返回 `false` 时停止遍历。不跟随符号链接，不应用隐藏文件或
/// `.gitignore` 过滤。任何条目的 I/O 错误都会终止整个遍历。
pub fn walk<F>(root: &Path, mut visit: F) -> FinderResult<u64>
where
    F: FnMut(&DirEntry) -> bool,
{
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false) // 包含隐藏文件
        .follow_links(false) // 不跟随符号链接
        .build();

    let mut visited = 0;
    for result in walker {
        let entry = result.map_err(|err| FinderError::walk(root, err))?;

        // 目录只用于下降，不参与匹配
        if entry.file_type().map_or(true, |ft| ft.is_dir()) {
            continue;
        }

        visited += 1;
        if !visit(&entry) {
            break;
        }
    }

    Ok(visited)
}

/// 在目录树中查找文件名满足条件的文件
pub fn search<P>(root: &Path, predicate: P) -> FinderResult<Vec<PathBuf>>
where
    P: Fn(&str) -> bool,
{
    let logger = Logger::disabled();
    let outcome = scan_directory(root, predicate, &logger, &ProgressBar::hidden())?;
    Ok(outcome.matches)
}

/// 扫描目录，记录日志并更新进度条
pub fn scan_directory<P>(
    root: &Path,
    predicate: P,
    logger: &dyn LoggerTrait,
    progress: &ProgressBar,
) -> FinderResult<ScanOutcome>
where
    P: Fn(&str) -> bool,
{
    if logger.is_enabled() {
        let _ = logger.log_message(&format!("开始扫描目录: {}", root.display()));
    }

    let mut matches = Vec::new();
    let mut processed: u64 = 0;

    let walked = walk(root, |entry| {
        processed += 1;
        progress.set_message(format!("已处理 {} 文件", processed));
        progress.tick();

        let file_name = entry.file_name().to_string_lossy();
        if predicate(&*file_name) {
            if logger.is_enabled() {
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                let _ = logger.log_file(entry.path(), size, "匹配");
            }
            matches.push(entry.path().to_path_buf());
        }

        true
    });

    let total_files = match walked {
        Ok(total_files) => total_files,
        Err(err) => {
            progress.abandon_with_message(format!("遍历失败: {}", root.display()));
            if logger.is_enabled() {
                let _ = logger.log_message(&format!("遍历错误: {}", err));
            }
            return Err(err);
        }
    };

    progress.finish_with_message(format!("完成! 已处理 {} 文件", total_files));

    Ok(ScanOutcome {
        total_files,
        matches,
    })
}
