use std::io::Write;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::application::Config;
use crate::domain::{scan_directory, validate, ArgumentStore, MatchPredicate, ScanOutcome, SearchParams};
use crate::error::FinderResult;
use crate::infrastructure::{write_results, LoggerTrait};
use crate::presentation::{format_duration, walk_spinner, SearchSummary};

/// 执行一次完整查找：解析参数、校验、遍历、写入结果并输出匹配数
///
/// 每个匹配路径及最终的匹配数都写入 `out`。没有匹配时不创建结果文件。
/// 日志写入失败只会丢失日志记录，不会中断查找。
pub fn run<S, W>(
    raw_args: &[S],
    config: &Config,
    logger: &dyn LoggerTrait,
    out: &mut W,
) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let mut summary = SearchSummary::new();

    let store = ArgumentStore::of(raw_args)?;
    let params = validate(&store)?;

    if logger.is_enabled() {
        let _ = logger.log_message(&format!("目标目录: {}", params.root.display()));
        let _ = logger.log_message(&format!("搜索模式: {}", params.mode));
        let _ = logger.log_message(&format!("文件名: {}", params.pattern));
        let _ = logger.log_message(&format!("结果文件: {}", params.output));
    }

    let progress = walk_spinner(config.display.progress, &params.root);
    let outcome = collect_matches(&params, logger, &progress)?;

    summary.total_files = outcome.total_files;
    summary.matched_files = outcome.matches.len() as u64;

    if !outcome.matches.is_empty() {
        let target = write_results(&config.output_dir(), &params.output, &outcome.matches, out)?;
        if logger.is_enabled() {
            let _ = logger.log_message(&format!("结果已写入: {}", target.display()));
        }
    }

    summary.print(out)?;

    if logger.is_enabled() {
        let _ = logger.log_message(&format!("总用时: {}", format_duration(summary.elapsed())));
        let _ = logger.finalize(summary.total_files, summary.matched_files, summary.elapsed());
    }

    Ok(outcome.matches.len())
}

/// 按搜索模式构建匹配条件并遍历目录
///
/// 未知模式返回空结果而不是错误，正常情况下已被校验拒绝。
fn collect_matches(
    params: &SearchParams,
    logger: &dyn LoggerTrait,
    progress: &ProgressBar,
) -> FinderResult<ScanOutcome> {
    match params.search_mode() {
        Some(mode) => {
            let predicate = MatchPredicate::new(mode, &params.pattern)?;
            scan_directory(&params.root, |name| predicate.matches(name), logger, progress)
        }
        None => Ok(ScanOutcome::default()),
    }
}
