use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 创建遍历进度条，输出到 stderr，未启用时返回隐藏的进度条
pub fn walk_spinner(enabled: bool, root: &Path) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("无效的进度条模板"),
    );
    progress.set_message(format!("正在扫描 {}", root.display()));
    progress
}

/// 查找摘要
pub struct SearchSummary {
    pub start_time: Instant,
    pub total_files: u64,
    pub matched_files: u64,
}

impl SearchSummary {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total_files: 0,
            matched_files: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 输出匹配文件数，作为标准输出的最后一行
    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.matched_files)?;
        Ok(())
    }
}

impl Default for SearchSummary {
    fn default() -> Self {
        Self::new()
    }
}
