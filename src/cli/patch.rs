//! # patch 子命令 CLI 定义
//!
//! 对目标页面执行迁移编辑并写回变化的文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `TargetArgs` 同时被 `cli/check.rs` 复用
//! - 参数传递给 `commands/patch.rs`

use clap::Args;
use std::path::PathBuf;

/// 目标选择参数（patch 与 check 共用）
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Target files to process, in order
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Read target paths from a list file (one path per line, '#' comments)
    #[arg(short, long, conflicts_with = "files")]
    pub list: Option<PathBuf>,

    /// Collect targets from a directory instead of an explicit list
    #[arg(short, long, conflicts_with_all = ["files", "list"])]
    pub dir: Option<PathBuf>,

    /// Glob pattern(s) for --dir collection (comma separated)
    #[arg(short, long, default_value = "*.tsx")]
    pub pattern: String,

    /// Recurse into subdirectories for --dir collection
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}

/// patch 子命令参数
#[derive(Args, Debug)]
pub struct PatchArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Export the per-file report as CSV
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit non-zero when an expected structural anchor is missing
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
