//! # check 子命令 CLI 定义
//!
//! 干跑模式：执行与 patch 相同的管线但不写盘，只报告将发生的变化。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/patch.rs` 的 `TargetArgs`
//! - 参数传递给 `commands/check.rs`

use crate::cli::patch::TargetArgs;
use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Export the per-file report as CSV
    #[arg(long)]
    pub report: Option<PathBuf>,
}
