//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `patch`: 对目标文件执行迁移并写回
//! - `check`: 干跑模式，只报告将发生的变化
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: patch, check

pub mod check;
pub mod patch;

use clap::{Parser, Subcommand};

/// Sidepatch - 仪表盘页面侧边栏迁移工具
#[derive(Parser)]
#[command(name = "sidepatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Migrate dashboard pages onto the shared DashboardSidebar component", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply the sidebar migration edits and write changed files back
    Patch(patch::PatchArgs),

    /// Dry run: report what would change without writing anything
    Check(check::CheckArgs),
}
