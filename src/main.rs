//! # Sidepatch - 仪表盘侧边栏迁移工具
//!
//! 将一次性的页面迁移脚本用 Rust 重构为可靠的批量补丁工具：把重复的
//! 内联侧边栏标记迁移到共享的 `DashboardSidebar` 组件引用。
//!
//! ## 子命令
//! - `patch` - 执行迁移编辑并写回变化的文件
//! - `check` - 干跑模式，只报告将发生的变化
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (目标收集与顺序执行)
//!   │     ├── rules/   (A–E 五条编辑规则与管线)
//!   │     └── report.rs(逐文件/逐规则报告)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod report;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
