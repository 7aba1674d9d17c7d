//! # check 命令实现
//!
//! 干跑模式：执行与 patch 相同的管线但不写盘，报告每个文件将发生的变化。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `batch/runner.rs` 执行批次（dry-run）
//! - 使用 `report.rs`, `utils/output.rs`

use crate::batch::PatchRunner;
use crate::cli::check::CheckArgs;
use crate::error::{Result, SidepatchError};
use crate::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking Dashboard Pages (dry run)");

    let files = super::resolve_targets(&args.targets)?;
    output::print_info(&format!("Checking {} target file(s)...", files.len()));

    let report = PatchRunner::new(true).run(&files);

    output::print_separator();
    println!("{}", report.to_table());

    if report.not_matched_total() > 0 {
        output::print_warning(&format!(
            "{} structural anchor(s) not found; see the table above",
            report.not_matched_total()
        ));
    }

    if let Some(csv_path) = &args.report {
        report.write_csv(csv_path)?;
        output::print_info(&format!("Report written to '{}'", csv_path.display()));
    }

    output::print_done(&format!(
        "Checked {} file(s): {} would update, {} unchanged, {} failed (nothing written)",
        report.total(),
        report.would_update,
        report.skipped,
        report.failed
    ));

    if report.failed > 0 {
        return Err(SidepatchError::FilesFailed {
            count: report.failed,
        });
    }

    Ok(())
}
