//! # patch 命令实现
//!
//! 解析目标列表，顺序执行迁移管线并写回变化的文件，最后汇总报告。
//!
//! ## 依赖关系
//! - 使用 `cli/patch.rs` 定义的参数
//! - 使用 `batch/runner.rs` 执行批次
//! - 使用 `report.rs`, `utils/output.rs`

use crate::batch::PatchRunner;
use crate::cli::patch::PatchArgs;
use crate::error::{Result, SidepatchError};
use crate::utils::output;

/// 执行 patch 命令
pub fn execute(args: PatchArgs) -> Result<()> {
    output::print_header("Patching Dashboard Pages");

    let files = super::resolve_targets(&args.targets)?;
    output::print_info(&format!("Processing {} target file(s)...", files.len()));

    let report = PatchRunner::new(false).run(&files);

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
        "Processed {} file(s): {} updated, {} skipped, {} failed",
        report.total(),
        report.updated,
        report.skipped,
        report.failed
    ));

    if report.failed > 0 {
        return Err(SidepatchError::FilesFailed {
            count: report.failed,
        });
    }

    if args.strict && report.not_matched_total() > 0 {
        return Err(SidepatchError::AnchorsMissing {
            count: report.not_matched_total(),
        });
    }

    Ok(())
}
