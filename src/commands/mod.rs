//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `rules/`, `report.rs`, `utils/`
//! - 子模块: patch, check

pub mod check;
pub mod patch;

use crate::batch::{read_list_file, FileCollector};
use crate::cli::patch::TargetArgs;
use crate::cli::Commands;
use crate::error::{Result, SidepatchError};

use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Patch(args) => patch::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}

/// 解析目标选择参数为有序文件列表
fn resolve_targets(targets: &TargetArgs) -> Result<Vec<PathBuf>> {
    let files = if !targets.files.is_empty() {
        targets.files.clone()
    } else if let Some(list) = &targets.list {
        read_list_file(list)?
    } else if let Some(dir) = &targets.dir {
        FileCollector::new(dir.clone())
            .with_pattern(&targets.pattern)
            .recursive(targets.recursive)
            .collect()?
    } else {
        Vec::new()
    };

    if files.is_empty() {
        return Err(SidepatchError::NoFilesFound);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_args(files: Vec<PathBuf>) -> TargetArgs {
        TargetArgs {
            files,
            list: None,
            dir: None,
            pattern: "*.tsx".to_string(),
            recursive: false,
        }
    }

    #[test]
    fn test_resolve_explicit_files_keeps_order() {
        let args = target_args(vec![
            PathBuf::from("pages/Zeta.tsx"),
            PathBuf::from("pages/Alpha.tsx"),
        ]);
        let files = resolve_targets(&args).unwrap();
        assert_eq!(files[0], PathBuf::from("pages/Zeta.tsx"));
        assert_eq!(files[1], PathBuf::from("pages/Alpha.tsx"));
    }

    #[test]
    fn test_resolve_no_selection_is_error() {
        let args = target_args(Vec::new());
        assert!(matches!(
            resolve_targets(&args).unwrap_err(),
            SidepatchError::NoFilesFound
        ));
    }
}
