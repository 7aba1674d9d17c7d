//! # 批量执行器
//!
//! 严格按列表顺序逐文件执行 读取 → 管线 → 比较 → 写回，单个文件的失败
//! 不中断批次。
//!
//! ## 功能
//! - 单线程顺序处理（逐文件隔离，无共享可变状态）
//! - 仅当内容发生变化时整体写回
//! - dry-run 模式下只分类不写盘
//! - 进度条显示与逐文件状态行
//!
//! ## 依赖关系
//! - 被 `commands/patch.rs`, `commands/check.rs` 调用
//! - 使用 `rules/pipeline.rs` 执行编辑
//! - 使用 `report.rs` 记录结局
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use crate::error::SidepatchError;
use crate::report::{FileOutcome, FileReport, RunReport};
use crate::rules::EditPipeline;
use crate::utils::{output, progress};

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// 批量补丁执行器
pub struct PatchRunner {
    /// 编辑管线（整批复用）
    pipeline: EditPipeline,
    /// dry-run 模式：不写盘，变化报告为 would-update
    dry_run: bool,
}

impl PatchRunner {
    /// 创建执行器
    pub fn new(dry_run: bool) -> Self {
        Self {
            pipeline: EditPipeline::new(),
            dry_run,
        }
    }

    /// 顺序处理文件列表并返回运行报告
    pub fn run(&self, files: &[PathBuf]) -> RunReport {
        let label = if self.dry_run { "Checking" } else { "Patching" };
        let pb = progress::create_progress_bar(files.len() as u64, label);

        let mut report = RunReport::default();

        for file in files {
            pb.set_message(file_label(file));
            let entry = self.process_file(file);

            pb.suspend(|| match &entry.outcome {
                FileOutcome::Updated => output::print_success(&format!("{} updated", entry.file)),
                FileOutcome::WouldUpdate => {
                    output::print_info(&format!("{} would be updated", entry.file))
                }
                FileOutcome::Skipped => output::print_skip(&format!("{} unchanged", entry.file)),
                FileOutcome::Failed => output::print_error(&format!(
                    "{}: {}",
                    entry.file,
                    entry.message.as_deref().unwrap_or("unknown error")
                )),
            });

            report.push(entry);
            pb.inc(1);
        }

        pb.finish_and_clear();
        report
    }

    /// 处理单个文件：整体读取、整体变换、变化时整体写回
    fn process_file(&self, path: &Path) -> FileReport {
        let file = file_label(path);

        let original = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                let err = SidepatchError::FileReadError {
                    path: path.display().to_string(),
                    source: e,
                };
                return FileReport::failed(file, render_error(&err));
            }
        };

        let result = self.pipeline.apply(&original);

        if !result.changed {
            return FileReport {
                file,
                outcome: FileOutcome::Skipped,
                statuses: Some(result.statuses),
                message: None,
            };
        }

        if self.dry_run {
            return FileReport {
                file,
                outcome: FileOutcome::WouldUpdate,
                statuses: Some(result.statuses),
                message: None,
            };
        }

        match fs::write(path, &result.content) {
            Ok(()) => FileReport {
                file,
                outcome: FileOutcome::Updated,
                statuses: Some(result.statuses),
                message: None,
            },
            Err(e) => {
                let err = SidepatchError::FileWriteError {
                    path: path.display().to_string(),
                    source: e,
                };
                FileReport::failed(file, render_error(&err))
            }
        }
    }
}

/// 报告中使用的文件标签（基础名）
fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// 渲染带底层原因的错误信息
fn render_error(err: &SidepatchError) -> String {
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_PAGE: &str = concat!(
        "import { useSiteSettings } from \"@/hooks/useSiteSettings\";\n",
        "import { Menu } from \"lucide-react\";\n",
        "const [, setLocation] = useLocation();\n",
        "const logoutMutation = useMutation();\n",
    );

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_updated_file_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_file(dir.path(), "Faq.tsx", MINIMAL_PAGE);

        let report = PatchRunner::new(false).run(&[page.clone()]);
        assert_eq!(report.updated, 1);

        let on_disk = fs::read_to_string(&page).unwrap();
        assert!(!on_disk.contains("useSiteSettings"));
        assert!(on_disk.contains("import { DashboardSidebar }"));
        assert!(on_disk.contains("const [location, setLocation] = useLocation();"));
        assert!(on_disk.contains("const handleLogout = () => {"));
    }

    #[test]
    fn test_second_run_skips_everything() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_file(dir.path(), "Faq.tsx", MINIMAL_PAGE);

        let runner = PatchRunner::new(false);
        runner.run(&[page.clone()]);
        let after_first = fs::read_to_string(&page).unwrap();

        let report = runner.run(&[page.clone()]);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.updated, 0);
        assert_eq!(fs::read_to_string(&page).unwrap(), after_first);
    }

    #[test]
    fn test_noop_file_untouched_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let content = "export default function About() {\n  return <div>about</div>;\n}\n";
        let page = write_file(dir.path(), "About.tsx", content);

        let report = PatchRunner::new(false).run(&[page.clone()]);
        assert_eq!(report.skipped, 1);
        assert_eq!(fs::read_to_string(&page).unwrap(), content);
    }

    #[test]
    fn test_failure_isolation_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(dir.path(), "First.tsx", MINIMAL_PAGE);
        let missing = dir.path().join("Missing.tsx");
        let last = write_file(dir.path(), "Last.tsx", MINIMAL_PAGE);

        let report = PatchRunner::new(false).run(&[first, missing, last]);

        assert_eq!(report.total(), 3);
        assert_eq!(report.updated, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.entries[1].file, "Missing.tsx");
        assert_eq!(report.entries[1].outcome, FileOutcome::Failed);
        assert!(report.entries[1]
            .message
            .as_deref()
            .unwrap()
            .contains("Failed to read file"));
        assert_eq!(report.entries[2].outcome, FileOutcome::Updated);
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_file(dir.path(), "Faq.tsx", MINIMAL_PAGE);

        let report = PatchRunner::new(true).run(&[page.clone()]);
        assert_eq!(report.would_update, 1);
        assert_eq!(report.updated, 0);
        assert_eq!(fs::read_to_string(&page).unwrap(), MINIMAL_PAGE);
    }

    #[test]
    fn test_existing_sidebar_import_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        let content = concat!(
            "import { Menu } from \"lucide-react\";\n",
            "import { DashboardSidebar } from \"@/components/DashboardSidebar\";\n",
            "const [, setLocation] = useLocation();\n",
        );
        let page = write_file(dir.path(), "Pedidos.tsx", content);

        PatchRunner::new(false).run(&[page.clone()]);

        let on_disk = fs::read_to_string(&page).unwrap();
        assert_eq!(on_disk.matches("import { DashboardSidebar }").count(), 1);
    }
}
