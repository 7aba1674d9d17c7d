//! # 运行报告模型
//!
//! 记录每个文件的处理结局与逐规则状态，汇总后输出终端表格或导出 CSV。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 填充
//! - 被 `commands/` 模块用于汇总输出
//! - 使用 `tabled` 生成终端表格
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, SidepatchError};
use crate::rules::EditStatuses;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单个文件的处理结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 内容变化并已写回
    Updated,
    /// 内容会变化，但处于 dry-run 模式未写回
    WouldUpdate,
    /// 内容逐字节未变，未写回
    Skipped,
    /// 读取或写回失败
    Failed,
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Updated => write!(f, "updated"),
            FileOutcome::WouldUpdate => write!(f, "would-update"),
            FileOutcome::Skipped => write!(f, "skipped"),
            FileOutcome::Failed => write!(f, "failed"),
        }
    }
}

/// 单个文件的报告条目
#[derive(Debug, Clone)]
pub struct FileReport {
    /// 文件名（列表中的基础名）
    pub file: String,
    /// 处理结局
    pub outcome: FileOutcome,
    /// 逐规则状态；读取失败时为 None
    pub statuses: Option<EditStatuses>,
    /// 失败时的错误信息
    pub message: Option<String>,
}

impl FileReport {
    /// 构造失败条目
    pub fn failed(file: String, message: String) -> Self {
        Self {
            file,
            outcome: FileOutcome::Failed,
            statuses: None,
            message: Some(message),
        }
    }
}

/// 整个批次的运行报告
#[derive(Debug, Default)]
pub struct RunReport {
    /// 按处理顺序排列的条目
    pub entries: Vec<FileReport>,
    /// 已写回数量
    pub updated: usize,
    /// dry-run 下会写回的数量
    pub would_update: usize,
    /// 无变化数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
}

/// 终端汇总表格行
#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "A:settings-import")]
    remove_settings_import: String,
    #[tabled(rename = "B:sidebar-import")]
    insert_sidebar_import: String,
    #[tabled(rename = "C:location-fix")]
    fix_location_destructure: String,
    #[tabled(rename = "D:logout-handler")]
    insert_logout_handler: String,
    #[tabled(rename = "E:sidebar-markup")]
    replace_sidebar_markup: String,
}

impl RunReport {
    /// 追加条目并更新计数
    pub fn push(&mut self, entry: FileReport) {
        match entry.outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::WouldUpdate => self.would_update += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed => self.failed += 1,
        }
        self.entries.push(entry);
    }

    /// 处理的文件总数
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// 全批次锚点缺失（NotMatched）总数，只统计成功读取的文件
    pub fn not_matched_total(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.statuses.as_ref())
            .map(|s| s.not_matched_count())
            .sum()
    }

    /// 渲染终端汇总表格
    pub fn to_table(&self) -> Table {
        let rows: Vec<ReportRow> = self
            .entries
            .iter()
            .map(|e| {
                let status_cell = |pick: fn(&EditStatuses) -> String| -> String {
                    e.statuses.as_ref().map(pick).unwrap_or_else(|| "-".into())
                };
                ReportRow {
                    file: e.file.clone(),
                    outcome: e.outcome.to_string(),
                    remove_settings_import: status_cell(|s| s.remove_settings_import.to_string()),
                    insert_sidebar_import: status_cell(|s| s.insert_sidebar_import.to_string()),
                    fix_location_destructure: status_cell(|s| {
                        s.fix_location_destructure.to_string()
                    }),
                    insert_logout_handler: status_cell(|s| s.insert_logout_handler.to_string()),
                    replace_sidebar_markup: status_cell(|s| s.replace_sidebar_markup.to_string()),
                }
            })
            .collect();

        Table::new(rows)
    }

    /// 导出报告为 CSV（表头取自 `CsvRow` 字段名）
    pub fn write_csv(&self, output_path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(SidepatchError::CsvError)?;

        for entry in &self.entries {
            let status_cell = |pick: fn(&EditStatuses) -> String| -> String {
                entry
                    .statuses
                    .as_ref()
                    .map(pick)
                    .unwrap_or_else(|| "-".into())
            };
            wtr.serialize(CsvRow {
                file: entry.file.clone(),
                outcome: entry.outcome.to_string(),
                remove_settings_import: status_cell(|s| s.remove_settings_import.to_string()),
                insert_sidebar_import: status_cell(|s| s.insert_sidebar_import.to_string()),
                fix_location_destructure: status_cell(|s| s.fix_location_destructure.to_string()),
                insert_logout_handler: status_cell(|s| s.insert_logout_handler.to_string()),
                replace_sidebar_markup: status_cell(|s| s.replace_sidebar_markup.to_string()),
                message: entry.message.clone().unwrap_or_default(),
            })
            .map_err(SidepatchError::CsvError)?;
        }

        wtr.flush().map_err(|e| SidepatchError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}

/// CSV 导出行
#[derive(Serialize)]
struct CsvRow {
    file: String,
    outcome: String,
    remove_settings_import: String,
    insert_sidebar_import: String,
    fix_location_destructure: String,
    insert_logout_handler: String,
    replace_sidebar_markup: String,
    message: String,
}
