//! # 编辑管线
//!
//! 按 A–E 固定顺序在单个文件缓冲区上执行五条规则，每条规则作用于前一条
//! 规则的输出缓冲区。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `rules/imports.rs`, `rules/hooks.rs`, `rules/markup.rs`

use crate::rules::hooks::{FixLocationDestructure, InsertLogoutHandler};
use crate::rules::imports::{InsertSidebarImport, RemoveSettingsImport};
use crate::rules::markup::ReplaceSidebarMarkup;
use crate::rules::status::EditStatuses;

/// 管线对单个缓冲区的执行结果
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// 全部规则执行后的缓冲区内容
    pub content: String,
    /// 五条规则各自的三态状态
    pub statuses: EditStatuses,
    /// 内容与输入相比是否发生变化
    pub changed: bool,
}

/// 编辑管线：持有预编译的规则，供整批文件复用
pub struct EditPipeline {
    remove_settings_import: RemoveSettingsImport,
    insert_sidebar_import: InsertSidebarImport,
    fix_location_destructure: FixLocationDestructure,
    insert_logout_handler: InsertLogoutHandler,
    replace_sidebar_markup: ReplaceSidebarMarkup,
}

impl EditPipeline {
    /// 创建管线（编译各规则的正则锚点）
    pub fn new() -> Self {
        Self {
            remove_settings_import: RemoveSettingsImport,
            insert_sidebar_import: InsertSidebarImport::new(),
            fix_location_destructure: FixLocationDestructure,
            insert_logout_handler: InsertLogoutHandler::new(),
            replace_sidebar_markup: ReplaceSidebarMarkup::new(),
        }
    }

    /// 对输入内容执行全部规则，返回新内容与逐规则状态
    pub fn apply(&self, input: &str) -> PipelineResult {
        let mut buf = input.to_string();

        let statuses = EditStatuses {
            remove_settings_import: self.remove_settings_import.apply(&mut buf),
            insert_sidebar_import: self.insert_sidebar_import.apply(&mut buf),
            fix_location_destructure: self.fix_location_destructure.apply(&mut buf),
            insert_logout_handler: self.insert_logout_handler.apply(&mut buf),
            replace_sidebar_markup: self.replace_sidebar_markup.apply(&mut buf),
        };

        PipelineResult {
            changed: buf != input,
            content: buf,
            statuses,
        }
    }
}

impl Default for EditPipeline {
    fn default() -> Self {
        Self::new()
    }
}
