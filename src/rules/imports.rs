//! # 导入语句规则（A、B）
//!
//! A: 删除废弃的 `useSiteSettings` 导入行。
//! B: 在 lucide-react 导入之后插入 `DashboardSidebar` 共享组件导入。
//!
//! ## 锚点说明
//! - A 是精确字面量替换，删除后可能留下空行（与原迁移脚本一致）
//! - B 以首个 lucide-react 导入为插入锚点，锚点缺失时报告 NotMatched
//!
//! ## 依赖关系
//! - 被 `rules/pipeline.rs` 调用
//! - 使用 `regex` 定位插入锚点

use crate::rules::status::EditStatus;
use regex::Regex;

/// 废弃的设置 hook 导入（整行字面量）
const OBSOLETE_IMPORT: &str = r#"import { useSiteSettings } from "@/hooks/useSiteSettings";"#;

/// 共享组件导入行
const SIDEBAR_IMPORT: &str = r#"import { DashboardSidebar } from "@/components/DashboardSidebar";"#;

/// 判断共享组件导入是否已存在的标记
const SIDEBAR_IMPORT_MARKER: &str = "import { DashboardSidebar }";

/// 规则 A：删除废弃的 useSiteSettings 导入
pub struct RemoveSettingsImport;

impl RemoveSettingsImport {
    pub fn apply(&self, buf: &mut String) -> EditStatus {
        if buf.contains(OBSOLETE_IMPORT) {
            *buf = buf.replace(OBSOLETE_IMPORT, "");
            EditStatus::Applied
        } else {
            // 删除类规则没有"锚点缺失"一说：不存在即为目标状态
            EditStatus::AlreadyApplied
        }
    }
}

/// 规则 B：插入 DashboardSidebar 导入
pub struct InsertSidebarImport {
    /// 插入锚点：首个 lucide-react 导入行
    anchor: Regex,
}

impl InsertSidebarImport {
    pub fn new() -> Self {
        Self {
            anchor: Regex::new(r#"import \{[^}]*\} from "lucide-react";"#).unwrap(),
        }
    }

    pub fn apply(&self, buf: &mut String) -> EditStatus {
        if buf.contains(SIDEBAR_IMPORT_MARKER) {
            return EditStatus::AlreadyApplied;
        }

        let insert_at = match self.anchor.find(buf) {
            Some(m) => m.end(),
            None => return EditStatus::NotMatched,
        };

        let insertion = format!("\n{}", SIDEBAR_IMPORT);
        buf.insert_str(insert_at, &insertion);
        EditStatus::Applied
    }
}
