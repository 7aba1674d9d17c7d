//! # 侧边栏标记规则（E）
//!
//! 将页面内联的侧边栏标记（`<aside>` 块加移动端遮罩）整体替换为
//! `DashboardSidebar` 组件调用，透传五个固定属性。
//!
//! ## 锚点说明
//! 单条 `(?s)` 跨行正则，从 `return (` 的 min-h-screen 包裹元素起，经
//! `{/* Sidebar */}` 与 `</aside>`，到 `{/* Overlay for mobile */}` 条件块的
//! 自闭合遮罩 `/>` 与 `)}` 止。包裹元素本身（捕获组 1）保留。
//! 页面结构偏离该形状时不做任何替换（尽力而为，非保证）。
//!
//! ## 依赖关系
//! - 被 `rules/pipeline.rs` 调用
//! - 使用 `regex` 的 `(?s)` 模式做跨行匹配

use crate::rules::status::EditStatus;
use regex::{Captures, Regex};

/// 判断组件调用是否已存在的标记
const SIDEBAR_COMPONENT_MARKER: &str = "<DashboardSidebar";

/// 替换后的组件调用，透传 user / 开关状态 / 开关 setter / 登出 / 当前路径
const SIDEBAR_INVOCATION: &str = r#"<DashboardSidebar
        user={user}
        isSidebarOpen={isSidebarOpen}
        setIsSidebarOpen={setIsSidebarOpen}
        onLogout={handleLogout}
        currentPath={location}
      />"#;

/// 规则 E：替换内联侧边栏标记
pub struct ReplaceSidebarMarkup {
    /// 从包裹元素到移动端遮罩收尾的整段跨行匹配
    span: Regex,
}

impl ReplaceSidebarMarkup {
    pub fn new() -> Self {
        let span = Regex::new(concat!(
            r#"(?s)(return \(\s*<div className="min-h-screen[^>]*>\s*)"#,
            r"\{\s*/\*\s*Sidebar\s*\*/\s*\}\s*<aside.*?</aside>\s*",
            r"\{\s*/\*\s*Overlay for mobile\s*\*/\s*\}\s*",
            r"\{\s*isSidebarOpen\s*&&.*?/>\s*\)\s*\}",
        ))
        .unwrap();
        Self { span }
    }

    pub fn apply(&self, buf: &mut String) -> EditStatus {
        if buf.contains(SIDEBAR_COMPONENT_MARKER) {
            return EditStatus::AlreadyApplied;
        }

        if !self.span.is_match(buf) {
            return EditStatus::NotMatched;
        }

        let replaced = self
            .span
            .replace_all(buf, |caps: &Captures| {
                format!("{}{}", &caps[1], SIDEBAR_INVOCATION)
            })
            .into_owned();
        *buf = replaced;
        EditStatus::Applied
    }
}
