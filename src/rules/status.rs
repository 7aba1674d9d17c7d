//! # 规则执行状态
//!
//! 每条编辑规则返回的三态结果，用于区分"已修改"、"本就正确"与"锚点缺失"。
//!
//! ## 依赖关系
//! - 被 `rules/` 各规则模块与 `report.rs` 使用

/// 单条规则的三态执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    /// 规则修改了缓冲区
    Applied,
    /// 缓冲区已处于规则的目标状态
    AlreadyApplied,
    /// 既未找到目标状态也未找到结构锚点
    NotMatched,
}

impl std::fmt::Display for EditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditStatus::Applied => write!(f, "applied"),
            EditStatus::AlreadyApplied => write!(f, "already"),
            EditStatus::NotMatched => write!(f, "not-matched"),
        }
    }
}

/// 一个文件上五条规则的完整状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditStatuses {
    /// A: 删除废弃 useSiteSettings 导入
    pub remove_settings_import: EditStatus,
    /// B: 插入 DashboardSidebar 导入
    pub insert_sidebar_import: EditStatus,
    /// C: 修复 useLocation 解构
    pub fix_location_destructure: EditStatus,
    /// D: 插入 handleLogout 处理器
    pub insert_logout_handler: EditStatus,
    /// E: 替换内联侧边栏标记
    pub replace_sidebar_markup: EditStatus,
}

impl EditStatuses {
    /// 按 A–E 顺序迭代（名称, 状态）
    pub fn entries(&self) -> [(&'static str, EditStatus); 5] {
        [
            ("remove_settings_import", self.remove_settings_import),
            ("insert_sidebar_import", self.insert_sidebar_import),
            ("fix_location_destructure", self.fix_location_destructure),
            ("insert_logout_handler", self.insert_logout_handler),
            ("replace_sidebar_markup", self.replace_sidebar_markup),
        ]
    }

    /// 锚点缺失的规则数量
    pub fn not_matched_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, s)| *s == EditStatus::NotMatched)
            .count()
    }
}
