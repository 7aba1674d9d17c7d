//! # 迁移规则模块
//!
//! 定义五个按固定顺序执行的文本编辑规则（A–E）以及串联它们的管线。
//!
//! ## 规则顺序
//! - A `imports::RemoveSettingsImport` - 删除废弃的 useSiteSettings 导入
//! - B `imports::InsertSidebarImport` - 插入 DashboardSidebar 共享组件导入
//! - C `hooks::FixLocationDestructure` - 修复 useLocation 解构遗漏
//! - D `hooks::InsertLogoutHandler` - 在 logoutMutation 声明前插入 handleLogout
//! - E `markup::ReplaceSidebarMarkup` - 将内联侧边栏标记替换为组件引用
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `regex` 进行锚点定位与跨行匹配

pub mod hooks;
pub mod imports;
pub mod markup;
pub mod pipeline;
pub mod status;

pub use pipeline::{EditPipeline, PipelineResult};
pub use status::{EditStatus, EditStatuses};
