//! # 批量处理模块
//!
//! 提供目标文件收集与严格顺序的逐文件执行能力。
//!
//! ## 功能
//! - 显式路径 / 清单文件 / 目录扫描三种目标来源
//! - 逐文件 读取 → 管线 → 比较 → 写回 流水线
//! - 进度反馈与逐文件结局记录
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::{read_list_file, FileCollector};
pub use runner::PatchRunner;
