//! # 统一错误处理模块
//!
//! 定义 Sidepatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Sidepatch 统一错误类型
#[derive(Error, Debug)]
pub enum SidepatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read target list: {path}")]
    ListReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 目标选择错误
    // ─────────────────────────────────────────────────────────────
    #[error("No target files selected (pass paths, --list or --dir)")]
    NoFilesFound,

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 批量结果错误（整个列表处理完之后才产生）
    // ─────────────────────────────────────────────────────────────
    #[error("{count} file(s) failed to process")]
    FilesFailed { count: usize },

    #[error("{count} expected structural anchor(s) not found (strict mode)")]
    AnchorsMissing { count: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SidepatchError>;
