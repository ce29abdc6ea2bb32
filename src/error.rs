//! # 统一错误处理模块
//!
//! 定义 nucx 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// nucx 统一错误类型
#[derive(Error, Debug)]
pub enum NucxError {
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

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse nuclide table: {path}\nReason: {reason}")]
    ParseError { path: String, reason: String },

    #[error("Nuclide table {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    // ─────────────────────────────────────────────────────────────
    // 单位换算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid unit '{0}' (expected one of: ka, Ma, Ga)")]
    InvalidUnit(String),

    #[error("Conversion from seconds into {unit} is undefined (zero multiplier)")]
    DivisionUndefined { unit: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, NucxError>;
