//! # filter 子命令 CLI 定义
//!
//! 按半衰期区间筛选核素，输出终端表格或导出 HTML/CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/filter.rs`

use super::{BoundArgs, DataArgs};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 支持的输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// Terminal table
    Table,
    /// HTML table (superscript mass numbers)
    Html,
    /// Comma-separated values
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Table => write!(f, "table"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// filter 子命令参数
#[derive(Args, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub bounds: BoundArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Table)]
    pub format: ExportFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
