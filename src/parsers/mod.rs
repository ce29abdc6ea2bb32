//! # 解析器模块
//!
//! 提供核素数据表、半衰期数值和带单位时间量的解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: nucbasics, half_life, quantity

pub mod half_life;
pub mod nucbasics;
pub mod quantity;

use crate::error::{NucxError, Result};
use crate::models::NuclideTable;
use std::path::Path;

/// 从文件路径推断格式并加载核素表
pub fn load_table(path: &Path) -> Result<NuclideTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" | "txt" => nucbasics::load_nucbasics_file(path),
        _ => Err(NucxError::InvalidArgument(format!(
            "Cannot determine table format for: {} (expected .csv)",
            path.display()
        ))),
    }
}
