//! # 数据模型模块
//!
//! 定义核素记录和核素表数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `halflife/` 和 `commands/` 使用
//! - 子模块: nuclide

pub mod nuclide;

pub use nuclide::{Nuclide, NuclideTable};
