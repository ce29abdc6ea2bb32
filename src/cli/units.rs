//! # units 子命令 CLI 定义
//!
//! 显示 ka / Ma / Ga 与秒的换算系数，可选换算一个给定值
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/units.rs`

use crate::halflife::TimeUnit;
use clap::Args;

/// units 子命令参数
#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Value to convert into seconds and every unit
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Unit of --value
    #[arg(long, value_enum, default_value_t = TimeUnit::MegaAnnum)]
    pub unit: TimeUnit,
}
