//! # 带单位时间量解析
//!
//! 解析形如 `100 Ma`、`100Ma`、`2.5e-3ka` 的输入。
//!
//! ## 依赖关系
//! - 被 `commands/explore.rs` 使用
//! - 使用 `halflife/units.rs`
//! - 使用 `regex` 拆分数值与单位

use crate::error::{NucxError, Result};
use crate::halflife::units::{Quantity, TimeUnit};

use regex::Regex;
use std::sync::OnceLock;

fn quantity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z]+)\s*$")
            .expect("quantity pattern is valid")
    })
}

/// 解析非负数值，供上下界使用
pub fn parse_bound_value(text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| NucxError::InvalidQuantity(format!("'{}' is not a number", text.trim())))?;
    check_bound_value(value)
}

/// 检查上下界数值为有限非负数
pub fn check_bound_value(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(NucxError::InvalidQuantity(format!(
            "{} (bounds must be finite and non-negative)",
            value
        )));
    }
    Ok(value)
}

/// 解析带单位的时间量
///
/// 数值必须有限且非负；单位必须是 ka / Ma / Ga。
pub fn parse_quantity(input: &str) -> Result<Quantity> {
    let caps = quantity_pattern().captures(input).ok_or_else(|| {
        NucxError::InvalidQuantity(format!(
            "'{}' (expected a number followed by a unit, e.g. '100 Ma')",
            input.trim()
        ))
    })?;

    let value = parse_bound_value(&caps[1])?;
    let unit: TimeUnit = caps[2].parse()?;

    Ok(Quantity::new(value, unit))
}
