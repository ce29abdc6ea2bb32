//! # 时间单位换算
//!
//! 千年 / 百万年 / 十亿年 (ka / Ma / Ga) 与秒之间的换算。
//!
//! ## 约定
//! - 一年按儒略年计：365.25 天
//! - `SECONDS_PER_KILO_ANNUM = 1e3 * 365.25 * 24 * 60 * 60`，Ma/Ga 依次乘 1e3
//!
//! ## 依赖关系
//! - 被 `halflife/query.rs`, `parsers/quantity.rs`, `commands/` 使用
//! - 使用 `clap::ValueEnum` 直接作为命令行参数类型

use crate::error::{NucxError, Result};

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// 儒略年的秒数 (365.25 天)
pub const SECONDS_PER_JULIAN_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// 千年 (ka) 的秒数
pub const SECONDS_PER_KILO_ANNUM: f64 = 1e3 * SECONDS_PER_JULIAN_YEAR;

/// 百万年 (Ma) 的秒数
pub const SECONDS_PER_MEGA_ANNUM: f64 = 1e6 * SECONDS_PER_JULIAN_YEAR;

/// 十亿年 (Ga) 的秒数
pub const SECONDS_PER_GIGA_ANNUM: f64 = 1e9 * SECONDS_PER_JULIAN_YEAR;

/// 支持的时间单位
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Kilo-annum (10^3 Julian years)
    #[value(name = "ka")]
    KiloAnnum,
    /// Mega-annum (10^6 Julian years)
    #[default]
    #[value(name = "Ma")]
    MegaAnnum,
    /// Giga-annum (10^9 Julian years)
    #[value(name = "Ga")]
    GigaAnnum,
}

impl TimeUnit {
    /// 全部单位，按量级从小到大
    pub const ALL: [TimeUnit; 3] = [TimeUnit::KiloAnnum, TimeUnit::MegaAnnum, TimeUnit::GigaAnnum];

    /// 单位符号
    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::KiloAnnum => "ka",
            TimeUnit::MegaAnnum => "Ma",
            TimeUnit::GigaAnnum => "Ga",
        }
    }

    /// 单位全称
    pub fn long_name(self) -> &'static str {
        match self {
            TimeUnit::KiloAnnum => "kilo-annum",
            TimeUnit::MegaAnnum => "mega-annum",
            TimeUnit::GigaAnnum => "giga-annum",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = NucxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ka" => Ok(TimeUnit::KiloAnnum),
            "Ma" => Ok(TimeUnit::MegaAnnum),
            "Ga" => Ok(TimeUnit::GigaAnnum),
            other => Err(NucxError::InvalidUnit(other.to_string())),
        }
    }
}

/// 单位对应的秒数
pub fn seconds_per_unit(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::KiloAnnum => SECONDS_PER_KILO_ANNUM,
        TimeUnit::MegaAnnum => SECONDS_PER_MEGA_ANNUM,
        TimeUnit::GigaAnnum => SECONDS_PER_GIGA_ANNUM,
    }
}

/// 将 `value` (单位 `unit`) 换算为秒
///
/// 不做范围检查，负数与零原样换算。
pub fn to_seconds(value: f64, unit: TimeUnit) -> f64 {
    value * seconds_per_unit(unit)
}

/// 将秒换算为 `unit`
pub fn from_seconds(value_s: f64, unit: TimeUnit) -> Result<f64> {
    let factor = seconds_per_unit(unit);
    if factor == 0.0 {
        return Err(NucxError::DivisionUndefined {
            unit: unit.to_string(),
        });
    }
    Ok(value_s / factor)
}

/// 带单位的时间量，例如 `100 Ma`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: TimeUnit,
}

impl Quantity {
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Quantity { value, unit }
    }

    /// 换算为秒
    pub fn to_seconds(self) -> f64 {
        to_seconds(self.value, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
