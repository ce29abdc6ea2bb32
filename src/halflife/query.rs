//! # 查询处理
//!
//! 每次交互执行一次完整计算：
//! 上下界换算为秒 → 区间筛选 → 换算到显示单位。
//!
//! ## 依赖关系
//! - 被 `commands/filter.rs`, `commands/explore.rs` 调用
//! - 使用 `halflife/units.rs`, `halflife/filter.rs`
//! - 使用 `models/nuclide.rs`

use crate::error::Result;
use crate::halflife::filter::{filter_by_half_life, BoundPair};
use crate::halflife::units::{from_seconds, Quantity, TimeUnit};
use crate::models::{Nuclide, NuclideTable};

/// 显示值保留的小数位
pub const DISPLAY_DECIMALS: i32 = 6;

/// 一次查询的全部参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRequest {
    pub lower: Quantity,
    pub upper: Quantity,
    pub display: TimeUnit,
}

impl Default for FilterRequest {
    fn default() -> Self {
        FilterRequest {
            lower: Quantity::new(0.1, TimeUnit::MegaAnnum),
            upper: Quantity::new(5000.0, TimeUnit::MegaAnnum),
            display: TimeUnit::MegaAnnum,
        }
    }
}

impl FilterRequest {
    /// 秒为单位的上下界
    pub fn bounds(&self) -> BoundPair {
        BoundPair::from_quantities(self.lower, self.upper)
    }
}

/// 一行显示结果
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow<'a> {
    pub nuclide: &'a Nuclide,
    /// 以显示单位表示的半衰期（已取整）
    pub half_life: f64,
}

/// 查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<'a> {
    /// 核素表为空
    NoData,
    /// 筛选结果（可能为空）
    Matched(Vec<DisplayRow<'a>>),
}

impl QueryOutcome<'_> {
    /// 匹配的行数；无数据时为 0
    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::NoData => 0,
            QueryOutcome::Matched(rows) => rows.len(),
        }
    }

    /// 无数据或无匹配时为 true
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 执行一次查询
pub fn run_query<'a>(table: &'a NuclideTable, request: &FilterRequest) -> Result<QueryOutcome<'a>> {
    if table.is_empty() {
        return Ok(QueryOutcome::NoData);
    }

    let bounds = request.bounds();
    log::debug!(
        "filtering {} nuclides by [{:e}, {:e}] s",
        table.len(),
        bounds.lo_s,
        bounds.hi_s
    );

    let rows = filter_by_half_life(&table.nuclides, bounds.lo_s, bounds.hi_s)
        .into_iter()
        .map(|nuclide| {
            // 筛选结果的半衰期必然已定义
            let seconds = nuclide.half_life_s.unwrap_or_default();
            let value = from_seconds(seconds, request.display)?;
            Ok(DisplayRow {
                nuclide,
                half_life: round_to(value, DISPLAY_DECIMALS),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("{} nuclides matched", rows.len());
    Ok(QueryOutcome::Matched(rows))
}

/// 四舍五入到 `decimals` 位小数
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
