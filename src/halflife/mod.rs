//! # 半衰期筛选模块
//!
//! 单位换算、区间筛选、查询处理与结果导出。
//!
//! ## 计算流程
//! ```text
//! FilterRequest (lower qty, upper qty, display unit)
//!   │  units::to_seconds
//!   ▼
//! BoundPair [lo_s, hi_s]
//!   │  filter::filter_by_half_life
//!   ▼
//! Vec<&Nuclide>
//!   │  units::from_seconds
//!   ▼
//! QueryOutcome ──▶ export (table / html / csv)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/`
//! - 子模块: units, filter, query, export

pub mod export;
pub mod filter;
pub mod query;
pub mod units;

pub use query::{run_query, FilterRequest, QueryOutcome};
pub use units::{from_seconds, seconds_per_unit, to_seconds, Quantity, TimeUnit};
