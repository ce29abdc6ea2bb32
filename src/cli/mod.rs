//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `filter`: 按半衰期区间筛选核素并输出
//! - `explore`: 交互式筛选会话
//! - `units`: 显示时间单位换算系数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: filter, explore, units

pub mod explore;
pub mod filter;
pub mod units;

use crate::halflife::{FilterRequest, Quantity, TimeUnit};
use crate::parsers::quantity::parse_bound_value;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// nucx - 核素半衰期浏览工具
#[derive(Parser)]
#[command(name = "nucx")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Nuclide half-life explorer: filter nuclides by half-life range", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Filter nuclides by half-life range and print or export the result
    Filter(filter::FilterArgs),

    /// Start an interactive filtering session
    Explore(explore::ExploreArgs),

    /// Show the conversion factors between ka / Ma / Ga and seconds
    Units(units::UnitsArgs),
}

// ─────────────────────────────────────────────────────────────
// 共享参数
// ─────────────────────────────────────────────────────────────

/// 核素数据表参数
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Path to the nuclide table (CSV with columns z, n, symbol, "half life (s)")
    #[arg(short, long, env = "NUCX_DATA")]
    pub data: PathBuf,
}

/// 半衰期区间参数
#[derive(Args, Debug)]
pub struct BoundArgs {
    /// Lower half-life bound (in --lower-unit)
    #[arg(long, default_value_t = 0.1, value_parser = parse_bound)]
    pub lower: f64,

    /// Unit of the lower bound
    #[arg(long, value_enum, default_value_t = TimeUnit::MegaAnnum)]
    pub lower_unit: TimeUnit,

    /// Upper half-life bound (in --upper-unit)
    #[arg(long, default_value_t = 5000.0, value_parser = parse_bound)]
    pub upper: f64,

    /// Unit of the upper bound
    #[arg(long, value_enum, default_value_t = TimeUnit::MegaAnnum)]
    pub upper_unit: TimeUnit,

    /// Unit used to display half-lives
    #[arg(long, value_enum, default_value_t = TimeUnit::MegaAnnum)]
    pub display: TimeUnit,
}

impl BoundArgs {
    /// 构造查询参数
    pub fn request(&self) -> FilterRequest {
        FilterRequest {
            lower: Quantity::new(self.lower, self.lower_unit),
            upper: Quantity::new(self.upper, self.upper_unit),
            display: self.display,
        }
    }
}

/// 解析上下界数值（有限非负数）
pub fn parse_bound(input: &str) -> Result<f64, String> {
    parse_bound_value(input).map_err(|e| e.to_string())
}
