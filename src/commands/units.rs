//! # units 命令实现
//!
//! 显示时间单位换算表，或把一个给定值换算到秒与全部单位。
//!
//! ## 依赖关系
//! - 使用 `cli/units.rs` 定义的参数
//! - 使用 `halflife/units.rs`
//! - 使用 `utils/output.rs`

use crate::cli::units::UnitsArgs;
use crate::error::Result;
use crate::halflife::{from_seconds, seconds_per_unit, to_seconds, TimeUnit};
use crate::utils::output;

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// 换算系数表行
#[derive(Debug, Clone, Tabled)]
struct FactorRow {
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Seconds")]
    seconds: String,
}

/// 换算结果表行
#[derive(Debug, Clone, Tabled)]
struct ConversionRow {
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 units 命令
pub fn execute(args: UnitsArgs) -> Result<()> {
    output::print_header("Time Units (Julian year = 365.25 d)");

    let mut table = Table::new(factor_rows());
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(value) = args.value {
        let seconds = to_seconds(value, args.unit);
        output::print_info(&format!("{} {} = {:e} s", value, args.unit, seconds));

        let mut table = Table::new(conversion_rows(seconds)?);
        table.with(Style::rounded());
        println!("{}", table);
    }

    Ok(())
}

fn factor_rows() -> Vec<FactorRow> {
    TimeUnit::ALL
        .iter()
        .map(|&unit| FactorRow {
            unit: unit.symbol().to_string(),
            name: unit.long_name().to_string(),
            seconds: format!("{:e}", seconds_per_unit(unit)),
        })
        .collect()
}

fn conversion_rows(seconds: f64) -> Result<Vec<ConversionRow>> {
    TimeUnit::ALL
        .iter()
        .map(|&unit| {
            Ok(ConversionRow {
                unit: unit.symbol().to_string(),
                value: format!("{}", from_seconds(seconds, unit)?),
            })
        })
        .collect()
}
