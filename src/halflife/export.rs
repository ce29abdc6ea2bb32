//! # 筛选结果导出
//!
//! 将查询结果渲染为终端表格、HTML 表格或 CSV。
//!
//! ## 支持格式
//! - 终端: `tabled` 表格，核素标签用上标质量数（`²³⁸U`）
//! - HTML: `<sup>238</sup>U` 标签的 `<table>`
//! - CSV: 纯文本标签（`238U`）
//!
//! ## 依赖关系
//! - 被 `commands/filter.rs`, `commands/explore.rs` 调用
//! - 使用 `halflife/query.rs` 的 DisplayRow
//! - 使用 `csv` 库写入 CSV

use crate::error::{NucxError, Result};
use crate::halflife::query::{DisplayRow, DISPLAY_DECIMALS};
use crate::halflife::units::TimeUnit;
use crate::models::nuclide::escape_html;

use std::fs;
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

/// 半衰期列标题，例如 `Half-life (Ma)`
pub fn half_life_header(unit: TimeUnit) -> String {
    format!("Half-life ({})", unit)
}

fn format_value(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS as usize, value)
}

/// 渲染终端表格
pub fn to_terminal_table(rows: &[DisplayRow<'_>], unit: TimeUnit) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Nuclide".to_string(), half_life_header(unit)]);
    for row in rows {
        builder.push_record([row.nuclide.superscript_label(), format_value(row.half_life)]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// 渲染 HTML 表格
pub fn to_html_string(rows: &[DisplayRow<'_>], unit: TimeUnit) -> String {
    let mut html = String::new();
    html.push_str("<table border=\"1\" class=\"dataframe\">\n");
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    html.push_str("      <th>Nuclide</th>\n");
    html.push_str(&format!(
        "      <th>{}</th>\n",
        escape_html(&half_life_header(unit))
    ));
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in rows {
        html.push_str("    <tr>\n");
        html.push_str(&format!("      <td>{}</td>\n", row.nuclide.html_label()));
        html.push_str(&format!("      <td>{}</td>\n", format_value(row.half_life)));
        html.push_str("    </tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

/// 渲染 CSV 文本
pub fn to_csv_string(rows: &[DisplayRow<'_>], unit: TimeUnit) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["nuclide".to_string(), format!("half_life_{}", unit)])?;
    for row in rows {
        wtr.write_record([row.nuclide.label(), format_value(row.half_life)])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| NucxError::CsvError(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 写入文本文件
pub fn write_output(content: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, content).map_err(|e| NucxError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
