//! # filter 命令实现
//!
//! 按半衰期区间筛选核素。
//!
//! ## 功能
//! - 加载核素表
//! - 上下界换算为秒并筛选
//! - 换算到显示单位
//! - 输出终端表格，或导出 HTML/CSV（文件或 stdout）
//!
//! ## 依赖关系
//! - 使用 `cli/filter.rs` 定义的参数
//! - 使用 `halflife/`
//! - 使用 `utils/output.rs`

use crate::cli::filter::{ExportFormat, FilterArgs};
use crate::error::Result;
use crate::halflife::export;
use crate::halflife::{run_query, FilterRequest, QueryOutcome};
use crate::utils::output;

/// 执行 filter 命令
pub fn execute(args: FilterArgs) -> Result<()> {
    let piped = args.format != ExportFormat::Table && args.output.is_none();
    if !piped {
        output::print_header("Nuclide Half-Life Filter");
    }

    let table = super::load_table(&args.data.data, piped)?;
    let request = args.bounds.request();
    let outcome = run_query(&table, &request)?;

    match (&args.output, args.format) {
        (None, ExportFormat::Table) => print_outcome(&outcome, &request),
        (None, format) => print!("{}", render(&outcome, &request, format)?),
        (Some(path), format) => {
            export::write_output(&render(&outcome, &request, format)?, path)?;
            output::print_success(&format!(
                "{} nuclide(s) written as {} to '{}'",
                outcome.len(),
                format,
                path.display()
            ));
        }
    }

    Ok(())
}

/// 按格式渲染查询结果；无数据时渲染为空表
pub fn render(outcome: &QueryOutcome<'_>, request: &FilterRequest, format: ExportFormat) -> Result<String> {
    let rows = match outcome {
        QueryOutcome::NoData => &[][..],
        QueryOutcome::Matched(rows) => rows.as_slice(),
    };

    match format {
        ExportFormat::Table => Ok(format!(
            "{}\n",
            export::to_terminal_table(rows, request.display)
        )),
        ExportFormat::Html => Ok(export::to_html_string(rows, request.display)),
        ExportFormat::Csv => export::to_csv_string(rows, request.display),
    }
}

/// 在终端打印查询结果，区分“无数据”与“无匹配”
pub fn print_outcome(outcome: &QueryOutcome<'_>, request: &FilterRequest) {
    match outcome {
        QueryOutcome::NoData => {
            output::print_warning("No nuclide data loaded.");
        }
        QueryOutcome::Matched(rows) => {
            output::print_info(&format!(
                "Half-life between {} and {}, shown in {}",
                request.lower, request.upper, request.display
            ));
            if request.bounds().is_inverted() {
                output::print_warning("Lower bound exceeds upper bound; no nuclide can match.");
            }
            println!("\n### Filtered Nuclides ({} shown)\n", rows.len());
            if rows.is_empty() {
                output::print_info("No nuclides match the current filter.");
            } else {
                println!("{}", export::to_terminal_table(rows, request.display));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halflife::{Quantity, TimeUnit};
    use crate::models::{Nuclide, NuclideTable};

    fn table() -> NuclideTable {
        NuclideTable::new(vec![
            Nuclide::new(92, 146, "U", Some(2.1e17)),
            Nuclide::new(6, 8, "C", Some(1.8e11)),
        ])
    }

    fn request() -> FilterRequest {
        FilterRequest {
            lower: Quantity::new(100.0, TimeUnit::MegaAnnum),
            upper: Quantity::new(10000.0, TimeUnit::MegaAnnum),
            display: TimeUnit::MegaAnnum,
        }
    }

    #[test]
    fn test_render_csv() {
        let table = table();
        let request = request();
        let outcome = run_query(&table, &request).unwrap();
        let text = render(&outcome, &request, ExportFormat::Csv).unwrap();
        assert_eq!(text, "nuclide,half_life_Ma\n238U,6654.498441\n");
    }

    #[test]
    fn test_render_html() {
        let table = table();
        let request = request();
        let outcome = run_query(&table, &request).unwrap();
        let html = render(&outcome, &request, ExportFormat::Html).unwrap();
        assert!(html.contains("<sup>238</sup>U"));
        assert!(!html.contains("<sup>14</sup>C"));
    }

    #[test]
    fn test_render_no_data_is_empty_table() {
        let table = NuclideTable::default();
        let request = request();
        let outcome = run_query(&table, &request).unwrap();
        let text = render(&outcome, &request, ExportFormat::Csv).unwrap();
        assert_eq!(text.trim(), "nuclide,half_life_Ma");
    }
}
