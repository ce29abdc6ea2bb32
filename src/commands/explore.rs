//! # explore 命令实现
//!
//! 交互式筛选会话。核素表在启动时加载一次，之后每条命令都以当前参数
//! 对同一张只读表重新执行一次完整查询。
//!
//! ## 会话命令
//! ```text
//! lower <value> [unit]    设置下界，例如 `lower 100 Ma` 或 `lower 50`
//! upper <value> [unit]    设置上界
//! display <unit>          设置显示单位 (ka / Ma / Ga)
//! show                    重新显示当前结果
//! status                  显示当前参数
//! reset                   恢复默认参数
//! help                    显示帮助
//! quit | exit             退出
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/explore.rs` 定义的参数
//! - 使用 `halflife/`, `parsers/quantity.rs`
//! - 使用 `commands/filter.rs` 的结果打印

use crate::cli::explore::ExploreArgs;
use crate::error::{NucxError, Result};
use crate::halflife::{run_query, FilterRequest, Quantity, TimeUnit};
use crate::models::NuclideTable;
use crate::parsers::quantity::{parse_bound_value, parse_quantity};
use crate::utils::output;

use std::io::{self, BufRead};

/// 会话命令
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreCommand {
    /// 设置下界；unit 为 None 时沿用当前单位
    Lower(f64, Option<TimeUnit>),
    /// 设置上界；unit 为 None 时沿用当前单位
    Upper(f64, Option<TimeUnit>),
    Display(TimeUnit),
    Show,
    Status,
    Reset,
    Help,
    Quit,
}

/// 命令执行后的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 参数已变化或请求显示，需要重新查询
    Rerun,
    Status,
    Help,
    Quit,
}

/// 解析一行会话输入；空行返回 None
pub fn parse_command(line: &str) -> Result<Option<ExploreCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let cmd = match head.to_lowercase().as_str() {
        "lower" | "lo" => {
            let (value, unit) = parse_bound_input(rest)?;
            ExploreCommand::Lower(value, unit)
        }
        "upper" | "hi" => {
            let (value, unit) = parse_bound_input(rest)?;
            ExploreCommand::Upper(value, unit)
        }
        "display" | "unit" => {
            if rest.is_empty() {
                return Err(NucxError::InvalidArgument(
                    "display requires a unit (ka, Ma or Ga)".to_string(),
                ));
            }
            ExploreCommand::Display(rest.parse()?)
        }
        "show" => ExploreCommand::Show,
        "status" => ExploreCommand::Status,
        "reset" => ExploreCommand::Reset,
        "help" | "?" => ExploreCommand::Help,
        "quit" | "exit" | "q" => ExploreCommand::Quit,
        other => {
            return Err(NucxError::InvalidArgument(format!(
                "unknown command '{}' (type 'help')",
                other
            )))
        }
    };

    Ok(Some(cmd))
}

/// `100 Ma` → (100, Some(Ma))；`100` → (100, None)
fn parse_bound_input(rest: &str) -> Result<(f64, Option<TimeUnit>)> {
    if rest.is_empty() {
        return Err(NucxError::InvalidArgument(
            "expected a value, e.g. '100 Ma'".to_string(),
        ));
    }
    if rest.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        let quantity = parse_quantity(rest)?;
        Ok((quantity.value, Some(quantity.unit)))
    } else {
        Ok((parse_bound_value(rest)?, None))
    }
}

/// 交互会话状态
pub struct Session<'a> {
    table: &'a NuclideTable,
    initial: FilterRequest,
    pub request: FilterRequest,
}

impl<'a> Session<'a> {
    pub fn new(table: &'a NuclideTable, request: FilterRequest) -> Self {
        Session {
            table,
            initial: request,
            request,
        }
    }

    /// 应用一条命令
    pub fn apply(&mut self, cmd: ExploreCommand) -> Step {
        match cmd {
            ExploreCommand::Lower(value, unit) => {
                let unit = unit.unwrap_or(self.request.lower.unit);
                self.request.lower = Quantity::new(value, unit);
                Step::Rerun
            }
            ExploreCommand::Upper(value, unit) => {
                let unit = unit.unwrap_or(self.request.upper.unit);
                self.request.upper = Quantity::new(value, unit);
                Step::Rerun
            }
            ExploreCommand::Display(unit) => {
                self.request.display = unit;
                Step::Rerun
            }
            ExploreCommand::Reset => {
                self.request = self.initial;
                Step::Rerun
            }
            ExploreCommand::Show => Step::Rerun,
            ExploreCommand::Status => Step::Status,
            ExploreCommand::Help => Step::Help,
            ExploreCommand::Quit => Step::Quit,
        }
    }

    /// 以当前参数重新查询并打印
    pub fn refresh(&self) -> Result<()> {
        let outcome = run_query(self.table, &self.request)?;
        super::filter::print_outcome(&outcome, &self.request);
        Ok(())
    }

    fn print_status(&self) {
        let bounds = self.request.bounds();
        output::print_info(&format!(
            "lower = {} ({:e} s), upper = {} ({:e} s), display = {}",
            self.request.lower, bounds.lo_s, self.request.upper, bounds.hi_s, self.request.display
        ));
    }
}

/// 执行 explore 命令
pub fn execute(args: ExploreArgs) -> Result<()> {
    output::print_header("Nuclide Half-Life Explorer");

    let table = super::load_table(&args.data.data, false)?;
    let mut session = Session::new(&table, args.bounds.request());

    print_help();
    session.refresh()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        output::print_prompt();
        let line = match lines.next() {
            Some(line) => line.map_err(|e| NucxError::FileReadError {
                path: "<stdin>".to_string(),
                source: e,
            })?,
            None => break,
        };

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                output::print_error(&e.to_string());
                continue;
            }
        };

        match session.apply(cmd) {
            Step::Rerun => {
                if let Err(e) = session.refresh() {
                    output::print_error(&e.to_string());
                }
            }
            Step::Status => session.print_status(),
            Step::Help => print_help(),
            Step::Quit => break,
        }
    }

    output::print_done("Session closed");
    Ok(())
}

fn print_help() {
    output::print_info("Commands:");
    println!("  lower <value> [unit]   set the lower bound (e.g. 'lower 100 Ma')");
    println!("  upper <value> [unit]   set the upper bound (e.g. 'upper 1.5 Ga')");
    println!("  display <unit>         display half-lives in ka, Ma or Ga");
    println!("  show | status | reset | help | quit");
}
