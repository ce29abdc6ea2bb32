//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `halflife/`, `models/`, `utils/`
//! - 子模块: filter, explore, units

pub mod explore;
pub mod filter;
pub mod units;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::NuclideTable;
use crate::parsers;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Filter(args) => filter::execute(args),
        Commands::Explore(args) => explore::execute(args),
        Commands::Units(args) => units::execute(args),
    }
}

/// 加载核素表（带 spinner），每个进程只调用一次
///
/// `quiet` 时不向 stdout 输出状态行，便于管道输出 HTML/CSV。
fn load_table(path: &Path, quiet: bool) -> Result<NuclideTable> {
    let spinner = progress::create_spinner(&format!("Loading '{}'", path.display()));
    let result = parsers::load_table(path);
    spinner.finish_and_clear();

    let table = result?;
    if quiet {
        return Ok(table);
    }
    output::print_info(&format!(
        "Loaded {} nuclides from '{}' ({} with a measured half-life)",
        table.len(),
        path.display(),
        table.measured_count()
    ));
    Ok(table)
}
