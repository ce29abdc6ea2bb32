//! # nucx - 核素半衰期浏览工具
//!
//! 加载核素基础数据表，按半衰期区间（ka / Ma / Ga）筛选核素，
//! 并以指定单位显示或导出筛选结果。
//!
//! ## 子命令
//! - `filter`  - 一次性筛选并输出（终端表格 / HTML / CSV）
//! - `explore` - 交互式筛选会话
//! - `units`   - 时间单位换算表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据表与输入解析)
//!   │     ├── halflife/  (单位换算、区间筛选、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod halflife;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
