//! # explore 子命令 CLI 定义
//!
//! 交互式筛选会话：核素表只加载一次，每条交互命令重新计算一次查询
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/explore.rs`

use super::{BoundArgs, DataArgs};
use clap::Args;

/// explore 子命令参数
#[derive(Args, Debug)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub data: DataArgs,

    // 会话的初始区间与显示单位
    #[command(flatten)]
    pub bounds: BoundArgs,
}
