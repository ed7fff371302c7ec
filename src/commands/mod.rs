//! # 命令执行模块
//!
//! 实现各子命令的命令行执行逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `convert/`, `rename/`, `utils/`
//! - 子模块: convert, rename

pub mod convert;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Rename(args) => rename::execute(args),
    }
}
