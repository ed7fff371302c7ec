//! # imgbatch 命令行入口
//!
//! ## 子命令
//! - `convert` - 图像格式转换（单图 / 文件夹）
//! - `rename`  - 批量重命名（预览 / 执行）

use clap::Parser;
use imgbatch::cli::Cli;
use imgbatch::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .format_timestamp(None)
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
