//! # 美化输出工具
//!
//! 提供统一的终端输出样式。运行日志按状态标记着色后打印。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印运行日志：首行按状态着色，其余行原样输出
pub fn print_run_log(log: &str) {
    let mut lines = log.lines();
    if let Some(first) = lines.next() {
        if first.contains("✗") {
            print_error(first);
        } else if first.contains("⚠") {
            print_warning(first);
        } else {
            print_success(first);
        }
    }
    for line in lines {
        println!("    {}", line);
    }
}
