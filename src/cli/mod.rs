//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 图像格式转换（单图 / 文件夹）
//! - `rename`: 批量重命名（预览 / 执行）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, rename

pub mod convert;
pub mod rename;

use clap::{Parser, Subcommand};

/// imgbatch - 图像批量格式转换与重命名工具
#[derive(Parser)]
#[command(name = "imgbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch image format conversion and renaming toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "IMGBATCH_LOG", default_value = "warn")]
    pub log_level: log::LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single image or a folder of images to PNG / JPEG / WebP
    Convert(convert::ConvertArgs),

    /// Rename the images in a folder according to a naming pattern
    Rename(rename::RenameArgs),
}
