//! # convert 子命令 CLI 定义
//!
//! 单图或文件夹批量转换图像格式 (PNG / JPEG / WebP)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::convert::DEFAULT_QUALITY;
use crate::models::{ConvertMode, TargetFormat};

use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["image", "input"])))]
pub struct ConvertArgs {
    /// Target output format
    #[arg(short = 't', long, value_enum)]
    pub format: TargetFormat,

    /// Encoding quality (1-100, ignored for PNG)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Convert a single image file
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Input directory for batch conversion
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (single image mode: omit to convert without saving)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Recurse into subdirectories (batch mode)
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl ConvertArgs {
    /// 由输入参数推断转换模式
    pub fn mode(&self) -> ConvertMode {
        if self.image.is_some() {
            ConvertMode::SingleImage
        } else {
            ConvertMode::BatchFolder
        }
    }
}
