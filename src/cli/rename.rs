//! # rename 子命令 CLI 定义
//!
//! 按命名模式批量重命名文件夹中的图像，默认只预览
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use crate::models::{DateFormat, NamingPattern, RenameMode, SortBy};
use crate::rename::NamingContext;

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Folder containing the images to rename
    pub folder: PathBuf,

    /// Preview the renames or execute them
    #[arg(short, long, value_enum, default_value = "preview")]
    pub mode: RenameMode,

    /// Naming pattern
    #[arg(short, long, value_enum, default_value = "sequence")]
    pub pattern: NamingPattern,

    /// Name template ({number}, {timestamp}, {original})
    #[arg(short, long, default_value = "image_{number}")]
    pub template: String,

    /// First sequence number
    #[arg(long, default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(0..=10_000))]
    pub start: u32,

    /// Zero-padded width of the sequence number
    #[arg(long, default_value_t = 3,
          value_parser = clap::value_parser!(u8).range(1..=10))]
    pub digits: u8,

    /// Prefix for the prefix-original pattern
    #[arg(long, default_value = "img_")]
    pub prefix: String,

    /// Suffix for the suffix-original pattern
    #[arg(long, default_value = "_processed")]
    pub suffix: String,

    /// Use .jpg instead of keeping the original extension
    #[arg(long, default_value_t = false)]
    pub replace_extension: bool,

    /// Move renamed files from subfolders into the root folder
    #[arg(long, default_value_t = false)]
    pub flatten: bool,

    /// Sort order used for numbering
    #[arg(long, value_enum, default_value = "name")]
    pub sort_by: SortBy,

    /// Timestamp format
    #[arg(long, value_enum, default_value = "yyyymmdd")]
    pub date_format: DateFormat,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Comma-separated list of extensions to include
    #[arg(short, long, default_value = ".jpg,.jpeg,.png,.webp,.gif,.bmp")]
    pub extensions: String,

    /// Write the rename plan / results to a CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl RenameArgs {
    /// 构建命名上下文
    pub fn naming_context(&self) -> NamingContext {
        NamingContext {
            pattern: self.pattern,
            template: self.template.clone(),
            start_number: self.start,
            digit_count: self.digits as usize,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            preserve_extension: !self.replace_extension,
            preserve_subfolders: !self.flatten,
            sort_by: self.sort_by,
            date_format: self.date_format,
            recursive: self.recursive,
            target_extensions: self.extensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_defaults_match_naming_context() {
        let cli = Cli::try_parse_from(["imgbatch", "rename", "photos"]).unwrap();
        let Commands::Rename(args) = cli.command else {
            panic!("expected rename");
        };
        assert_eq!(args.mode, RenameMode::Preview);
        assert_eq!(args.naming_context(), NamingContext::default());
    }

    #[test]
    fn test_flags_map_to_context() {
        let cli = Cli::try_parse_from([
            "imgbatch",
            "rename",
            "photos",
            "--mode",
            "execute",
            "--pattern",
            "custom",
            "--date-format",
            "yyyymmdd-hhmmss",
            "--flatten",
            "--replace-extension",
            "--sort-by",
            "modified-time",
        ])
        .unwrap();
        let Commands::Rename(args) = cli.command else {
            panic!("expected rename");
        };
        let ctx = args.naming_context();
        assert_eq!(ctx.pattern, NamingPattern::Custom);
        assert_eq!(ctx.date_format, DateFormat::DateTime);
        assert_eq!(ctx.sort_by, SortBy::ModifiedTime);
        assert!(!ctx.preserve_subfolders);
        assert!(!ctx.preserve_extension);
    }

    #[test]
    fn test_digits_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["imgbatch", "rename", "p", "--digits", "11"]).is_err());
    }
}
