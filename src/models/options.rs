//! # 选项枚举
//!
//! 将宿主传入的字符串选项表示为封闭的枚举。
//! 字符串只在边界处（`FromStr`）翻译一次，内部一律使用枚举。
//! 兼容英文名称与原节点的中文显示名称。
//!
//! ## 依赖关系
//! - 被 `cli/`, `convert/`, `rename/`, `host.rs` 使用
//! - 使用 `clap::ValueEnum` 供命令行直接解析

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 无法识别的选项字符串
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// 归一化：去掉空白、下划线、连字符并转小写
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// ─────────────────────────────────────────────────────────────
// 格式转换选项
// ─────────────────────────────────────────────────────────────

/// 目标图像格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TargetFormat {
    /// Lossless PNG (quality ignored)
    Png,
    /// JPEG (alpha channel is discarded)
    Jpeg,
    /// WebP
    Webp,
}

impl TargetFormat {
    /// 输出文件扩展名（含点号）
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Png => ".png",
            TargetFormat::Jpeg => ".jpg",
            TargetFormat::Webp => ".webp",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetFormat::Png => write!(f, "PNG"),
            TargetFormat::Jpeg => write!(f, "JPEG"),
            TargetFormat::Webp => write!(f, "WEBP"),
        }
    }
}

impl FromStr for TargetFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "png" => Ok(TargetFormat::Png),
            "jpeg" | "jpg" => Ok(TargetFormat::Jpeg),
            "webp" => Ok(TargetFormat::Webp),
            _ => Err(ParseOptionError::new("format", s)),
        }
    }
}

/// 格式转换模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    SingleImage,
    BatchFolder,
}

impl fmt::Display for ConvertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertMode::SingleImage => write!(f, "Single Image"),
            ConvertMode::BatchFolder => write!(f, "Batch Folder"),
        }
    }
}

impl FromStr for ConvertMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "singleimage" | "single" | "单张图像处理" => Ok(ConvertMode::SingleImage),
            "batchfolder" | "batch" | "文件夹批处理" => Ok(ConvertMode::BatchFolder),
            _ => Err(ParseOptionError::new("mode", s)),
        }
    }
}

/// 解析 Yes/No 风格的开关
pub fn parse_flag(s: &str) -> Result<bool, ParseOptionError> {
    match normalize(s).as_str() {
        "yes" | "y" | "true" | "是" => Ok(true),
        "no" | "n" | "false" | "否" => Ok(false),
        _ => Err(ParseOptionError::new("flag", s)),
    }
}

// ─────────────────────────────────────────────────────────────
// 批量重命名选项
// ─────────────────────────────────────────────────────────────

/// 重命名模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RenameMode {
    /// Only show the planned renames
    Preview,
    /// Apply the planned renames
    Execute,
}

impl fmt::Display for RenameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameMode::Preview => write!(f, "Preview"),
            RenameMode::Execute => write!(f, "Execute"),
        }
    }
}

impl FromStr for RenameMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "preview" | "预览重命名" => Ok(RenameMode::Preview),
            "execute" | "批量重命名" => Ok(RenameMode::Execute),
            _ => Err(ParseOptionError::new("mode", s)),
        }
    }
}

/// 命名模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum NamingPattern {
    /// Template with a zero-padded `{number}`
    Sequence,
    /// Template with `{timestamp}` (and optionally `{number}`)
    Timestamp,
    /// Prefix + original name
    PrefixOriginal,
    /// Original name + suffix
    SuffixOriginal,
    /// Template with any of `{number}`, `{timestamp}`, `{original}`
    Custom,
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingPattern::Sequence => write!(f, "Sequence"),
            NamingPattern::Timestamp => write!(f, "Timestamp"),
            NamingPattern::PrefixOriginal => write!(f, "PrefixOriginal"),
            NamingPattern::SuffixOriginal => write!(f, "SuffixOriginal"),
            NamingPattern::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for NamingPattern {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sequence" | "序号" => Ok(NamingPattern::Sequence),
            "timestamp" | "时间戳" => Ok(NamingPattern::Timestamp),
            "prefixoriginal" | "原名+前缀" => Ok(NamingPattern::PrefixOriginal),
            "suffixoriginal" | "原名+后缀" => Ok(NamingPattern::SuffixOriginal),
            "custom" | "完全自定义" => Ok(NamingPattern::Custom),
            _ => Err(ParseOptionError::new("naming pattern", s)),
        }
    }
}

/// 排序依据（均为升序）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Lexicographic path
    #[default]
    Name,
    /// Modification time
    ModifiedTime,
    /// File size in bytes
    Size,
}

impl FromStr for SortBy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "name" | "名称" => Ok(SortBy::Name),
            "modifiedtime" | "mtime" | "修改时间" => Ok(SortBy::ModifiedTime),
            "size" | "文件大小" => Ok(SortBy::Size),
            _ => Err(ParseOptionError::new("sort key", s)),
        }
    }
}

/// 时间戳格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// YYYYMMDD
    #[default]
    #[value(name = "yyyymmdd")]
    Date,
    /// YYYYMMDD_HHMMSS
    #[value(name = "yyyymmdd-hhmmss")]
    DateTime,
}

impl DateFormat {
    /// chrono 格式串
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Date => "%Y%m%d",
            DateFormat::DateTime => "%Y%m%d_%H%M%S",
        }
    }
}

impl FromStr for DateFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "yyyymmdd" => Ok(DateFormat::Date),
            "yyyymmddhhmmss" => Ok(DateFormat::DateTime),
            _ => Err(ParseOptionError::new("date format", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_format_aliases() {
        assert_eq!("PNG".parse::<TargetFormat>().unwrap(), TargetFormat::Png);
        assert_eq!("WebP".parse::<TargetFormat>().unwrap(), TargetFormat::Webp);
        assert_eq!("jpg".parse::<TargetFormat>().unwrap(), TargetFormat::Jpeg);
        assert!("gif".parse::<TargetFormat>().is_err());
        assert_eq!(TargetFormat::Jpeg.extension(), ".jpg");
    }

    #[test]
    fn test_display_strings_of_original_node() {
        assert_eq!(
            "文件夹批处理".parse::<ConvertMode>().unwrap(),
            ConvertMode::BatchFolder
        );
        assert_eq!(
            "原名+后缀".parse::<NamingPattern>().unwrap(),
            NamingPattern::SuffixOriginal
        );
        assert_eq!("修改时间".parse::<SortBy>().unwrap(), SortBy::ModifiedTime);
        assert!(parse_flag("是").unwrap());
        assert!(!parse_flag("No").unwrap());
    }

    #[test]
    fn test_date_format_names() {
        assert_eq!(
            "YYYYMMDD_HHMMSS".parse::<DateFormat>().unwrap(),
            DateFormat::DateTime
        );
        assert_eq!("YYYYMMDD".parse::<DateFormat>().unwrap(), DateFormat::Date);
        assert_eq!(DateFormat::DateTime.pattern(), "%Y%m%d_%H%M%S");
    }

    #[test]
    fn test_unknown_mode_names_value() {
        let err = "Rollback".parse::<RenameMode>().unwrap_err();
        assert_eq!(err.value, "Rollback");
        assert_eq!(err.to_string(), "Unknown mode: 'Rollback'");
    }
}
