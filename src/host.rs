//! # 宿主边界
//!
//! 节点式宿主以一组带默认值的具名字符串参数调用两个操作，
//! 每次调用只返回一段文本日志。本模块负责把字符串选项翻译成枚举，
//! 把数值参数截断到合法区间，然后交给 `convert/` 与 `rename/`。
//!
//! 无法识别的选项字符串不会报错，而是返回一条指明该值的警告日志，且不触碰文件系统。
//!
//! ## 依赖关系
//! - 使用 `models/options.rs` 解析选项
//! - 调用 `convert::convert_format` 与 `rename::rename_images`

use crate::convert::{self, ConversionSpec, ConvertRequest, DEFAULT_QUALITY};
use crate::models::options::{parse_flag, ParseOptionError};
use crate::models::{
    ConvertMode, DateFormat, ImageRef, NamingPattern, RenameMode, RunLog, SortBy, Status,
    TargetFormat,
};
use crate::rename::{self, NamingContext, RenameRequest};

use std::path::PathBuf;

const CONVERTER_TAG: &str = "Format Converter";
const RENAMER_TAG: &str = "Image Rename";

/// 字符串选项解析失败时的统一警告
fn option_warning(tag: &str, err: ParseOptionError) -> String {
    RunLog::single(tag, Status::Warn, err.to_string())
}

/// 空字符串视为未提供
fn optional_path(s: &str) -> Option<PathBuf> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

// ─────────────────────────────────────────────────────────────
// convertFormat
// ─────────────────────────────────────────────────────────────

/// 格式转换节点参数
#[derive(Debug, Clone)]
pub struct ConvertFormatParams {
    pub format: String,
    pub quality: i64,
    pub mode: String,
    pub image: Option<ImageRef>,
    pub input_folder: String,
    pub output_folder: String,
    pub recursive: String,
}

impl Default for ConvertFormatParams {
    fn default() -> Self {
        ConvertFormatParams {
            format: "PNG".to_string(),
            quality: DEFAULT_QUALITY as i64,
            mode: "SingleImage".to_string(),
            image: None,
            input_folder: String::new(),
            output_folder: String::new(),
            recursive: "No".to_string(),
        }
    }
}

/// convertFormat：始终返回日志文本
pub fn convert_format(params: &ConvertFormatParams) -> String {
    let format = match params.format.parse::<TargetFormat>() {
        Ok(f) => f,
        Err(e) => return option_warning(CONVERTER_TAG, e),
    };
    let mode = match params.mode.parse::<ConvertMode>() {
        Ok(m) => m,
        Err(e) => return option_warning(CONVERTER_TAG, e),
    };
    let recursive = match parse_flag(&params.recursive) {
        Ok(r) => r,
        Err(e) => return option_warning(CONVERTER_TAG, e),
    };

    let quality = params.quality.clamp(1, 100) as u8;
    let mut request = ConvertRequest::new(mode, ConversionSpec::new(format, quality));
    request.image = params.image.clone();
    request.input_folder = optional_path(&params.input_folder);
    request.output_folder = optional_path(&params.output_folder);
    request.recursive = recursive;

    convert::convert_format(&request)
}

// ─────────────────────────────────────────────────────────────
// renameImages
// ─────────────────────────────────────────────────────────────

/// 批量重命名节点参数
#[derive(Debug, Clone)]
pub struct RenameImagesParams {
    pub mode: String,
    pub naming_pattern: String,
    pub folder_path: String,
    pub name_template: String,
    pub start_number: i64,
    pub digit_count: i64,
    pub prefix: String,
    pub suffix: String,
    pub preserve_extension: String,
    pub preserve_subfolders: String,
    pub sort_by: String,
    pub date_format: String,
    pub recursive: String,
    pub target_extensions: String,
}

impl Default for RenameImagesParams {
    fn default() -> Self {
        RenameImagesParams {
            mode: "Preview".to_string(),
            naming_pattern: "Sequence".to_string(),
            folder_path: String::new(),
            name_template: "image_{number}".to_string(),
            start_number: 1,
            digit_count: 3,
            prefix: "img_".to_string(),
            suffix: "_processed".to_string(),
            preserve_extension: "Yes".to_string(),
            preserve_subfolders: "Yes".to_string(),
            sort_by: "Name".to_string(),
            date_format: "YYYYMMDD".to_string(),
            recursive: "No".to_string(),
            target_extensions: ".jpg,.jpeg,.png,.webp,.gif,.bmp".to_string(),
        }
    }
}

impl RenameImagesParams {
    /// 解析为类型化的请求
    ///
    /// 模式最先解析，无法识别的模式总是优先报告。
    pub fn to_request(&self) -> Result<RenameRequest, ParseOptionError> {
        let mode = self.mode.parse::<RenameMode>()?;
        let naming = NamingContext {
            pattern: self.naming_pattern.parse::<NamingPattern>()?,
            template: self.name_template.clone(),
            start_number: self.start_number.clamp(0, 10_000) as u32,
            digit_count: self.digit_count.clamp(1, 10) as usize,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            preserve_extension: parse_flag(&self.preserve_extension)?,
            preserve_subfolders: parse_flag(&self.preserve_subfolders)?,
            sort_by: self.sort_by.parse::<SortBy>()?,
            date_format: self.date_format.parse::<DateFormat>()?,
            recursive: parse_flag(&self.recursive)?,
            target_extensions: self.target_extensions.clone(),
        };
        Ok(RenameRequest::new(mode, self.folder_path.trim(), naming))
    }
}

/// renameImages：始终返回日志文本
pub fn rename_images(params: &RenameImagesParams) -> String {
    match params.to_request() {
        Ok(request) => rename::rename_images(&request),
        Err(e) => option_warning(RENAMER_TAG, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PixelBuffer;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_rename_mode_is_warning_without_mutation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.png"), b"x").unwrap();

        let params = RenameImagesParams {
            mode: "Rollback".to_string(),
            folder_path: tmp.path().display().to_string(),
            ..RenameImagesParams::default()
        };
        let log = rename_images(&params);

        assert!(log.contains("⚠ WARNING"), "{}", log);
        assert!(log.contains("Rollback"));
        assert!(tmp.path().join("a.png").exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unknown_mode_reported_before_other_options() {
        let params = RenameImagesParams {
            mode: "Rollback".to_string(),
            naming_pattern: "Random".to_string(),
            sort_by: "Color".to_string(),
            folder_path: "/tmp".to_string(),
            ..RenameImagesParams::default()
        };
        let log = rename_images(&params);
        assert!(log.contains("'Rollback'"), "{}", log);
        assert!(!log.contains("Random"));
    }

    #[test]
    fn test_original_display_strings_execute() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("cat.png"), b"x").unwrap();

        let params = RenameImagesParams {
            mode: "批量重命名".to_string(),
            naming_pattern: "原名+前缀".to_string(),
            folder_path: tmp.path().display().to_string(),
            preserve_extension: "是".to_string(),
            ..RenameImagesParams::default()
        };
        let log = rename_images(&params);

        assert!(log.contains("renamed 1 file(s)"), "{}", log);
        assert!(tmp.path().join("img_cat.png").exists());
    }

    #[test]
    fn test_numeric_parameters_are_clamped() {
        let params = RenameImagesParams {
            start_number: -5,
            digit_count: 99,
            folder_path: "/tmp".to_string(),
            ..RenameImagesParams::default()
        };
        let request = params.to_request().unwrap();
        assert_eq!(request.naming.start_number, 0);
        assert_eq!(request.naming.digit_count, 10);
    }

    #[test]
    fn test_convert_single_via_host() {
        let tmp = TempDir::new().unwrap();
        let buffer = PixelBuffer::new(2, 2, 4, vec![0.5; 16]);

        let params = ConvertFormatParams {
            format: "JPEG".to_string(),
            quality: 500,
            image: Some(buffer.try_into().unwrap()),
            output_folder: tmp.path().display().to_string(),
            ..ConvertFormatParams::default()
        };
        let log = convert_format(&params);

        assert!(log.contains("quality: 100"), "{}", log);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_convert_unknown_format_warns() {
        let params = ConvertFormatParams {
            format: "AVIF".to_string(),
            ..ConvertFormatParams::default()
        };
        let log = convert_format(&params);
        assert!(log.contains("Unknown format: 'AVIF'"), "{}", log);
    }

    #[test]
    fn test_convert_batch_without_folders_fails() {
        let params = ConvertFormatParams {
            mode: "BatchFolder".to_string(),
            recursive: "Yes".to_string(),
            ..ConvertFormatParams::default()
        };
        let log = convert_format(&params);
        assert!(log.starts_with("[Batch Folder] ✗ FAILED"), "{}", log);
    }
}
