//! # 数据模型模块
//!
//! 定义选项枚举、图像引用、重命名映射与运行日志。
//!
//! ## 依赖关系
//! - 被 `convert/`, `rename/`, `host.rs`, `commands/` 使用
//! - 子模块: options, image_ref, mapping, run_log

pub mod image_ref;
pub mod mapping;
pub mod options;
pub mod run_log;

pub use image_ref::{ImageRef, PixelBuffer};
pub use mapping::{RecordStatus, RenameMapping, RenamePair, RenameRecord};
pub use options::{
    ConvertMode, DateFormat, NamingPattern, ParseOptionError, RenameMode, SortBy, TargetFormat,
};
pub use run_log::{RunLog, SampleList, Status};
