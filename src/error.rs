//! # 统一错误处理模块
//!
//! 定义 imgbatch 的所有错误类型，使用 `thiserror` 派生。
//! 公开操作从不向调用方抛出这些错误，而是在条目边界折叠进运行日志。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// imgbatch 统一错误类型
#[derive(Error, Debug)]
pub enum ToolError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to rename {from} -> {to}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 图像错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {format} image: {source}")]
    ImageEncode {
        format: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid pixel buffer: {0}")]
    InvalidPixelBuffer(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No image files found in folder '{folder}'")]
    NoFilesFound { folder: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ToolError>;
