//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 收集匹配扩展名的文件列表
//! - 顺序处理，逐项隔离错误
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `convert/` 和 `rename/` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
