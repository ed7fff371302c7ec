//! # 工具函数模块
//!
//! 提供美化输出、进度条与路径处理等工具。
//!
//! ## 依赖关系
//! - 被 `batch/`, `convert/`, `rename/`, `commands/` 使用
//! - 子模块: output, paths, progress

pub mod output;
pub mod paths;
pub mod progress;
