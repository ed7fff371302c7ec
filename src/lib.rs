//! # imgbatch - 图像批量格式转换与重命名
//!
//! 两个互相独立、无共享状态的操作，每次调用只返回一段文本日志：
//! - [`convert::convert_format`] - 单图或文件夹批量转换为 PNG / JPEG / WebP
//! - [`rename::rename_images`] - 按命名模式预览或执行批量重命名
//!
//! 节点式宿主通过 [`host`] 以字符串参数调用；命令行由 `main.rs` 提供。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── host.rs     (宿主边界：字符串选项 → 枚举)
//!   ├── convert/    (格式转换)
//!   ├── rename/     (批量重命名：命名、计划、执行)
//!   ├── batch/      (文件收集与逐项执行)
//!   ├── models/     (选项、图像引用、映射、运行日志)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (输出、进度条、路径)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod convert;
pub mod error;
pub mod host;
pub mod models;
pub mod rename;
pub mod utils;
