//! # 重命名计划
//!
//! 在任何文件系统变更之前，一次性计算完整的 (源, 目标) 映射。
//! 预览与执行共用同一份计划。
//!
//! ## 依赖关系
//! - 被 `rename/mod.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `rename/naming.rs` 生成名称

use crate::batch::collector::{FileCollector, DEFAULT_RENAME_EXTENSIONS};
use crate::error::{Result, ToolError};
use crate::models::{RenameMapping, SortBy};
use crate::rename::naming::{run_timestamp, NamingContext};

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// 计算重命名映射
///
/// 文件夹不存在返回 [`ToolError::DirectoryNotFound`]，
/// 没有匹配文件返回 [`ToolError::NoFilesFound`]。
pub fn build_mapping(
    folder: &Path,
    ctx: &NamingContext,
    run_start: DateTime<Local>,
) -> Result<RenameMapping> {
    if folder.as_os_str().is_empty() || !folder.is_dir() {
        return Err(ToolError::DirectoryNotFound {
            path: folder.display().to_string(),
        });
    }

    let mut files = FileCollector::new(folder)
        .with_extensions(&ctx.target_extensions, DEFAULT_RENAME_EXTENSIONS)
        .recursive(ctx.recursive)
        .collect();

    if files.is_empty() {
        return Err(ToolError::NoFilesFound {
            folder: folder.display().to_string(),
        });
    }

    sort_files(&mut files, ctx.sort_by);

    let shared_timestamp = if ctx.needs_timestamp() {
        run_timestamp(run_start, ctx.date_format)
    } else {
        String::new()
    };

    let mut mapping = RenameMapping::default();
    for (index, source) in files.into_iter().enumerate() {
        let original = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let base = ctx.base_name(index, &original, &shared_timestamp, run_start);
        let name = ctx.file_name(&base, &extension);

        let directory = if ctx.preserve_subfolders {
            source.parent().unwrap_or(folder).to_path_buf()
        } else {
            folder.to_path_buf()
        };

        mapping.push(source, directory.join(name));
    }

    Ok(mapping)
}

/// 按选定键升序排序；相同键保持路径顺序
pub fn sort_files(files: &mut [PathBuf], sort_by: SortBy) {
    files.sort_by_key(|p| p.to_string_lossy().to_string());
    match sort_by {
        SortBy::Name => {}
        SortBy::ModifiedTime => {
            files.sort_by_cached_key(|p| fs::metadata(p).and_then(|m| m.modified()).ok())
        }
        SortBy::Size => files.sort_by_cached_key(|p| fs::metadata(p).map(|m| m.len()).unwrap_or(0)),
    }
}
