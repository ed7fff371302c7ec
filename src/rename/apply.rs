//! # 执行重命名
//!
//! 按计划逐个重命名，绝不覆盖已存在的其他文件。
//!
//! ## 流程
//! 1. 创建所有缺失的目标目录；失败的目录记下来，其下的文件计为失败
//! 2. 源与目标相同 → 无需处理（计入成功）
//! 3. 目标已存在 → 依次尝试 `_1`, `_2`, … 直到找到空闲名称
//! 4. 单个文件失败只计数，不中断
//!
//! ## 依赖关系
//! - 被 `rename/mod.rs` 调用
//! - 使用 `batch/runner.rs` 执行与统计
//! - 使用 `utils/paths.rs` 生成防冲突路径

use crate::batch::{BatchResult, BatchRunner, ProcessResult};
use crate::error::{Result, ToolError};
use crate::models::{RecordStatus, RenameMapping, RenamePair, RenameRecord};
use crate::utils::paths;

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// 执行映射，返回统计与逐项记录
pub fn execute(mapping: &RenameMapping, runner: BatchRunner) -> (BatchResult, Vec<RenameRecord>) {
    let failed_dirs = create_directories(mapping);

    let mut records = Vec::with_capacity(mapping.len());
    let result = runner.run(mapping.pairs(), "Renaming", |pair| {
        let index = records.len();
        let name = pair.source_name();

        if pair.source == pair.destination {
            records.push(RenameRecord::new(
                index,
                &pair.source,
                &pair.destination,
                RecordStatus::Unchanged,
            ));
            return ProcessResult::Unchanged(name);
        }

        let outcome = match pair.destination.parent().and_then(|d| failed_dirs.get(d)) {
            Some(err) => Err(ToolError::Other(err.clone())),
            None => rename_one(pair),
        };

        match outcome {
            Ok(actual) => {
                records.push(RenameRecord::new(
                    index,
                    &pair.source,
                    &actual,
                    RecordStatus::Renamed,
                ));
                ProcessResult::Success(name)
            }
            Err(e) => {
                records.push(
                    RenameRecord::new(index, &pair.source, &pair.destination, RecordStatus::Failed)
                        .with_error(e.to_string()),
                );
                ProcessResult::Failed(name, e.to_string())
            }
        }
    });

    (result, records)
}

/// 第一遍：创建缺失的目标目录，返回创建失败的目录及原因
fn create_directories(mapping: &RenameMapping) -> HashMap<PathBuf, String> {
    let dirs: BTreeSet<&Path> = mapping
        .iter()
        .filter_map(|pair| pair.destination.parent())
        .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .collect();

    let mut failed = HashMap::new();
    for dir in dirs {
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("Failed to create directory {}: {}", dir.display(), e);
            failed.insert(
                dir.to_path_buf(),
                format!("cannot create directory {}: {}", dir.display(), e),
            );
        }
    }
    failed
}

/// 重命名单个文件，返回实际写入的路径
fn rename_one(pair: &RenamePair) -> Result<PathBuf> {
    let target = paths::unique_path(&pair.destination);
    if target != pair.destination {
        log::debug!(
            "{} exists, using {}",
            pair.destination.display(),
            target.display()
        );
    }

    fs::rename(&pair.source, &target).map_err(|e| ToolError::RenameFailed {
        from: pair.source.display().to_string(),
        to: target.display().to_string(),
        source: e,
    })?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mapping_of(pairs: &[(&Path, PathBuf)]) -> RenameMapping {
        let mut mapping = RenameMapping::default();
        for (src, dst) in pairs {
            mapping.push(src.to_path_buf(), dst.clone());
        }
        mapping
    }

    #[test]
    fn test_existing_destination_gets_counter() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.png");
        let taken = tmp.path().join("img_001.png");
        fs::write(&src, b"new").unwrap();
        fs::write(&taken, b"old").unwrap();

        let mapping = mapping_of(&[(&src, taken.clone())]);
        let (result, records) = execute(&mapping, BatchRunner::new(false));

        assert_eq!(result.processed.count(), 1);
        assert_eq!(fs::read(&taken).unwrap(), b"old");
        assert_eq!(fs::read(tmp.path().join("img_001_1.png")).unwrap(), b"new");
        assert!(records[0].destination.ends_with("img_001_1.png"));
        assert_eq!(records[0].status, RecordStatus::Renamed);
    }

    #[test]
    fn test_same_path_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("keep.png");
        fs::write(&src, b"x").unwrap();

        let mapping = mapping_of(&[(&src, src.clone())]);
        let (result, records) = execute(&mapping, BatchRunner::new(false));

        assert_eq!(result.processed.count(), 1);
        assert_eq!(result.unchanged, 1);
        assert_eq!(records[0].status, RecordStatus::Unchanged);
        assert!(src.exists());
    }

    #[test]
    fn test_missing_source_fails_without_abort() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone.png");
        let ok = tmp.path().join("ok.png");
        fs::write(&ok, b"x").unwrap();

        let mapping = mapping_of(&[
            (&gone, tmp.path().join("1.png")),
            (&ok, tmp.path().join("2.png")),
        ]);
        let (result, records) = execute(&mapping, BatchRunner::new(false));

        assert_eq!(result.failed.count(), 1);
        assert_eq!(result.processed.count(), 1);
        assert_eq!(result.total(), mapping.len());
        assert_eq!(records[0].status, RecordStatus::Failed);
        assert!(!records[0].error.is_empty());
        assert!(tmp.path().join("2.png").exists());
    }

    #[test]
    fn test_creates_destination_directories() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.png");
        fs::write(&src, b"x").unwrap();
        let dst = tmp.path().join("new/dir/a.png");

        let (result, _) = execute(&mapping_of(&[(&src, dst.clone())]), BatchRunner::new(false));
        assert_eq!(result.processed.count(), 1);
        assert!(dst.exists());
    }

    #[test]
    fn test_directory_failure_counts_per_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.png");
        fs::write(&src, b"x").unwrap();
        // 一个普通文件挡住了目录路径
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let mapping = mapping_of(&[(&src, blocker.join("sub/a.png"))]);
        let (result, records) = execute(&mapping, BatchRunner::new(false));

        assert_eq!(result.failed.count(), 1);
        assert!(records[0].error.contains("cannot create directory"));
        assert!(src.exists());
    }
}
