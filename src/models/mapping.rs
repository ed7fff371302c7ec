//! # 重命名映射模型
//!
//! 预先计算的 (源路径, 目标路径) 有序列表，以及用于 CSV 报告的逐行记录。
//!
//! ## 依赖关系
//! - 被 `rename/` 和 `commands/rename.rs` 使用
//! - 使用 `serde` 派生序列化，使用 `csv` 库写入报告

use crate::error::{Result, ToolError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 单个重命名计划项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenamePair {
    /// 源文件名（用于日志）
    pub fn source_name(&self) -> String {
        file_name_of(&self.source)
    }

    /// 目标文件名（用于日志）
    pub fn destination_name(&self) -> String {
        file_name_of(&self.destination)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 有序重命名映射，顺序即排序结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMapping {
    pairs: Vec<RenamePair>,
}

impl RenameMapping {
    pub fn push(&mut self, source: PathBuf, destination: PathBuf) {
        self.pairs.push(RenamePair {
            source,
            destination,
        });
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenamePair> {
        self.pairs.iter()
    }

    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }
}

impl<'a> IntoIterator for &'a RenameMapping {
    type Item = &'a RenamePair;
    type IntoIter = std::slice::Iter<'a, RenamePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// 记录状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// 仅预览
    Planned,
    /// 已重命名
    Renamed,
    /// 源与目标相同
    Unchanged,
    /// 重命名失败
    Failed,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Planned => write!(f, "planned"),
            RecordStatus::Renamed => write!(f, "renamed"),
            RecordStatus::Unchanged => write!(f, "unchanged"),
            RecordStatus::Failed => write!(f, "failed"),
        }
    }
}

/// CSV 报告中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub index: usize,
    pub source: String,
    /// 实际写入的路径（可能带有 `_N` 后缀）
    pub destination: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub error: String,
}

impl RenameRecord {
    pub fn new(index: usize, source: &Path, destination: &Path, status: RecordStatus) -> Self {
        Self {
            index,
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            status,
            error: String::new(),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }
}

/// 导出重命名记录为 CSV
pub fn write_csv_report(records: &[RenameRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| ToolError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
