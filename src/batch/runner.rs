//! # 批量执行器
//!
//! 顺序执行批量处理任务，逐项隔离错误。
//!
//! ## 功能
//! - 单条失败只计数，不中断整批
//! - 进度条显示（可关闭）
//! - 成功 / 失败统计与示例文件名
//!
//! ## 依赖关系
//! - 被 `convert/` 和 `rename/apply.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::models::SampleList;
use crate::utils::progress;

use indicatif::ProgressBar;

/// 单个条目处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 无需处理（例如源与目标相同），计入成功
    Unchanged(String),
    /// 处理失败
    Failed(String, String), // (文件名, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default, Clone)]
pub struct BatchResult {
    /// 成功的文件（含无需处理的）
    pub processed: SampleList,
    /// 失败的文件
    pub failed: SampleList,
    /// 无需处理的数量
    pub unchanged: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(name) => self.processed.push(name),
            ProcessResult::Unchanged(name) => {
                self.unchanged += 1;
                self.processed.push(name);
            }
            ProcessResult::Failed(name, err) => {
                self.failed.push(name.clone());
                self.failures.push((name, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.processed.count() + self.failed.count()
    }
}

/// 批量执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// 逐项处理，`processor` 的返回值汇总进 [`BatchResult`]
    pub fn run<T, F>(&self, items: &[T], message: &str, mut processor: F) -> BatchResult
    where
        F: FnMut(&T) -> ProcessResult,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(items.len() as u64, message)
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();
        for item in items {
            let result = processor(item);
            if let ProcessResult::Failed(name, err) = &result {
                pb.suspend(|| log::warn!("{}: {}", name, err));
            }
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_do_not_abort() {
        let items = vec![1, 2, 3, 4];
        let result = BatchRunner::new(false).run(&items, "test", |n| {
            if n % 2 == 0 {
                ProcessResult::Failed(n.to_string(), "even".to_string())
            } else {
                ProcessResult::Success(n.to_string())
            }
        });

        assert_eq!(result.processed.count(), 2);
        assert_eq!(result.failed.count(), 2);
        assert_eq!(result.total(), items.len());
        assert_eq!(result.failures[0], ("2".to_string(), "even".to_string()));
    }

    #[test]
    fn test_unchanged_counts_as_processed() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Unchanged("a.png".to_string()));
        result.merge(ProcessResult::Success("b.png".to_string()));
        assert_eq!(result.processed.count(), 2);
        assert_eq!(result.unchanged, 1);
        assert!(result.failed.is_empty());
    }
}
