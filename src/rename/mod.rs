//! # 批量重命名
//!
//! 按命名模式为文件夹中的图像计算新名称，预览或执行。
//!
//! ## 模式
//! - `Preview`: 只计算映射并列出前 10 项，不触碰文件系统
//! - `Execute`: 对同一份映射执行重命名，自动避免覆盖
//!
//! ## 依赖关系
//! - 子模块: naming, plan, apply
//! - 使用 `batch/` 执行，`models/` 记录日志与映射

pub mod apply;
pub mod naming;
pub mod plan;

pub use naming::NamingContext;

use crate::batch::{BatchResult, BatchRunner};
use crate::error::ToolError;
use crate::models::run_log::MAX_SAMPLES;
use crate::models::{RecordStatus, RenameMapping, RenameMode, RenameRecord, RunLog, Status};

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// 预览时最多列出的条目数
pub const PREVIEW_LIMIT: usize = 10;

/// 错误日志使用的标签
const RENAME_TAG: &str = "Image Rename";

/// 批量重命名请求
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub mode: RenameMode,
    pub folder: PathBuf,
    pub naming: NamingContext,
    /// 是否显示进度条
    pub show_progress: bool,
}

impl RenameRequest {
    pub fn new(mode: RenameMode, folder: impl Into<PathBuf>, naming: NamingContext) -> Self {
        Self {
            mode,
            folder: folder.into(),
            naming,
            show_progress: false,
        }
    }
}

/// 一次重命名调用的结果：运行日志 + 逐项记录
#[derive(Debug, Clone)]
pub struct RenameRun {
    pub log: String,
    pub records: Vec<RenameRecord>,
}

impl RenameRun {
    fn log_only(log: String) -> Self {
        Self {
            log,
            records: Vec::new(),
        }
    }
}

/// 执行批量重命名，返回运行日志
pub fn rename_images(request: &RenameRequest) -> String {
    run(request).log
}

/// 执行批量重命名，返回日志与记录
pub fn run(request: &RenameRequest) -> RenameRun {
    run_at(request, Local::now())
}

/// 以给定的运行开始时间执行
pub fn run_at(request: &RenameRequest, run_start: DateTime<Local>) -> RenameRun {
    let mapping = match plan::build_mapping(&request.folder, &request.naming, run_start) {
        Ok(mapping) => mapping,
        Err(e @ ToolError::NoFilesFound { .. }) => {
            return RenameRun::log_only(RunLog::single(RENAME_TAG, Status::Warn, e.to_string()))
        }
        Err(ToolError::DirectoryNotFound { path }) => {
            return RenameRun::log_only(RunLog::single(
                RENAME_TAG,
                Status::Fail,
                format!("folder does not exist: {}", path),
            ))
        }
        Err(e) => {
            return RenameRun::log_only(RunLog::single(RENAME_TAG, Status::Fail, e.to_string()))
        }
    };

    let unknown = request.naming.unknown_placeholders();
    if !unknown.is_empty() {
        log::warn!("Template placeholders left as-is: {}", unknown.join(", "));
    }

    match request.mode {
        RenameMode::Preview => {
            let mut log = preview_log(&mapping);
            append_placeholder_warning(&mut log, &unknown);
            let records = mapping
                .iter()
                .enumerate()
                .map(|(i, p)| RenameRecord::new(i, &p.source, &p.destination, RecordStatus::Planned))
                .collect();
            RenameRun {
                log: log.finish(),
                records,
            }
        }
        RenameMode::Execute => {
            let (result, records) =
                apply::execute(&mapping, BatchRunner::new(request.show_progress));
            let mut log = execute_log(&result);
            append_placeholder_warning(&mut log, &unknown);
            RenameRun {
                log: log.finish(),
                records,
            }
        }
    }
}

fn preview_log(mapping: &RenameMapping) -> RunLog {
    let shown = mapping.len().min(PREVIEW_LIMIT);
    let mut log = RunLog::new(RenameMode::Preview.to_string());
    log.part(format!(
        "found {} image file(s), previewing the first {} rename(s):",
        mapping.len(),
        shown
    ));

    for (i, pair) in mapping.iter().take(shown).enumerate() {
        log.line(format!(
            "{}. {} → {}",
            i + 1,
            pair.source_name(),
            pair.destination_name()
        ));
    }
    if mapping.len() > shown {
        log.line(format!("...({} more file(s))", mapping.len() - shown));
    }
    log.line("")
        .line("Switch mode to Execute to apply these renames");
    log
}

fn execute_log(result: &BatchResult) -> RunLog {
    let status = if result.failed.is_empty() {
        Status::Ok
    } else {
        Status::Warn
    };

    let mut renamed = format!("renamed {} file(s)", result.processed.count());
    if result.unchanged > 0 {
        renamed.push_str(&format!(" ({} already named)", result.unchanged));
    }

    let mut log = RunLog::new(RenameMode::Execute.to_string());
    log.status(status, renamed);
    if !result.failed.is_empty() {
        log.part(format!("✗ failed {} file(s): {}", result.failed.count(), result.failed));
        for (name, err) in result.failures.iter().take(MAX_SAMPLES) {
            log.line(format!("  ✗ {}: {}", name, err));
        }
    }
    log
}

fn append_placeholder_warning(log: &mut RunLog, unknown: &[String]) {
    if !unknown.is_empty() {
        log.line(format!(
            "⚠ unknown placeholder(s) left as-is: {}",
            unknown.join(", ")
        ));
    }
}
