//! # 图像格式转换
//!
//! 将单张内存图像或整个文件夹（可递归）转换为目标格式与质量。
//!
//! ## 功能
//! - 单图模式：编码后以 `image_<时间戳>.<ext>` 保存到输出文件夹
//! - 文件夹模式：保持相对目录结构，逐个解码、转换、写出
//! - 单个文件失败只计数，不中断整批
//! - 所有结果（包括错误）折叠进返回的运行日志
//!
//! ## 依赖关系
//! - 使用 `batch/` 收集与执行
//! - 使用 `convert/encode.rs` 编码
//! - 使用 `models/`, `utils/paths.rs`

pub mod encode;

pub use encode::{ConversionSpec, DEFAULT_QUALITY};

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::error::{Result, ToolError};
use crate::models::image_ref::decode_file;
use crate::models::run_log::MAX_SAMPLES;
use crate::models::{ConvertMode, ImageRef, RunLog, SampleList, Status};
use crate::utils::paths;

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 单图文件名中的时间戳格式
const SINGLE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 格式转换请求
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub mode: ConvertMode,
    pub spec: ConversionSpec,
    /// 单图模式的输入
    pub image: Option<ImageRef>,
    /// 文件夹模式的输入目录
    pub input_folder: Option<PathBuf>,
    /// 输出目录；单图模式下缺省时不落盘
    pub output_folder: Option<PathBuf>,
    /// 文件夹模式是否递归
    pub recursive: bool,
    /// 是否显示进度条
    pub show_progress: bool,
}

impl ConvertRequest {
    pub fn new(mode: ConvertMode, spec: ConversionSpec) -> Self {
        Self {
            mode,
            spec,
            image: None,
            input_folder: None,
            output_folder: None,
            recursive: false,
            show_progress: false,
        }
    }
}

/// 执行格式转换，返回运行日志
pub fn convert_format(request: &ConvertRequest) -> String {
    let output = non_empty(request.output_folder.as_deref());
    match request.mode {
        ConvertMode::SingleImage => {
            convert_single_at(request.image.as_ref(), request.spec, output, Local::now())
        }
        ConvertMode::BatchFolder => convert_batch(
            non_empty(request.input_folder.as_deref()),
            output,
            request.spec,
            request.recursive,
            BatchRunner::new(request.show_progress),
        ),
    }
}

/// 空路径视为未提供
fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

// ─────────────────────────────────────────────────────────────
// 单图模式
// ─────────────────────────────────────────────────────────────

/// 单图输出文件名：`image_<YYYYMMDD_HHMMSS>.<ext>`
pub fn single_image_filename(spec: ConversionSpec, now: DateTime<Local>) -> String {
    format!(
        "image_{}{}",
        now.format(SINGLE_TIMESTAMP_FORMAT),
        spec.format.extension()
    )
}

/// 单图转换，`now` 决定输出文件名
pub fn convert_single_at(
    image: Option<&ImageRef>,
    spec: ConversionSpec,
    output_folder: Option<&Path>,
    now: DateTime<Local>,
) -> String {
    let tag = ConvertMode::SingleImage.to_string();

    let Some(image) = image else {
        return RunLog::single(tag, Status::Fail, "Error: no image input provided");
    };

    let img = match image.load() {
        Ok(img) => img,
        Err(e) => return RunLog::single(tag, Status::Fail, format!("Error: {}", e)),
    };

    let mut log = RunLog::new(tag);
    match output_folder {
        Some(folder) => match save_single(&img, spec, folder, now) {
            Ok(path) => {
                log.status(
                    Status::Ok,
                    format!(
                        "format: {} | quality: {} | saved to: {}",
                        spec.format,
                        spec.quality,
                        path.display()
                    ),
                );
            }
            Err(e) => {
                log.status(Status::Fail, format!("Error: {}", e));
            }
        },
        None => match encode::encode_to_vec(&img, spec) {
            Ok(_) => {
                log.status(
                    Status::Warn,
                    format!(
                        "no output folder provided, converted {} image was not saved",
                        spec.format
                    ),
                );
            }
            Err(e) => {
                log.status(Status::Fail, format!("Error: {}", e));
            }
        },
    }
    log.finish()
}

fn save_single(
    img: &image::DynamicImage,
    spec: ConversionSpec,
    folder: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(folder).map_err(|e| ToolError::FileWriteError {
        path: folder.display().to_string(),
        source: e,
    })?;

    // 同一秒内的重复保存追加 `_N` 后缀，不覆盖已有文件
    let target = paths::unique_path(&folder.join(single_image_filename(spec, now)));
    encode::save(img, spec, &target)?;
    Ok(target)
}

// ─────────────────────────────────────────────────────────────
// 文件夹模式
// ─────────────────────────────────────────────────────────────

/// 文件夹批量转换
pub fn convert_batch(
    input_folder: Option<&Path>,
    output_folder: Option<&Path>,
    spec: ConversionSpec,
    recursive: bool,
    runner: BatchRunner,
) -> String {
    let tag = ConvertMode::BatchFolder.to_string();

    let (Some(input), Some(output)) = (input_folder, output_folder) else {
        return RunLog::single(
            tag,
            Status::Fail,
            "Error: input or output folder not provided",
        );
    };

    if !input.exists() {
        return RunLog::single(
            tag,
            Status::Fail,
            format!("input folder '{}' does not exist", input.display()),
        );
    }

    let files = FileCollector::new(input).recursive(recursive).collect();
    if files.is_empty() {
        return RunLog::single(
            tag,
            Status::Warn,
            format!("no image files found in folder '{}'", input.display()),
        );
    }
    log::info!("Found {} image(s) under {}", files.len(), input.display());

    if let Err(e) = fs::create_dir_all(output) {
        return RunLog::single(
            tag,
            Status::Fail,
            format!("cannot create output folder '{}': {}", output.display(), e),
        );
    }

    // 输出路径 → 首个写入它的输入文件名
    let mut written: HashMap<PathBuf, String> = HashMap::new();
    let mut overwritten = SampleList::default();
    let result = runner.run(&files, "Converting", |path| {
        let name = display_name(path);
        match convert_file(path, input, output, spec) {
            Ok(destination) => {
                if let Some(first) = written.get(&destination) {
                    log::warn!(
                        "{} overwrote {} (already written from {})",
                        name,
                        destination.display(),
                        first
                    );
                    overwritten.push(name.clone());
                } else {
                    written.insert(destination, name.clone());
                }
                ProcessResult::Success(name)
            }
            Err(e) => ProcessResult::Failed(name, e.to_string()),
        }
    });

    let mut log = batch_log(&tag, &result, spec, input, output);
    if !overwritten.is_empty() {
        log.line(format!(
            "⚠ {} output(s) overwritten by inputs with the same name: {}",
            overwritten.count(),
            overwritten
        ));
    }
    log.finish()
}

/// 转换单个文件，返回输出路径
fn convert_file(
    path: &Path,
    input_root: &Path,
    output_root: &Path,
    spec: ConversionSpec,
) -> Result<PathBuf> {
    let destination =
        paths::reroot_with_extension(path, input_root, output_root, spec.format.extension());

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| ToolError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let img = decode_file(path)?;
    encode::save(&img, spec, &destination)?;
    Ok(destination)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn batch_log(
    tag: &str,
    result: &BatchResult,
    spec: ConversionSpec,
    input: &Path,
    output: &Path,
) -> RunLog {
    let status = if result.failed.is_empty() {
        Status::Ok
    } else if result.processed.is_empty() {
        Status::Fail
    } else {
        Status::Warn
    };

    let mut log = RunLog::new(tag);
    log.status(
        status,
        format!(
            "processed={} failed={}",
            result.processed.count(),
            result.failed.count()
        ),
    );
    if !result.processed.is_empty() {
        log.part(format!("processed files: {}", result.processed));
    }
    if !result.failed.is_empty() {
        log.part(format!("failed files: {}", result.failed));
    }
    log.part(format!("format: {}", spec.format))
        .part(format!("quality: {}", spec.quality))
        .part(format!("input: {}", input.display()))
        .part(format!("output: {}", output.display()));

    for (name, err) in result.failures.iter().take(MAX_SAMPLES) {
        log.line(format!("  ✗ {}: {}", name, err));
    }
    log
}
