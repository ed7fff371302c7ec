//! # 命名规则
//!
//! 根据命名模式为第 i 个文件生成新的基础名（不含扩展名）。
//!
//! ## 模板占位符
//! - `{number}`: `start_number + i`，按 `digit_count` 补零
//! - `{timestamp}`: 运行时间戳（按 `date_format`）
//! - `{original}`: 原文件名（不含扩展名）
//!
//! ## 依赖关系
//! - 被 `rename/plan.rs` 调用
//! - 使用 `models/options.rs` 的枚举
//! - 使用 `chrono` 格式化时间，`regex` 检查未知占位符

use crate::models::{DateFormat, NamingPattern, SortBy};

use chrono::{DateTime, Duration, Local};
use regex::Regex;
use std::sync::OnceLock;

pub const NUMBER: &str = "{number}";
pub const TIMESTAMP: &str = "{timestamp}";
pub const ORIGINAL: &str = "{original}";

/// 不保留扩展名时使用的扩展名
pub const FALLBACK_EXTENSION: &str = ".jpg";

/// 一次重命名调用的全部命名参数（调用期间不可变）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    pub pattern: NamingPattern,
    pub template: String,
    pub start_number: u32,
    pub digit_count: usize,
    pub prefix: String,
    pub suffix: String,
    pub preserve_extension: bool,
    pub preserve_subfolders: bool,
    pub sort_by: SortBy,
    pub date_format: DateFormat,
    pub recursive: bool,
    /// 逗号分隔的扩展名白名单，空字符串表示默认集合
    pub target_extensions: String,
}

impl Default for NamingContext {
    fn default() -> Self {
        NamingContext {
            pattern: NamingPattern::Sequence,
            template: "image_{number}".to_string(),
            start_number: 1,
            digit_count: 3,
            prefix: "img_".to_string(),
            suffix: "_processed".to_string(),
            preserve_extension: true,
            preserve_subfolders: true,
            sort_by: SortBy::Name,
            date_format: DateFormat::Date,
            recursive: false,
            target_extensions: ".jpg,.jpeg,.png,.webp,.gif,.bmp".to_string(),
        }
    }
}

impl NamingContext {
    /// 是否需要运行级时间戳
    pub fn needs_timestamp(&self) -> bool {
        self.pattern == NamingPattern::Timestamp || self.template.contains(TIMESTAMP)
    }

    /// 第 `index` 个文件的补零序号
    pub fn number(&self, index: usize) -> String {
        let n = self.start_number as u64 + index as u64;
        format!("{:0width$}", n, width = self.digit_count)
    }

    /// 生成新的基础名
    ///
    /// `shared_timestamp` 为运行开始时按 `date_format` 计算的时间戳，
    /// `run_start` 用于 `YYYYMMDD_HHMMSS` 下逐文件递增的时间戳。
    pub fn base_name(
        &self,
        index: usize,
        original: &str,
        shared_timestamp: &str,
        run_start: DateTime<Local>,
    ) -> String {
        match self.pattern {
            NamingPattern::Sequence => self.template.replace(NUMBER, &self.number(index)),
            NamingPattern::Timestamp => {
                let stamp = match self.date_format {
                    DateFormat::DateTime => file_timestamp(run_start, index, self.date_format),
                    DateFormat::Date => shared_timestamp.to_string(),
                };
                let name = self.template.replace(TIMESTAMP, &stamp);
                if name.contains(NUMBER) {
                    name.replace(NUMBER, &self.number(index))
                } else {
                    name
                }
            }
            NamingPattern::PrefixOriginal => format!("{}{}", self.prefix, original),
            NamingPattern::SuffixOriginal => format!("{}{}", original, self.suffix),
            NamingPattern::Custom => {
                let mut name = self.template.clone();
                if name.contains(NUMBER) {
                    name = name.replace(NUMBER, &self.number(index));
                }
                if name.contains(TIMESTAMP) {
                    name = name.replace(TIMESTAMP, shared_timestamp);
                }
                if name.contains(ORIGINAL) {
                    name = name.replace(ORIGINAL, original);
                }
                name
            }
        }
    }

    /// 追加扩展名：保留原扩展名（大小写不变）或强制 `.jpg`
    pub fn file_name(&self, base: &str, original_extension: &str) -> String {
        if self.preserve_extension {
            format!("{}{}", base, original_extension)
        } else {
            format!("{}{}", base, FALLBACK_EXTENSION)
        }
    }

    /// 模板中无法识别的占位符（原样保留）
    ///
    /// 只有使用模板的模式才检查。
    pub fn unknown_placeholders(&self) -> Vec<String> {
        let uses_template = matches!(
            self.pattern,
            NamingPattern::Sequence | NamingPattern::Timestamp | NamingPattern::Custom
        );
        if !uses_template {
            return vec![];
        }
        placeholder_regex()
            .find_iter(&self.template)
            .map(|m| m.as_str().to_string())
            .filter(|p| p != NUMBER && p != TIMESTAMP && p != ORIGINAL)
            .collect()
    }
}

/// 运行级时间戳
pub fn run_timestamp(run_start: DateTime<Local>, format: DateFormat) -> String {
    run_start.format(format.pattern()).to_string()
}

/// 第 `index` 个文件的时间戳：运行开始时间 + `index` 秒
pub fn file_timestamp(run_start: DateTime<Local>, index: usize, format: DateFormat) -> String {
    let shifted = run_start + Duration::seconds(index as i64);
    shifted.format(format.pattern()).to_string()
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[A-Za-z0-9_]*\}").expect("valid placeholder regex"))
}
