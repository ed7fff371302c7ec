//! # 运行日志
//!
//! 公开操作唯一的返回值：一段人类可读的文本。
//! 头部标签 + 以 ` | ` 分隔的片段，可附加多行明细。
//!
//! ## 依赖关系
//! - 被 `convert/`, `rename/`, `host.rs` 使用
//! - 无外部模块依赖

use std::fmt;

/// 日志中最多列出的示例文件数
pub const MAX_SAMPLES: usize = 5;

/// 日志状态标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "✓"),
            Status::Warn => write!(f, "⚠ WARNING"),
            Status::Fail => write!(f, "✗ FAILED"),
        }
    }
}

/// 运行日志构建器
#[derive(Debug, Clone)]
pub struct RunLog {
    tag: String,
    parts: Vec<String>,
    lines: Vec<String>,
}

impl RunLog {
    /// 以 `[tag]` 开头的新日志
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            parts: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// 快捷方式：单条状态消息
    pub fn single(tag: impl Into<String>, status: Status, message: impl AsRef<str>) -> String {
        let mut log = Self::new(tag);
        log.status(status, message);
        log.finish()
    }

    /// 追加带状态标记的片段
    pub fn status(&mut self, status: Status, message: impl AsRef<str>) -> &mut Self {
        self.parts.push(format!("{} | {}", status, message.as_ref()));
        self
    }

    /// 追加普通片段
    pub fn part(&mut self, message: impl Into<String>) -> &mut Self {
        self.parts.push(message.into());
        self
    }

    /// 追加独立的一行（例如预览明细）
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// 生成最终文本
    pub fn finish(&self) -> String {
        let mut out = format!("[{}]", self.tag);
        if !self.parts.is_empty() {
            out.push(' ');
            out.push_str(&self.parts.join(" | "));
        }
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

impl fmt::Display for RunLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.finish())
    }
}

/// 计数 + 最多 [`MAX_SAMPLES`] 个示例文件名
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleList {
    count: usize,
    samples: Vec<String>,
}

impl SampleList {
    pub fn push(&mut self, name: impl Into<String>) {
        self.count += 1;
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(name.into());
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for SampleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.samples.join(", "))?;
        let more = self.count - self.samples.len();
        if more > 0 {
            write!(f, " (+{} more)", more)?;
        }
        Ok(())
    }
}
