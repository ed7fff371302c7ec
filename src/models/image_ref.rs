//! # 图像引用模型
//!
//! 定义单图转换的输入：内存中已解码的图像或文件路径，
//! 以及宿主传入的浮点像素缓冲区。
//!
//! ## 依赖关系
//! - 被 `convert/` 和 `host.rs` 使用
//! - 使用 `image` crate

use crate::error::{Result, ToolError};
use image::{DynamicImage, GrayImage, ImageReader, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};

/// 单图输入
#[derive(Debug, Clone)]
pub enum ImageRef {
    /// 已解码的内存图像
    Memory(DynamicImage),
    /// 磁盘上的图像文件
    Path(PathBuf),
}

impl ImageRef {
    /// 读取（必要时解码）为 `DynamicImage`
    pub fn load(&self) -> Result<DynamicImage> {
        match self {
            ImageRef::Memory(img) => Ok(img.clone()),
            ImageRef::Path(path) => decode_file(path),
        }
    }
}

impl From<DynamicImage> for ImageRef {
    fn from(img: DynamicImage) -> Self {
        ImageRef::Memory(img)
    }
}

/// 按内容识别格式并解码图像文件
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| ToolError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = reader
        .with_guessed_format()
        .map_err(|e| ToolError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    reader.decode().map_err(|e| ToolError::ImageDecode {
        path: path.display().to_string(),
        source: e,
    })
}

/// 宿主传入的浮点像素缓冲区
///
/// 行优先、通道交错，取值范围 `[0, 1]`。
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// 1 (灰度), 3 (RGB) 或 4 (RGBA)
    pub channels: u8,
    pub data: Vec<f32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<f32>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// 转换为 8 位图像：乘以 255 后截断到 `[0, 255]`
    pub fn to_image(&self) -> Result<DynamicImage> {
        let expected = self.width as usize * self.height as usize * self.channels as usize;
        if self.data.len() != expected {
            return Err(ToolError::InvalidPixelBuffer(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                self.width,
                self.height,
                self.channels,
                self.data.len()
            )));
        }

        let bytes: Vec<u8> = self
            .data
            .iter()
            .map(|v| (v * 255.0).clamp(0.0, 255.0) as u8)
            .collect();

        let size_error =
            || ToolError::InvalidPixelBuffer("buffer does not match dimensions".to_string());

        let img = match self.channels {
            1 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(self.width, self.height, bytes).ok_or_else(size_error)?,
            ),
            3 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(self.width, self.height, bytes).ok_or_else(size_error)?,
            ),
            4 => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(self.width, self.height, bytes).ok_or_else(size_error)?,
            ),
            n => {
                return Err(ToolError::InvalidPixelBuffer(format!(
                    "unsupported channel count: {}",
                    n
                )))
            }
        };

        Ok(img)
    }
}

impl TryFrom<PixelBuffer> for ImageRef {
    type Error = ToolError;

    fn try_from(buffer: PixelBuffer) -> Result<Self> {
        buffer.to_image().map(ImageRef::Memory)
    }
}
