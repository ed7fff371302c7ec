//! # 图像编码
//!
//! 目标格式与质量的编码实现。
//!
//! ## 规则
//! - JPEG 不支持透明通道：带 alpha 的图像先压平为 3 通道 RGB，alpha 直接丢弃（有损，属预期行为）
//! - PNG 忽略质量参数
//! - WebP 经 `webp` crate (libwebp) 有损编码，质量参数直接作用于输出；
//!   libwebp 只接受 RGB8 / RGBA8，灰度与高位深图像先转换
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 调用
//! - 使用 `image` crate 的 jpeg / png 编码器，`webp` crate 的 WebP 编码器

use crate::error::{Result, ToolError};
use crate::models::TargetFormat;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::error::{EncodingError, ImageFormatHint};
use image::{ColorType, DynamicImage, ImageError, ImageFormat, ImageResult};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 默认质量
pub const DEFAULT_QUALITY: u8 = 95;

/// 转换规格：目标格式 + 质量 (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSpec {
    pub format: TargetFormat,
    pub quality: u8,
}

impl ConversionSpec {
    /// 创建转换规格，质量被截断到 `[1, 100]`
    pub fn new(format: TargetFormat, quality: u8) -> Self {
        Self {
            format,
            quality: quality.clamp(1, 100),
        }
    }
}

/// 按目标格式调整像素布局
pub fn prepare_for(format: TargetFormat, img: &DynamicImage) -> Cow<'_, DynamicImage> {
    let color = img.color();
    match format {
        TargetFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(img),
            _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        },
        TargetFormat::Webp => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(img),
            _ => Cow::Owned(to_eight_bit(img)),
        },
        TargetFormat::Png => match color {
            ColorType::Rgb32F | ColorType::Rgba32F => Cow::Owned(to_eight_bit(img)),
            _ => Cow::Borrowed(img),
        },
    }
}

fn to_eight_bit(img: &DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    }
}

/// 编码到任意写入器
pub fn encode<W: Write>(img: &DynamicImage, spec: ConversionSpec, writer: W) -> Result<()> {
    let prepared = prepare_for(spec.format, img);
    let result = match spec.format {
        TargetFormat::Jpeg => {
            prepared.write_with_encoder(JpegEncoder::new_with_quality(writer, spec.quality))
        }
        TargetFormat::Png => prepared.write_with_encoder(PngEncoder::new(writer)),
        TargetFormat::Webp => encode_webp(&prepared, spec.quality, writer),
    };
    result.map_err(|e| ToolError::ImageEncode {
        format: spec.format.to_string(),
        source: e,
    })
}

/// 有损 WebP；`img` 必须已是 RGB8 / RGBA8
fn encode_webp<W: Write>(img: &DynamicImage, quality: u8, mut writer: W) -> ImageResult<()> {
    let encoder = webp::Encoder::from_image(img).map_err(|reason| {
        ImageError::Encoding(EncodingError::new(
            ImageFormatHint::Exact(ImageFormat::WebP),
            reason.to_string(),
        ))
    })?;
    let memory = encoder.encode(f32::from(quality));
    writer.write_all(&memory)?;
    Ok(())
}

/// 编码到内存
pub fn encode_to_vec(img: &DynamicImage, spec: ConversionSpec) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode(img, spec, &mut buffer)?;
    Ok(buffer)
}

/// 编码并写入文件
pub fn save(img: &DynamicImage, spec: ConversionSpec, path: &Path) -> Result<()> {
    let write_error = |e| ToolError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    encode(img, spec, &mut writer)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    fn rgba_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 128])))
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(ConversionSpec::new(TargetFormat::Jpeg, 0).quality, 1);
        assert_eq!(ConversionSpec::new(TargetFormat::Jpeg, 250).quality, 100);
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let img = rgba_image();
        let prepared = prepare_for(TargetFormat::Jpeg, &img);
        assert_eq!(prepared.color(), ColorType::Rgb8);

        let bytes = encode_to_vec(&img, ConversionSpec::new(TargetFormat::Jpeg, 90)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_png_and_webp_keep_alpha() {
        let img = rgba_image();
        assert_eq!(prepare_for(TargetFormat::Png, &img).color(), ColorType::Rgba8);

        let bytes = encode_to_vec(&img, ConversionSpec::new(TargetFormat::Webp, 80)).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn test_sixteen_bit_for_jpeg() {
        let img = DynamicImage::new_rgb16(2, 2);
        assert_eq!(prepare_for(TargetFormat::Jpeg, &img).color(), ColorType::Rgb8);
        assert_eq!(prepare_for(TargetFormat::Png, &img).color(), ColorType::Rgb16);
    }

    fn gradient() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
        }))
    }

    #[test]
    fn test_webp_quality_changes_output() {
        let img = gradient();
        let low = encode_to_vec(&img, ConversionSpec::new(TargetFormat::Webp, 5)).unwrap();
        let high = encode_to_vec(&img, ConversionSpec::new(TargetFormat::Webp, 100)).unwrap();

        assert_ne!(low, high);
        assert!(low.len() < high.len());
        let decoded = image::load_from_memory(&low).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 64));
    }

    #[test]
    fn test_webp_accepts_grayscale() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([90])));
        assert_eq!(prepare_for(TargetFormat::Webp, &img).color(), ColorType::Rgb8);

        let bytes = encode_to_vec(&img, ConversionSpec::new(TargetFormat::Webp, 75)).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }
}
