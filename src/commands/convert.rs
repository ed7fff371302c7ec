//! # convert 命令实现
//!
//! 将命令行参数组装为 [`ConvertRequest`]，执行并打印运行日志。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `convert/` 执行转换
//! - 使用 `utils/output.rs`

use crate::cli::convert::ConvertArgs;
use crate::convert::{self, ConversionSpec, ConvertRequest};
use crate::error::Result;
use crate::models::{ConvertMode, ImageRef};
use crate::utils::output;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let request = build_request(args);
    output::print_header(&format!(
        "Converting to {} ({})",
        request.spec.format, request.mode
    ));

    let log = convert::convert_format(&request);
    output::print_run_log(&log);
    Ok(())
}

/// 命令行参数 → 转换请求
pub fn build_request(args: ConvertArgs) -> ConvertRequest {
    let mode = args.mode();
    let mut request = ConvertRequest::new(mode, ConversionSpec::new(args.format, args.quality));
    if mode == ConvertMode::SingleImage {
        request.image = args.image.map(ImageRef::Path);
    }
    request.input_folder = args.input;
    request.output_folder = args.output;
    request.recursive = args.recursive;
    request.show_progress = !args.no_progress;
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::models::TargetFormat;
    use clap::Parser;

    fn parse(argv: &[&str]) -> ConvertArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Convert(args) => args,
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_image_selects_single_mode() {
        let args = parse(&["imgbatch", "convert", "-t", "webp", "--image", "a.png"]);
        let request = build_request(args);
        assert_eq!(request.mode, ConvertMode::SingleImage);
        assert_eq!(request.spec.format, TargetFormat::Webp);
        assert_eq!(request.spec.quality, 95);
        assert!(matches!(request.image, Some(ImageRef::Path(_))));
    }

    #[test]
    fn test_input_selects_batch_mode() {
        let args = parse(&[
            "imgbatch", "convert", "-t", "jpeg", "-q", "70", "-i", "in", "-o", "out", "-r",
        ]);
        let request = build_request(args);
        assert_eq!(request.mode, ConvertMode::BatchFolder);
        assert_eq!(request.spec.quality, 70);
        assert!(request.recursive);
    }

    #[test]
    fn test_source_is_required() {
        assert!(Cli::try_parse_from(["imgbatch", "convert", "-t", "png"]).is_err());
        assert!(Cli::try_parse_from([
            "imgbatch", "convert", "-t", "png", "--image", "a.png", "-i", "in"
        ])
        .is_err());
    }
}
