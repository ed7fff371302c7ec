//! # rename 命令实现
//!
//! 执行批量重命名，打印运行日志，可选导出 CSV 报告。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `rename/` 计算与执行
//! - 使用 `models/mapping.rs` 导出报告
//! - 使用 `utils/output.rs`

use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::models::mapping::write_csv_report;
use crate::rename::{self, RenameRequest};
use crate::utils::output;

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header(&format!(
        "Renaming images in '{}' ({})",
        args.folder.display(),
        args.mode
    ));

    let mut request = RenameRequest::new(args.mode, args.folder.clone(), args.naming_context());
    request.show_progress = !args.no_progress;

    let run = rename::run(&request);
    output::print_run_log(&run.log);

    if let Some(report) = &args.report {
        if run.records.is_empty() {
            output::print_warning("Nothing to report, CSV not written");
        } else {
            write_csv_report(&run.records, report)?;
            output::print_info(&format!(
                "Wrote {} record(s) to {}",
                run.records.len(),
                report.display()
            ));
        }
    }

    Ok(())
}
