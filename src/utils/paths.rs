//! # 路径工具
//!
//! 输出路径推导与防冲突命名。
//!
//! ## 依赖关系
//! - 被 `convert/` 和 `rename/` 使用
//! - 无外部模块依赖

use std::path::{Path, PathBuf};

/// `path` 相对于 `root` 的路径；不在 `root` 之下时退化为文件名
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf()),
    }
}

/// 将 `path` 从 `input_root` 平移到 `output_root` 下，并替换扩展名
///
/// `extension` 带点号，例如 `.webp`。
pub fn reroot_with_extension(
    path: &Path,
    input_root: &Path,
    output_root: &Path,
    extension: &str,
) -> PathBuf {
    let rel = relative_to(path, input_root);
    output_root.join(rel.with_extension(extension.trim_start_matches('.')))
}

/// 在扩展名前插入 `_N` 后缀
pub fn with_counter(path: &Path, counter: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, counter, ext.to_string_lossy()),
        None => format!("{}_{}", stem, counter),
    };
    path.with_file_name(name)
}

/// 返回一个当前不存在的路径：`path` 本身，或依次尝试 `_1`, `_2`, …
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let mut counter = 1;
    loop {
        let candidate = with_counter(path, counter);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
