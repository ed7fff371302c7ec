//! # 文件收集器
//!
//! 根据输入目录和扩展名白名单收集待处理的图像文件。
//!
//! ## 功能
//! - 扩展名白名单（逗号分隔，大小写不敏感）
//! - 递归 / 平铺目录搜索
//! - 跳过隐藏文件与隐藏目录（与 shell 通配行为一致）
//! - 跟随符号链接；无法读取的条目（含悬空链接、链接环）记 debug 日志后跳过
//! - 结果按路径字典序排序
//!
//! ## 依赖关系
//! - 被 `convert/` 和 `rename/plan.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 格式转换支持的输入扩展名
pub const CONVERTIBLE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".bmp", ".gif", ".webp", ".tiff", ".tif",
];

/// 批量重命名的默认扩展名
pub const DEFAULT_RENAME_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp"];

/// 文件收集器
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 扩展名白名单（小写，带点号）
    extensions: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认使用可转换格式白名单
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            extensions: to_owned_list(CONVERTIBLE_EXTENSIONS),
            recursive: false,
        }
    }

    /// 设置扩展名白名单（逗号分隔）；为空时回退到 `fallback`
    pub fn with_extensions(mut self, list: &str, fallback: &[&str]) -> Self {
        self.extensions = parse_extension_list(list);
        if self.extensions.is_empty() {
            self.extensions = to_owned_list(fallback);
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 当前生效的扩展名白名单
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_extension(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort_by_key(|p| p.to_string_lossy().to_string());
        files
    }

    /// 检查文件扩展名是否在白名单内
    pub fn matches_extension(&self, path: &Path) -> bool {
        match dotted_extension(path) {
            Some(ext) => self.extensions.iter().any(|e| *e == ext),
            None => false,
        }
    }
}

/// 小写且带点号的扩展名
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// 解析逗号分隔的扩展名列表
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty() && s != ".")
        .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
        .collect()
}

fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list(" .JPG, png ,,.webp"),
            vec![".jpg", ".png", ".webp"]
        );
        assert!(parse_extension_list(" , ").is_empty());
    }

    #[test]
    fn test_collect_flat_filters_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("b.PNG"));
        touch(&tmp.path().join("a.jpg"));
        touch(&tmp.path().join("notes.txt"));
        touch(&tmp.path().join("sub/c.png"));

        let files = FileCollector::new(tmp.path()).collect();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG"]);
    }

    #[test]
    fn test_collect_recursive_skips_hidden() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.png"));
        touch(&tmp.path().join("sub/deep/c.png"));
        touch(&tmp.path().join(".cache/d.png"));
        touch(&tmp.path().join(".hidden.png"));

        let files = FileCollector::new(tmp.path()).recursive(true).collect();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| !p.to_string_lossy().contains(".cache")));
    }

    #[test]
    fn test_custom_extensions_with_fallback() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.tif"));
        touch(&tmp.path().join("b.png"));

        let only_tif = FileCollector::new(tmp.path())
            .with_extensions("tif", DEFAULT_RENAME_EXTENSIONS)
            .collect();
        assert_eq!(only_tif.len(), 1);

        let fallback = FileCollector::new(tmp.path()).with_extensions("", DEFAULT_RENAME_EXTENSIONS);
        assert_eq!(fallback.extensions().len(), DEFAULT_RENAME_EXTENSIONS.len());
        assert_eq!(fallback.collect().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_images_are_collected() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("store/real.png");
        touch(&real);
        let input = tmp.path().join("in");
        fs::create_dir_all(&input).unwrap();
        symlink(&real, input.join("link.png")).unwrap();
        symlink(tmp.path().join("store/gone.png"), input.join("dangling.png")).unwrap();

        let files = FileCollector::new(&input).collect();
        assert_eq!(files, vec![input.join("link.png")]);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(FileCollector::new(tmp.path().join("nope")).collect().is_empty());
    }
}
