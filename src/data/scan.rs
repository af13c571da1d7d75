//! 标签文件夹扫描
//!
//! 输入根目录的直接子目录即类别文件夹，目录名就是标签
//! （如 `0`、`1`、…）。非纯数字命名的目录会被跳过并打印提示。

use std::path::{Path, PathBuf};

use crate::errors::DataError;
use crate::vision;

/// 一个合法的标签文件夹
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDir {
    /// 由目录名解析出的类别标签
    pub label: u32,
    /// 目录路径
    pub path: PathBuf,
}

/// 将目录名解析为标签
///
/// 纯函数：仅当名字非空、全部由 ASCII 数字组成且不超出 `u32`
/// 范围时返回 `Some`，否则返回 `None`（即「跳过非数字目录」分支）。
///
/// 注意不能直接用 `str::parse`：它还接受 `+7` 这类带符号写法。
pub fn parse_label(name: &str) -> Option<u32> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// 扫描根目录下的所有标签文件夹
///
/// # 参数
/// - `root`: 包含 `0`、`1`、… 等类别文件夹的根目录
///
/// # 返回
/// 按标签数值升序排列的[`LabelDir`]列表。根目录不存在（或不是目录）时
/// 返回[`DataError::DirectoryNotFound`]；根目录为空不算错误，返回空列表。
pub fn scan_label_dirs(root: &Path) -> Result<Vec<LabelDir>, DataError> {
    if !root.is_dir() {
        return Err(DataError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut label_dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        match parse_label(&name) {
            Some(label) => label_dirs.push(LabelDir { label, path }),
            None => println!("文件夹 '{}' 不是数字命名，跳过。", name),
        }
    }

    label_dirs.sort_by_key(|dir| dir.label);
    Ok(label_dirs)
}

/// 列出某个标签文件夹内的所有图片文件
///
/// 只取直接子项中的普通文件，按扩展名过滤（`.png`/`.jpg`/`.jpeg`，
/// 大小写不敏感），并按文件名排序以保证处理顺序确定。
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && vision::is_supported_image(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
