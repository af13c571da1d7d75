//! scan 模块单元测试

use std::fs;

use tempfile::TempDir;

use crate::data::scan::{list_image_files, parse_label, scan_label_dirs};
use crate::errors::DataError;

#[test]
fn test_parse_label_valid() {
    assert_eq!(parse_label("0"), Some(0));
    assert_eq!(parse_label("7"), Some(7));
    assert_eq!(parse_label("10"), Some(10));
    // 允许前导零，按数值解析
    assert_eq!(parse_label("007"), Some(7));
    assert_eq!(parse_label("4294967295"), Some(u32::MAX));
}

#[test]
fn test_parse_label_invalid() {
    assert_eq!(parse_label(""), None);
    assert_eq!(parse_label("abc"), None);
    assert_eq!(parse_label("1a"), None);
    assert_eq!(parse_label("-1"), None);
    // `str::parse`本身接受的带符号写法也必须拒绝
    assert_eq!(parse_label("+1"), None);
    assert_eq!(parse_label(" 1"), None);
    // 非 ASCII 数字（全角）
    assert_eq!(parse_label("１"), None);
    // 超出 u32 范围
    assert_eq!(parse_label("4294967296"), None);
    assert_eq!(parse_label("99999999999999999999"), None);
}

#[test]
fn test_scan_sorted_numerically() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("10")).unwrap();
    fs::create_dir(root.join("2")).unwrap();
    fs::create_dir(root.join("0")).unwrap();
    fs::create_dir(root.join("misc")).unwrap();
    // 数字命名的普通文件不是文件夹，应被忽略
    fs::write(root.join("5"), "not a dir").unwrap();

    let dirs = scan_label_dirs(root).unwrap();
    let labels: Vec<u32> = dirs.iter().map(|d| d.label).collect();

    // 按数值排序（字典序会把 10 排在 2 前面）
    assert_eq!(labels, vec![0, 2, 10]);
    assert_eq!(dirs[2].path, root.join("10"));
}

#[test]
fn test_scan_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("不存在的目录");

    let result = scan_label_dirs(&missing);
    assert!(matches!(result, Err(DataError::DirectoryNotFound(_))));
}

#[test]
fn test_scan_empty_root() {
    let temp_dir = TempDir::new().unwrap();

    let dirs = scan_label_dirs(temp_dir.path()).unwrap();
    assert!(dirs.is_empty());
}

#[test]
fn test_list_image_files_filter_and_sort() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    fs::write(dir.join("a.png"), "x").unwrap();
    fs::write(dir.join("c.jpeg"), "x").unwrap();
    fs::write(dir.join("B.JPG"), "x").unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::write(dir.join("no_extension"), "x").unwrap();
    // 目录即便带图片扩展名也不算文件
    fs::create_dir(dir.join("d.png")).unwrap();

    let files = list_image_files(dir).unwrap();

    // 扩展名过滤大小写不敏感；结果按文件名排序（字节序：大写在前）
    assert_eq!(files.len(), 3);
    assert_eq!(files[0], dir.join("B.JPG"));
    assert_eq!(files[1], dir.join("a.png"));
    assert_eq!(files[2], dir.join("c.jpeg"));
}
