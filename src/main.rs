//! 命令行入口：图片文件夹 -> MNIST 风格 CSV
//!
//! 用法：`img2mnist [图片根目录] [输出CSV路径]`，
//! 参数省略时使用默认路径 `mnist_images` 与 `mnist_dataset.csv`。

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use img2mnist::data::convert_image_folders_to_csv;
use img2mnist::errors::DataError;

/// 默认输入根目录（包含 `0`、`1`、… 等类别文件夹）
const DEFAULT_IMAGE_ROOT: &str = "mnist_images";

/// 默认输出 CSV 路径
const DEFAULT_OUTPUT_CSV: &str = "mnist_dataset.csv";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_IMAGE_ROOT.to_string()));
    let output_csv =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_CSV.to_string()));

    match convert_image_folders_to_csv(&root, &output_csv) {
        Ok(_) => ExitCode::SUCCESS,
        Err(DataError::DirectoryNotFound(path)) => {
            print_missing_root_guidance(&path);
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("错误: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 根目录缺失时打印指引与预期的文件夹结构
fn print_missing_root_guidance(root: &Path) {
    println!("错误：找不到输入文件夹 {}。", root.display());
    println!("请把第一个参数指向正确的图片根目录。预期的文件夹结构：");
    println!("{}/", root.display());
    println!("├── 0/");
    println!("│   ├── 1.png");
    println!("│   └── 2.png");
    println!("├── 1/");
    println!("│   ├── 3.png");
    println!("│   └── 4.png");
    println!("...");
}
