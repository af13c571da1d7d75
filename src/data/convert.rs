/*
 * @Author       : 老董
 * @Date         : 2025-10-14 09:02:11
 * @LastEditors  : 老董
 * @LastEditTime : 2025-11-03 17:25:40
 * @Description  : 图片文件夹 -> MNIST 风格 CSV 的一次性转换
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data::scan::{list_image_files, scan_label_dirs};
use crate::errors::DataError;
use crate::vision::{self, PIXEL_COUNT};

/// 将整个图片文件夹树转换为一个 CSV 文件
///
/// CSV 格式：首行为固定表头 `label,pixel_0,...,pixel_783`，之后每行为
/// `<标签>,<像素0>,...,<像素783>`，像素为 0-255 的整数。每行恰好
/// 785 个字段。
///
/// # 参数
/// - `root`: 包含 `0`、`1`、… 等类别文件夹的根目录
/// - `output_csv`: 输出 CSV 文件路径（已存在则覆盖）
///
/// # 返回
/// 成功转换的图片张数。
///
/// # 错误
/// - 根目录不存在：[`DataError::DirectoryNotFound`]，此时不会创建输出文件；
/// - 输出文件无法创建或写入：[`DataError::IoError`]，中止转换；
/// - 单张图片解码失败：打印提示后跳过该文件，转换继续。
pub fn convert_image_folders_to_csv(root: &Path, output_csv: &Path) -> Result<usize, DataError> {
    println!("开始从 {} 目录转换图片...", root.display());

    // 先扫描再建输出文件：根目录缺失时不得留下任何输出
    let label_dirs = scan_label_dirs(root)?;

    let file = File::create(output_csv)?;
    let mut writer = BufWriter::new(file);
    write_header(&mut writer)?;

    let mut total = 0_usize;
    for dir in &label_dirs {
        println!("正在处理文件夹 '{}' ...", dir.label);

        for image_path in list_image_files(&dir.path)? {
            match vision::load_grayscale_pixels(&image_path) {
                Ok(pixels) => {
                    write_row(&mut writer, dir.label, &pixels)?;
                    total += 1;
                }
                // 单张图片解码失败只跳过该文件，不中止整个转换
                Err(err) => println!("  - {err}"),
            }
        }
    }

    writer.flush()?;
    println!(
        "\n转换完成！共把 {} 张图片写入 {}。",
        total,
        output_csv.display()
    );
    Ok(total)
}

/// 写入固定表头 `label,pixel_0,...,pixel_783`
fn write_header<W: Write>(writer: &mut W) -> std::io::Result<()> {
    write!(writer, "label")?;
    for i in 0..PIXEL_COUNT {
        write!(writer, ",pixel_{i}")?;
    }
    writeln!(writer)
}

/// 写入一行数据：`[标签] + 像素序列`
fn write_row<W: Write>(writer: &mut W, label: u32, pixels: &[u8]) -> std::io::Result<()> {
    debug_assert_eq!(pixels.len(), PIXEL_COUNT);

    write!(writer, "{label}")?;
    for pixel in pixels {
        write!(writer, ",{pixel}")?;
    }
    writeln!(writer)
}
