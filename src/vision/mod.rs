/*
 * @Author       : 老董
 * @Date         : 2025-10-12 10:21:35
 * @LastEditors  : 老董
 * @LastEditTime : 2025-11-03 16:48:02
 * @Description  : 本模块提供图片的读取与规格化功能。
 *                 在本模块中，不严谨地说：
 *                 1. “灰度”（图）等同于英文中luma、luminance、grey、gray的概念；
 *                 2. 所有图片最终都被规格化为28x28的单通道灰度图。
 */

use std::path::Path;

use image::imageops::FilterType;

use crate::errors::DataError;

#[cfg(test)]
mod tests;

/// 规格化后图片的边长（像素）
pub const IMAGE_SIDE: u32 = 28;

/// 规格化后图片的像素总数（28 * 28 = 784）
pub const PIXEL_COUNT: usize = (IMAGE_SIDE * IMAGE_SIDE) as usize;

/// 根据扩展名判断某路径是否为受支持的图片文件
///
/// 支持 `.png`、`.jpg`、`.jpeg`（大小写不敏感）。
/// 注：这里只看扩展名，不检查文件内容；内容是否可解码由
/// [`load_grayscale_pixels`] 决定。
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "png" | "jpg" | "jpeg")
        }
        None => false,
    }
}

/// 将本地图片读取为28x28灰度图的像素序列
///
/// 流程：打开图片 -> 转为单通道灰度 -> 缩放到28x28 -> 按行优先顺序读出像素。
///
/// # 参数
/// - `path`: 图片文件路径
///
/// # 返回
/// 784个`u8`像素值（0-255），按行优先排列。
/// 解码失败时返回[`DataError::DecodeError`]，由调用方决定是跳过还是中止。
pub fn load_grayscale_pixels(path: &Path) -> Result<Vec<u8>, DataError> {
    let image = image::open(path).map_err(|source| DataError::DecodeError {
        path: path.to_path_buf(),
        source,
    })?;

    // 先转灰度、后缩放；尺寸已符合时跳过缩放，保证同尺寸图片的像素原样读出
    let gray = image.into_luma8();
    let gray = if gray.width() == IMAGE_SIDE && gray.height() == IMAGE_SIDE {
        gray
    } else {
        image::imageops::resize(&gray, IMAGE_SIDE, IMAGE_SIDE, FilterType::Triangle)
    };

    let pixels = gray.into_raw();
    debug_assert_eq!(pixels.len(), PIXEL_COUNT);

    Ok(pixels)
}
