//! 数据变换函数

/// 将 0-255 像素值归一化到 0-1
///
/// # 参数
/// - `pixels`: 像素值序列，取值范围 [0, 255]
///
/// # 返回
/// 归一化后的`f32`序列，取值范围 [0.0, 1.0]，长度不变
pub fn normalize_pixels(pixels: &[u8]) -> Vec<f32> {
    pixels.iter().map(|&p| f32::from(p) / 255.0).collect()
}
