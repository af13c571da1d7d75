//! # Img2Mnist
//!
//! 把按「数字命名的文件夹」整理的图片集转换为 MNIST 风格的扁平数据集。
//! 文件夹名即类别标签（`0`、`1`、…），每张图片被转为单通道灰度图并缩放到
//! 28x28，得到 784 个按行优先排列的像素值。
//!
//! 两种产出方式：
//! - [`data::convert_image_folders_to_csv`]：逐行写入 CSV 文件
//!   （表头 `label,pixel_0,...,pixel_783`，像素值 0-255）；
//! - [`data::ImageFolderDataset`]：在内存中累积 (特征, 标签) 对，
//!   像素值归一化到 0.0-1.0。

pub mod data;
pub mod errors;
pub mod vision;
