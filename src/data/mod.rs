//! 数据集构建模块
//!
//! 提供从「按标签命名的文件夹」到扁平数据集的整条流水线：
//! 目录扫描 -> 图片读取 -> 行构建 -> 落盘（或累积到内存）。
//!
//! # 主要组件
//!
//! - [`scan`]: 标签文件夹扫描（纯函数式的标签解析 + 确定性排序）
//! - [`convert_image_folders_to_csv`]: CSV 变体（像素值 0-255）
//! - [`ImageFolderDataset`]: 内存变体（像素值归一化到 0.0-1.0）
//! - [`transforms`]: 数据变换函数（归一化等）
//!
//! # 使用示例
//!
//! ```ignore
//! use std::path::Path;
//! use img2mnist::data::{convert_image_folders_to_csv, ImageFolderDataset};
//!
//! // 写出 CSV
//! let total = convert_image_folders_to_csv(
//!     Path::new("mnist_images"),
//!     Path::new("mnist_dataset.csv"),
//! )?;
//!
//! // 或者直接加载到内存
//! let dataset = ImageFolderDataset::load(Path::new("mnist_images"))?;
//! let (features, label) = dataset.get(0)?;
//! ```

mod convert;
mod dataset;
pub mod scan;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use convert::convert_image_folders_to_csv;
pub use dataset::ImageFolderDataset;
pub use scan::{LabelDir, parse_label, scan_label_dirs};
