//! 数据转换错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 数据集转换相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 输入根目录未找到（或不是目录）
    #[error("目录未找到: {0}")]
    DirectoryNotFound(PathBuf),

    /// IO 错误（如输出文件无法创建或写入）
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 单张图片解码失败
    #[error("图片 {path:?} 解码失败: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 格式错误（如像素数量与 28x28 布局不符）
    #[error("格式错误: {0}")]
    FormatError(String),

    /// 索引越界
    #[error("索引越界: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
