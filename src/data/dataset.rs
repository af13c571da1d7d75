//! 图片文件夹数据集（内存变体）
//!
//! 与 CSV 变体走同一条扫描/解码流水线，但把结果累积在内存中：
//! 每张图片贡献一条 (归一化特征, 标签) 记录，特征为 784 个
//! [0.0, 1.0] 范围内的`f32`。

use std::path::Path;

use ndarray::{Array2, ArrayView1};

use crate::data::scan::{list_image_files, scan_label_dirs};
use crate::data::transforms::normalize_pixels;
use crate::errors::DataError;
use crate::vision::{self, PIXEL_COUNT};

/// 按标签文件夹整理的图片数据集
///
/// 特征矩阵形状为 [N, 784]，像素值已归一化到 [0.0, 1.0]；
/// 标签与特征按行一一对应。构建完成后不再变更。
#[derive(Debug, Clone)]
pub struct ImageFolderDataset {
    /// 特征数据 [N, 784]
    features: Array2<f32>,
    /// 标签数据 [N]
    labels: Vec<u32>,
    /// 样本数量
    len: usize,
}

impl ImageFolderDataset {
    /// 从根目录加载数据集
    ///
    /// # 参数
    /// - `root`: 包含 `0`、`1`、… 等类别文件夹的根目录
    ///
    /// # 返回
    /// 加载后的数据集。跳过策略与 CSV 变体一致：非数字命名的文件夹、
    /// 解码失败的单张图片都只打印提示后跳过；根目录不存在则返回
    /// [`DataError::DirectoryNotFound`]。
    pub fn load(root: &Path) -> Result<Self, DataError> {
        let label_dirs = scan_label_dirs(root)?;

        let mut features_data: Vec<f32> = Vec::new();
        let mut labels: Vec<u32> = Vec::new();

        for dir in &label_dirs {
            for image_path in list_image_files(&dir.path)? {
                match vision::load_grayscale_pixels(&image_path) {
                    Ok(pixels) => {
                        features_data.extend(normalize_pixels(&pixels));
                        labels.push(dir.label);
                    }
                    Err(err) => println!("  - {err}"),
                }
            }
        }

        let len = labels.len();
        let features = Array2::from_shape_vec((len, PIXEL_COUNT), features_data)
            .map_err(|e| DataError::FormatError(format!("特征矩阵形状不合法: {e}")))?;

        println!("加载了 {} 个样本", len);

        Ok(Self {
            features,
            labels,
            len,
        })
    }

    /// 数据集样本数量
    pub fn len(&self) -> usize {
        self.len
    }

    /// 数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 获取第 index 个样本
    ///
    /// # 返回
    /// (features, label) 元组
    /// - features: [784]，取值范围 [0.0, 1.0]
    /// - label: 类别标签
    pub fn get(&self, index: usize) -> Result<(ArrayView1<'_, f32>, u32), DataError> {
        if index >= self.len {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok((self.features.row(index), self.labels[index]))
    }

    /// 按样本顺序迭代 (features, label) 对
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (ArrayView1<'a, f32>, u32)> {
        self.features
            .rows()
            .into_iter()
            .zip(self.labels.iter().copied())
    }

    /// 单个样本的特征维度（784）
    pub fn input_dim(&self) -> usize {
        PIXEL_COUNT
    }

    /// 获取所有特征（用于批量处理）
    pub fn features(&self) -> &Array2<f32> {
        &self.features
    }

    /// 获取所有标签（用于批量处理）
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }
}
