//! 二维矩阵
//!
//! 行主序的扁平缓冲区，按行跨度寻址，构造时校验尺寸

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// 行主序二维矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// 创建 rows x cols 矩阵，所有元素初始化为 fill
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// 创建 n x n 方阵
    pub fn square(n: usize, fill: T) -> Self {
        Self::new(n, n, fill)
    }

    /// 从嵌套行构造，所有行长度必须一致
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::Validation(format!(
                    "第 {} 行长度为 {}, 期望 {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }
}

impl<T> Matrix<T> {
    /// 行数
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 方阵的阶数；非方阵返回 None
    pub fn dimension(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// 带边界检查的读取
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// 带边界检查的可变读取
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// 获取一整行
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// 按行迭代
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// 转为嵌套行（用于输出）
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    fn offset(&self, (row, col): (usize, usize)) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "矩阵下标越界: ({}, {}) 超出 {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.data[self.offset(index)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}
