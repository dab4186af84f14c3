//! 无权邻接矩阵图
//!
//! n x n 的 0/1 矩阵。遍历时按无向图解释：只要 `m[i][j]` 或 `m[j][i]`
//! 为 1，两个节点即相邻。

use super::matrix::Matrix;
use crate::error::{Error, Result};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 无权图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnweightedGraph {
    adjacency: Matrix<u8>,
}

impl UnweightedGraph {
    /// 从完整的 0/1 矩阵构造
    pub fn from_matrix(n: usize, adjacency: Matrix<u8>) -> Result<Self> {
        if adjacency.rows() != n || adjacency.cols() != n {
            return Err(Error::Validation(format!(
                "邻接矩阵应为 {}x{}, 实际为 {}x{}",
                n,
                n,
                adjacency.rows(),
                adjacency.cols()
            )));
        }

        for (i, row) in adjacency.iter_rows().enumerate() {
            if let Some(j) = row.iter().position(|&v| v > 1) {
                return Err(Error::Validation(format!(
                    "邻接矩阵元素 ({}, {}) 只能为 0 或 1, 实际为 {}",
                    i, j, row[j]
                )));
            }
        }

        let graph = Self { adjacency };
        if !graph.is_symmetric() {
            warn!(nodes = n, "邻接矩阵不对称，遍历时按无向图处理");
        }
        debug!(nodes = n, "构建无权图");
        Ok(graph)
    }

    /// 从嵌套行构造；接受任意整数以便报告越界值
    pub fn from_rows(n: usize, rows: Vec<Vec<i64>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, v)| match v {
                        0 => Ok(0u8),
                        1 => Ok(1u8),
                        other => Err(Error::Validation(format!(
                            "邻接矩阵元素 ({}, {}) 只能为 0 或 1, 实际为 {}",
                            i, j, other
                        ))),
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_matrix(n, Matrix::from_rows(rows)?)
    }

    /// 从无向边列表构造（对称矩阵）
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut adjacency = Matrix::square(n, 0u8);
        for &(a, b) in edges {
            if a >= n || b >= n {
                return Err(Error::Validation(format!(
                    "边 ({}, {}) 引用了不存在的节点 (节点数 {})",
                    a, b, n
                )));
            }
            adjacency[(a, b)] = 1;
            adjacency[(b, a)] = 1;
        }
        Self::from_matrix(n, adjacency)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.rows()
    }

    /// 无向解释下是否相邻
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(a, b) == Some(&1) || self.adjacency.get(b, a) == Some(&1)
    }

    /// 相邻节点，按索引递增
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).filter(move |&other| other != node && self.is_adjacent(node, other))
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.node_count();
        (0..n).all(|i| (i + 1..n).all(|j| self.adjacency[(i, j)] == self.adjacency[(j, i)]))
    }

    pub fn matrix(&self) -> &Matrix<u8> {
        &self.adjacency
    }
}
