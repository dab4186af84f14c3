//! 稠密带权图
//!
//! n x n 权重矩阵，INFINITY 表示无直接边，对角线为 0

use super::matrix::Matrix;
use crate::error::{Error, Result};
use crate::types::{is_finite, Direction, NodeId, Weight, WeightedEdge, INFINITY};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// n 个节点时允许的最大边权
///
/// 简单路径最多 n - 1 条边，总和严格小于 INFINITY，不会与哨兵值混淆
pub fn max_edge_weight(n: usize) -> Weight {
    INFINITY / (n.max(1) as Weight)
}

/// 稠密带权图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedGraph {
    weights: Matrix<Weight>,
}

impl WeightedGraph {
    /// 从完整权重矩阵构造
    ///
    /// 要求：n x n、对角线为 0、非对角元素为 INFINITY 或不超过
    /// [`max_edge_weight`] 的正数
    pub fn from_matrix(n: usize, weights: Matrix<Weight>) -> Result<Self> {
        if weights.rows() != n || weights.cols() != n {
            return Err(Error::Validation(format!(
                "权重矩阵应为 {}x{}, 实际为 {}x{}",
                n,
                n,
                weights.rows(),
                weights.cols()
            )));
        }

        for i in 0..n {
            for j in 0..n {
                let w = weights[(i, j)];
                if i == j {
                    if w != 0 {
                        return Err(Error::Validation(format!(
                            "对角线元素 ({}, {}) 必须为 0, 实际为 {}",
                            i, j, w
                        )));
                    }
                } else if w <= 0 {
                    return Err(Error::Validation(format!(
                        "边 ({}, {}) 的权重必须为正数, 实际为 {}",
                        i, j, w
                    )));
                } else if is_finite(w) && w > max_edge_weight(n) {
                    return Err(Error::Validation(format!(
                        "边 ({}, {}) 的权重 {} 超过上限 {}",
                        i,
                        j,
                        w,
                        max_edge_weight(n)
                    )));
                }
            }
        }

        debug!(nodes = n, "构建带权图");
        Ok(Self { weights })
    }

    /// 从嵌套行构造
    pub fn from_rows(n: usize, rows: Vec<Vec<Weight>>) -> Result<Self> {
        Self::from_matrix(n, Matrix::from_rows(rows)?)
    }

    /// 从边列表构造，未列出的边为 INFINITY
    pub fn from_edges(n: usize, edges: &[WeightedEdge], direction: Direction) -> Result<Self> {
        let mut weights = Matrix::square(n, INFINITY);
        for i in 0..n {
            weights[(i, i)] = 0;
        }

        for edge in edges {
            Error::check_index(edge.src, n)
                .and_then(|_| Error::check_index(edge.dest, n))
                .map_err(|e| Error::Validation(format!("边 {:?} 端点无效: {}", edge, e)))?;
            if edge.src == edge.dest {
                return Err(Error::Validation(format!("不支持自环: {:?}", edge)));
            }
            if edge.weight <= 0 || !is_finite(edge.weight) {
                return Err(Error::Validation(format!(
                    "边 {:?} 的权重必须为有限正数",
                    edge
                )));
            }

            weights[(edge.src, edge.dest)] = edge.weight;
            if direction == Direction::Undirected {
                weights[(edge.dest, edge.src)] = edge.weight;
            }
        }

        Self::from_matrix(n, weights)
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.weights.rows()
    }

    /// 有向边数量（不含对角线）
    pub fn edge_count(&self) -> usize {
        let n = self.node_count();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.has_edge(i, j))
            .count()
    }

    /// 边权重；越界时返回 None
    pub fn weight(&self, src: NodeId, dest: NodeId) -> Option<Weight> {
        self.weights.get(src, dest).copied()
    }

    /// 是否存在直接边
    pub fn has_edge(&self, src: NodeId, dest: NodeId) -> bool {
        src != dest && self.weight(src, dest).is_some_and(is_finite)
    }

    /// 矩阵是否对称（无向图）
    pub fn is_symmetric(&self) -> bool {
        let n = self.node_count();
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[(i, j)] == self.weights[(j, i)]))
    }

    /// 权重矩阵
    pub fn matrix(&self) -> &Matrix<Weight> {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: Weight = INFINITY;

    #[test]
    fn test_from_rows() {
        let g = WeightedGraph::from_rows(3, vec![vec![0, 4, INF], vec![4, 0, 1], vec![INF, 1, 0]])
            .unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.weight(0, 1), Some(4));
        assert!(!g.has_edge(0, 2));
        assert!(!g.has_edge(1, 1));
        assert!(g.is_symmetric());
    }

    #[test]
    fn test_non_square_rejected() {
        let err = WeightedGraph::from_rows(2, vec![vec![0, 1, 2], vec![1, 0, 3]]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = WeightedGraph::from_rows(3, vec![vec![0, 1], vec![1, 0]]).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_bad_weights_rejected() {
        let negative = WeightedGraph::from_rows(2, vec![vec![0, -3], vec![1, 0]]);
        assert!(matches!(negative, Err(Error::Validation(_))));

        let zero = WeightedGraph::from_rows(2, vec![vec![0, 0], vec![1, 0]]);
        assert!(matches!(zero, Err(Error::Validation(_))));

        let diagonal = WeightedGraph::from_rows(2, vec![vec![5, 1], vec![1, 0]]);
        assert!(matches!(diagonal, Err(Error::Validation(_))));
    }

    #[test]
    fn test_weight_limit() {
        let limit = max_edge_weight(3);
        let too_heavy = [WeightedEdge::new(0, 1, limit + 1)];
        assert!(matches!(
            WeightedGraph::from_edges(3, &too_heavy, Direction::Directed),
            Err(Error::Validation(_))
        ));

        let half = INF / 2 + 1;
        let rows = vec![vec![0, half, INF], vec![INF, 0, half], vec![INF, INF, 0]];
        assert!(matches!(
            WeightedGraph::from_rows(3, rows),
            Err(Error::Validation(_))
        ));

        let at_limit = [WeightedEdge::new(0, 1, limit), WeightedEdge::new(1, 2, limit)];
        assert!(WeightedGraph::from_edges(3, &at_limit, Direction::Directed).is_ok());
    }

    #[test]
    fn test_from_edges() {
        let edges = [WeightedEdge::new(0, 1, 2), WeightedEdge::new(1, 2, 5)];

        let directed = WeightedGraph::from_edges(3, &edges, Direction::Directed).unwrap();
        assert_eq!(directed.weight(1, 0), Some(INF));
        assert!(!directed.is_symmetric());

        let undirected = WeightedGraph::from_edges(3, &edges, Direction::Undirected).unwrap();
        assert_eq!(undirected.weight(2, 1), Some(5));
        assert!(undirected.is_symmetric());
    }

    #[test]
    fn test_from_edges_rejects_invalid() {
        let out_of_range = [WeightedEdge::new(0, 3, 1)];
        assert!(WeightedGraph::from_edges(3, &out_of_range, Direction::Directed).is_err());

        let self_loop = [WeightedEdge::new(1, 1, 1)];
        assert!(WeightedGraph::from_edges(3, &self_loop, Direction::Directed).is_err());

        let zero = [WeightedEdge::new(0, 1, 0)];
        assert!(WeightedGraph::from_edges(3, &zero, Direction::Directed).is_err());
    }
}
