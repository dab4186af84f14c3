//! 最短路径算法
//!
//! - Floyd-Warshall：全源最短路径，附带下一跳矩阵用于重构路径
//! - Dijkstra：单源最短路径，O(n²) 稠密选择，记录前驱节点

use crate::error::{Error, Result};
use crate::graph::{Matrix, WeightedGraph};
use crate::types::{is_finite, NodeId, Weight, INFINITY};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// 全源最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPairsPaths {
    /// 距离矩阵
    distances: Matrix<Weight>,
    /// 下一跳矩阵：`next_hops[i][j]` 为 i 到 j 最短路径上 i 之后的第一个节点
    next_hops: Matrix<NodeId>,
}

impl AllPairsPaths {
    pub fn node_count(&self) -> usize {
        self.distances.rows()
    }

    pub fn distances(&self) -> &Matrix<Weight> {
        &self.distances
    }

    pub fn next_hops(&self) -> &Matrix<NodeId> {
        &self.next_hops
    }

    /// 最短距离，越界返回 None
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.distances.get(from, to).copied()
    }

    /// 重构 from 到 to 的路径
    pub fn path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        reconstruct_path(self, from, to)
    }

    /// 拆分为 (距离矩阵, 下一跳矩阵)
    pub fn into_parts(self) -> (Matrix<Weight>, Matrix<NodeId>) {
        (self.distances, self.next_hops)
    }
}

/// Floyd-Warshall 全源最短路径
pub struct FloydWarshall<'a> {
    graph: &'a WeightedGraph,
}

impl<'a> FloydWarshall<'a> {
    pub fn new(graph: &'a WeightedGraph) -> Self {
        Self { graph }
    }

    /// 执行算法，O(n³) 时间，O(n²) 空间
    pub fn run(&self) -> AllPairsPaths {
        let n = self.graph.node_count();
        let mut dist = self.graph.matrix().clone();
        let mut next = Matrix::square(n, 0);
        for i in 0..n {
            for j in 0..n {
                next[(i, j)] = j;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let via = dist[(i, k)];
                if !is_finite(via) {
                    continue;
                }
                for j in 0..n {
                    let tail = dist[(k, j)];
                    if !is_finite(tail) {
                        continue;
                    }
                    let through = via.saturating_add(tail);
                    if through < dist[(i, j)] {
                        dist[(i, j)] = through;
                        // 对角线保持 "无后继" 语义
                        if i != j {
                            next[(i, j)] = next[(i, k)];
                        }
                    }
                }
            }
            trace!(k, "完成中间节点松弛");
        }

        debug!(nodes = n, "Floyd-Warshall 完成");
        AllPairsPaths {
            distances: dist,
            next_hops: next,
        }
    }
}

/// 沿下一跳矩阵重构 from 到 to 的路径
pub fn reconstruct_path(paths: &AllPairsPaths, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
    let n = paths.node_count();
    Error::check_index(from, n)?;
    Error::check_index(to, n)?;

    if from == to {
        return Ok(vec![from]);
    }
    if !is_finite(paths.distances[(from, to)]) {
        return Err(Error::Unreachable { from, to });
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        current = paths.next_hops[(current, to)];
        path.push(current);
        // 正权图中最短路径不会重复经过节点
        if path.len() > n {
            return Err(Error::Unreachable { from, to });
        }
    }

    Ok(path)
}

/// 单源最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub source: NodeId,
    pub target: NodeId,
    /// 总距离
    pub distance: Weight,
    /// 从 source 到 target 的节点序列
    pub path: Vec<NodeId>,
}

/// Dijkstra 单源最短路径（稠密选择，无优先队列）
pub struct Dijkstra<'a> {
    graph: &'a WeightedGraph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a WeightedGraph) -> Self {
        Self { graph }
    }

    /// 计算 source 到所有节点的距离和前驱
    fn run(&self, source: NodeId) -> Result<(Vec<Weight>, Vec<Option<NodeId>>)> {
        let n = self.graph.node_count();
        Error::check_index(source, n)?;

        let mut distance = vec![INFINITY; n];
        let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
        let mut visited = vec![false; n];
        distance[source] = 0;

        // 没有可达的未访问节点时结束
        while let Some(u) = Self::closest_unvisited(&distance, &visited) {
            visited[u] = true;

            for v in 0..n {
                if visited[v] || v == u {
                    continue;
                }
                let w = self.graph.matrix()[(u, v)];
                if !is_finite(w) {
                    continue;
                }
                let candidate = distance[u].saturating_add(w);
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                }
            }
        }

        debug!(source, nodes = n, "Dijkstra 完成");
        Ok((distance, predecessor))
    }

    /// 未访问节点中距离最小者，距离相同取索引最小
    fn closest_unvisited(distance: &[Weight], visited: &[bool]) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for (i, &d) in distance.iter().enumerate() {
            if visited[i] || !is_finite(d) {
                continue;
            }
            if best.map_or(true, |b| d < distance[b]) {
                best = Some(i);
            }
        }
        best
    }

    /// source 到所有节点的最短距离，不可达为 INFINITY
    pub fn distances(&self, source: NodeId) -> Result<Vec<Weight>> {
        self.run(source).map(|(distance, _)| distance)
    }

    /// source 到 target 的最短路径
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Result<ShortestPath> {
        Error::check_index(target, self.graph.node_count())?;
        let (distance, predecessor) = self.run(source)?;

        if !is_finite(distance[target]) {
            return Err(Error::Unreachable {
                from: source,
                to: target,
            });
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = predecessor[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        Ok(ShortestPath {
            source,
            target,
            distance: distance[target],
            path,
        })
    }
}
