//! 图算法模块
//!
//! 包含最短路径、拓扑排序和无权图遍历算法

mod shortest_path;
mod topological;
mod traversal;

pub use shortest_path::{reconstruct_path, AllPairsPaths, Dijkstra, FloydWarshall, ShortestPath};
pub use topological::topological_sort;
pub use traversal::{Component, Traversal};

use crate::error::Result;
use crate::graph::{UnweightedGraph, WeightedGraph};
use crate::types::NodeId;

/// 全源最短路径
pub fn all_pairs_shortest_paths(graph: &WeightedGraph) -> AllPairsPaths {
    FloydWarshall::new(graph).run()
}

/// 单源最短路径
pub fn single_source_shortest_path(
    graph: &WeightedGraph,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath> {
    Dijkstra::new(graph).shortest_path(source, target)
}

/// 深度优先遍历
pub fn dfs(graph: &UnweightedGraph, start: NodeId) -> Result<Vec<NodeId>> {
    Traversal::new(graph).dfs(start)
}

/// 广度优先遍历
pub fn bfs(graph: &UnweightedGraph, start: NodeId) -> Result<Vec<NodeId>> {
    Traversal::new(graph).bfs(start)
}

/// 连通分量
pub fn connected_components(graph: &UnweightedGraph) -> Vec<Component> {
    Traversal::new(graph).connected_components()
}
