//! GraphKit - 经典图算法演示库
//!
//! 提供以下算法：
//! - Floyd-Warshall 全源最短路径（含路径重构）
//! - Dijkstra 单源最短路径
//! - 可增删节点的依赖图拓扑排序（Kahn 算法）
//! - 深度优先、广度优先遍历与连通分量
//!
//! 核心库只接收已解析的图数据并返回结构化结果，不做任何控制台交互。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    all_pairs_shortest_paths, bfs, connected_components, dfs, reconstruct_path,
    single_source_shortest_path, topological_sort, AllPairsPaths, Component, Dijkstra,
    FloydWarshall, ShortestPath, Traversal,
};
pub use error::{Error, Result};
pub use graph::{DependencyGraph, Matrix, NamedDependencyGraph, NodeNames, UnweightedGraph, WeightedGraph};
pub use types::{DependencyEdge, Direction, NodeId, Weight, WeightedEdge, INFINITY};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
