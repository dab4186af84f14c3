//! 图模型
//!
//! 稠密带权图、稀疏依赖图、无权邻接矩阵图以及节点名称表

mod dependency;
mod matrix;
mod names;
mod unweighted;
mod weighted;

pub use dependency::{Dependents, DependencyGraph, NamedDependencyGraph};
pub use matrix::Matrix;
pub use names::NodeNames;
pub use unweighted::UnweightedGraph;
pub use weighted::{max_edge_weight, WeightedGraph};
