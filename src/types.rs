//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点 ID（稠密索引，取值范围 `[0, n)`）
pub type NodeId = usize;

/// 边权重
pub type Weight = i64;

/// "无直接边" 哨兵值
pub const INFINITY: Weight = Weight::MAX;

/// 判断权重是否有限
#[inline]
pub fn is_finite(weight: Weight) -> bool {
    weight != INFINITY
}

/// 带权边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub src: NodeId,
    pub dest: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(src: NodeId, dest: NodeId, weight: Weight) -> Self {
        Self { src, dest, weight }
    }
}

/// 依赖边：`dest` 依赖 `src`，排序时 `src` 必须在 `dest` 之前
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub src: NodeId,
    pub dest: NodeId,
}

impl DependencyEdge {
    pub fn new(src: NodeId, dest: NodeId) -> Self {
        Self { src, dest }
    }
}

impl From<(NodeId, NodeId)> for DependencyEdge {
    fn from((src, dest): (NodeId, NodeId)) -> Self {
        Self { src, dest }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dest)
    }
}

/// 边方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// 有向边（只写入 src -> dest）
    Directed,
    /// 无向边（双向写入）
    Undirected,
}

/// 权重的显示形式，无穷大显示为 INF
pub fn format_weight(weight: Weight) -> String {
    if is_finite(weight) {
        weight.to_string()
    } else {
        "INF".to_string()
    }
}
