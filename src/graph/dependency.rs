//! 依赖图
//!
//! 稀疏邻接表 + 入度表。图持有自己的边列表，节点集合变化时
//! 由边列表整体重建邻接表与入度，删除节点后索引保持稠密。

use super::names::NodeNames;
use crate::algorithm::topological_sort;
use crate::error::{Error, Result};
use crate::types::{DependencyEdge, NodeId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// 单个节点的后继（依赖它的节点），按边插入顺序
pub type Dependents = SmallVec<[NodeId; 4]>;

/// 依赖图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    node_count: usize,
    edges: Vec<DependencyEdge>,
    adjacency: Vec<Dependents>,
    in_degree: Vec<usize>,
}

impl DependencyGraph {
    /// 由节点数和 `(src, dest)` 对构造，O(E)
    ///
    /// 重复边只保留一条
    pub fn new(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let edges: Vec<DependencyEdge> = edges.iter().copied().map(Into::into).collect();
        Self::from_edges(n, &edges)
    }

    /// 由依赖边列表构造
    pub fn from_edges(n: usize, edges: &[DependencyEdge]) -> Result<Self> {
        let mut unique: Vec<DependencyEdge> = Vec::new();
        for &edge in edges {
            if edge.src >= n || edge.dest >= n {
                return Err(Error::Validation(format!(
                    "依赖边 {} 引用了不存在的节点 (节点数 {})",
                    edge, n
                )));
            }
            if !unique.contains(&edge) {
                unique.push(edge);
            }
        }

        let mut graph = Self {
            node_count: n,
            edges: unique,
            adjacency: Vec::new(),
            in_degree: Vec::new(),
        };
        graph.rebuild();

        debug!(nodes = n, edges = graph.edges.len(), "构建依赖图");
        Ok(graph)
    }

    /// 空图
    pub fn empty() -> Self {
        Self {
            node_count: 0,
            edges: Vec::new(),
            adjacency: Vec::new(),
            in_degree: Vec::new(),
        }
    }

    /// 由边列表重建邻接表和入度
    fn rebuild(&mut self) {
        self.adjacency = vec![Dependents::new(); self.node_count];
        self.in_degree = vec![0; self.node_count];

        for edge in &self.edges {
            self.adjacency[edge.src].push(edge.dest);
            self.in_degree[edge.dest] += 1;
        }
    }

    /// 追加新节点（索引为当前节点数），为每个依赖添加一条边
    ///
    /// 任一依赖不存在时返回 UnknownDependency，图保持不变
    pub fn add_node(&mut self, dependencies: &[NodeId]) -> Result<NodeId> {
        if let Some(&missing) = dependencies.iter().find(|&&d| d >= self.node_count) {
            return Err(Error::UnknownDependency(format!(
                "节点 {} (节点数 {})",
                missing, self.node_count
            )));
        }

        let new_node = self.node_count;
        self.node_count += 1;
        for &dep in dependencies {
            let edge = DependencyEdge::new(dep, new_node);
            if !self.edges.contains(&edge) {
                self.edges.push(edge);
            }
        }
        self.rebuild();

        debug!(node = new_node, dependencies = ?dependencies, "添加节点");
        Ok(new_node)
    }

    /// 删除节点及其所有边，大于 index 的节点索引减一
    pub fn remove_node(&mut self, index: NodeId) -> Result<()> {
        Error::check_index(index, self.node_count)?;

        let shift = |node: NodeId| if node > index { node - 1 } else { node };
        self.edges = self
            .edges
            .iter()
            .filter(|e| e.src != index && e.dest != index)
            .map(|e| DependencyEdge::new(shift(e.src), shift(e.dest)))
            .collect();
        self.node_count -= 1;
        self.rebuild();

        debug!(node = index, remaining = self.node_count, "删除节点");
        Ok(())
    }

    /// 拓扑排序
    pub fn topological_sort(&self) -> Result<Vec<NodeId>> {
        topological_sort(self)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 当前边列表
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// 依赖 node 的节点
    pub fn dependents(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// 节点入度
    pub fn in_degree(&self, node: NodeId) -> Option<usize> {
        self.in_degree.get(node).copied()
    }

    /// 入度表
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::empty()
    }
}

/// 按名称管理的依赖图
///
/// 名称表与依赖图同步增删，索引始终一一对应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedDependencyGraph {
    names: NodeNames,
    graph: DependencyGraph,
}

impl NamedDependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加节点及其依赖（按名称）
    pub fn add(&mut self, name: &str, dependencies: &[&str]) -> Result<NodeId> {
        if self.names.index_of(name).is_some() {
            return Err(Error::Validation(format!("节点名称重复: {}", name)));
        }

        let indices = dependencies
            .iter()
            .map(|dep| {
                self.names
                    .index_of(dep)
                    .ok_or_else(|| Error::UnknownDependency(dep.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        // 先校验名称，避免图与名称表不一致
        let mut names = self.names.clone();
        names.push(name)?;

        let index = self.graph.add_node(&indices)?;
        self.names = names;
        Ok(index)
    }

    /// 按名称删除节点，返回其原索引
    pub fn remove(&mut self, name: &str) -> Result<NodeId> {
        let index = self
            .names
            .index_of(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))?;

        self.graph.remove_node(index)?;
        self.names.remove(index)?;
        Ok(index)
    }

    /// 按名称给出拓扑序
    pub fn topological_order(&self) -> Result<Vec<&str>> {
        let order = self.graph.topological_sort()?;
        Ok(order
            .into_iter()
            .filter_map(|i| self.names.name(i))
            .collect())
    }

    pub fn names(&self) -> &NodeNames {
        &self.names
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
