//! 无权图遍历
//!
//! 深度优先、广度优先以及连通分量。深度优先使用显式栈，
//! 访问顺序与递归版本一致（邻居按索引从小到大）。

use crate::error::{Error, Result};
use crate::graph::UnweightedGraph;
use crate::types::NodeId;
use std::collections::VecDeque;
use tracing::debug;

/// 连通分量：按访问顺序排列的节点
pub type Component = Vec<NodeId>;

/// 遍历器
pub struct Traversal<'a> {
    graph: &'a UnweightedGraph,
}

impl<'a> Traversal<'a> {
    pub fn new(graph: &'a UnweightedGraph) -> Self {
        Self { graph }
    }

    /// 深度优先遍历，返回访问顺序
    pub fn dfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        let n = self.graph.node_count();
        Error::check_index(start, n)?;

        let mut visited = vec![false; n];
        let order = self.dfs_from(start, &mut visited);
        debug!(start, visited = order.len(), "DFS 完成");
        Ok(order)
    }

    /// 从 start 出发的深度优先遍历，共享 visited
    fn dfs_from(&self, start: NodeId, visited: &mut [bool]) -> Vec<NodeId> {
        let n = self.graph.node_count();
        let mut order = vec![start];
        visited[start] = true;

        // 栈帧：(节点, 下一个待检查的邻居索引)
        let mut stack: Vec<(NodeId, NodeId)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let next = (cursor..n).find(|&v| !visited[v] && v != node && self.graph.is_adjacent(node, v));

            match next {
                Some(v) => {
                    frame.1 = v + 1;
                    visited[v] = true;
                    order.push(v);
                    stack.push((v, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        order
    }

    /// 广度优先遍历，返回访问顺序
    pub fn bfs(&self, start: NodeId) -> Result<Vec<NodeId>> {
        let n = self.graph.node_count();
        Error::check_index(start, n)?;

        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for neighbor in self.graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(start, visited = order.len(), "BFS 完成");
        Ok(order)
    }

    /// 连通分量：按索引递增选择未访问节点作为起点，逐个做深度优先遍历
    pub fn connected_components(&self) -> Vec<Component> {
        let n = self.graph.node_count();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for node in 0..n {
            if !visited[node] {
                components.push(self.dfs_from(node, &mut visited));
            }
        }

        debug!(nodes = n, components = components.len(), "连通分量计算完成");
        components
    }
}
