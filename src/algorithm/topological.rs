//! 拓扑排序（Kahn 算法）

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use crate::types::NodeId;
use tracing::debug;

/// 对依赖图做拓扑排序
///
/// 工作表为后进先出的栈，初始按索引递增压入所有入度为 0 的节点。
/// 每次调用都复制一份入度表，因此在 `add_node` / `remove_node` 之后可以
/// 直接再次调用。排序结束仍有入度非 0 的节点时返回 `CycleDetected`，
/// 不返回部分结果。
pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<NodeId>> {
    let n = graph.node_count();
    let mut in_degree = graph.in_degrees().to_vec();

    let mut worklist: Vec<NodeId> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = worklist.pop() {
        order.push(node);

        for &dependent in graph.dependents(node) {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                worklist.push(dependent);
            }
        }
    }

    let unresolved = in_degree.iter().filter(|&&d| d != 0).count();
    if unresolved > 0 {
        debug!(nodes = n, unresolved, "拓扑排序失败：存在环");
        return Err(Error::CycleDetected { unresolved });
    }

    debug!(nodes = n, "拓扑排序完成");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DependencyEdge;

    fn assert_valid_order(graph: &DependencyGraph, order: &[NodeId]) {
        assert_eq!(order.len(), graph.node_count());
        let mut position = vec![usize::MAX; graph.node_count()];
        for (pos, &node) in order.iter().enumerate() {
            assert_eq!(position[node], usize::MAX, "节点 {} 重复出现", node);
            position[node] = pos;
        }
        for edge in graph.edges() {
            assert!(
                position[edge.src] < position[edge.dest],
                "边 {} 顺序错误",
                edge
            );
        }
    }

    #[test]
    fn test_diamond() {
        let graph = DependencyGraph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let order = topological_sort(&graph).unwrap();
        assert_valid_order(&graph, &order);
        // 后进先出：0 之后先弹出最后压入的 2
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_lifo_seed_order() {
        let graph = DependencyGraph::new(3, &[]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::empty();
        assert!(topological_sort(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_detected() {
        // A -> B -> C -> A
        let graph = DependencyGraph::new(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let err = topological_sort(&graph).unwrap_err();
        assert!(matches!(err, Error::CycleDetected { unresolved: 3 }));
    }

    #[test]
    fn test_partial_cycle_is_still_failure() {
        // 0 可排序，1 <-> 2 成环
        let graph = DependencyGraph::new(3, &[(0, 1), (1, 2), (2, 1)]).unwrap();
        let err = graph.topological_sort().unwrap_err();
        assert!(matches!(err, Error::CycleDetected { unresolved: 2 }));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let graph = DependencyGraph::new(2, &[(1, 1)]).unwrap();
        assert!(matches!(
            topological_sort(&graph),
            Err(Error::CycleDetected { unresolved: 1 })
        ));
    }

    #[test]
    fn test_add_node_reflected_in_next_sort() {
        let mut graph = DependencyGraph::new(2, &[(0, 1)]).unwrap();
        let c = graph.add_node(&[1]).unwrap();

        let order = graph.topological_sort().unwrap();
        assert_valid_order(&graph, &order);
        assert_eq!(order, vec![0, 1, c]);
    }

    #[test]
    fn test_remove_node_reflected_in_next_sort() {
        // [A, B, C]，B -> C；删除 A
        let mut graph = DependencyGraph::new(3, &[(1, 2)]).unwrap();
        graph.remove_node(0).unwrap();

        let order = graph.topological_sort().unwrap();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(graph.edges(), &[DependencyEdge::new(0, 1)]);
    }

    #[test]
    fn test_removing_node_breaks_cycle() {
        let mut graph = DependencyGraph::new(4, &[(0, 1), (1, 2), (2, 1), (2, 3)]).unwrap();
        assert!(graph.topological_sort().is_err());

        graph.remove_node(2).unwrap();
        let order = graph.topological_sort().unwrap();
        assert_valid_order(&graph, &order);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let graph = DependencyGraph::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let first = graph.topological_sort().unwrap();
        let second = graph.topological_sort().unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.in_degrees(), &[0, 1, 1, 2]);
    }
}
