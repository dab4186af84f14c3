//! 随机图上的算法性质测试

use graphkit::{
    all_pairs_shortest_paths, bfs, connected_components, dfs, single_source_shortest_path,
    topological_sort, DependencyGraph, Direction, Error, NodeId, UnweightedGraph, Weight,
    WeightedEdge, WeightedGraph, INFINITY,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: std::ops::Range<u64> = 0..20;

fn random_weighted_graph(rng: &mut StdRng, n: usize, density: f64) -> WeightedGraph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(density) {
                edges.push(WeightedEdge::new(i, j, rng.gen_range(1..50)));
            }
        }
    }
    WeightedGraph::from_edges(n, &edges, Direction::Directed).unwrap()
}

fn random_dag(rng: &mut StdRng, n: usize) -> DependencyGraph {
    // 随机排列后只保留 "前 -> 后" 的边，保证无环
    let mut perm: Vec<NodeId> = (0..n).collect();
    for i in (1..n).rev() {
        perm.swap(i, rng.gen_range(0..=i));
    }
    let mut edges = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(0.3) {
                edges.push((perm[a], perm[b]));
            }
        }
    }
    DependencyGraph::new(n, &edges).unwrap()
}

fn random_unweighted_graph(rng: &mut StdRng, n: usize) -> (UnweightedGraph, Vec<(NodeId, NodeId)>) {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(0.15) {
                edges.push((a, b));
            }
        }
    }
    (UnweightedGraph::from_edges(n, &edges).unwrap(), edges)
}

fn path_weight(graph: &WeightedGraph, path: &[NodeId]) -> Weight {
    path.windows(2)
        .map(|w| graph.weight(w[0], w[1]).unwrap())
        .sum()
}

fn assert_respects_edges(graph: &DependencyGraph, order: &[NodeId]) {
    let mut position = vec![usize::MAX; graph.node_count()];
    for (pos, &node) in order.iter().enumerate() {
        assert_eq!(position[node], usize::MAX);
        position[node] = pos;
    }
    assert!(position.iter().all(|&p| p != usize::MAX));
    for edge in graph.edges() {
        assert!(position[edge.src] < position[edge.dest]);
    }
}

#[test]
fn all_pairs_satisfies_triangle_inequality() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_weighted_graph(&mut rng, 12, 0.25);
        let paths = all_pairs_shortest_paths(&graph);
        let d = paths.distances();

        for i in 0..12 {
            assert_eq!(d[(i, i)], 0);
            for j in 0..12 {
                for k in 0..12 {
                    if d[(i, k)] != INFINITY && d[(k, j)] != INFINITY {
                        assert!(d[(i, j)] <= d[(i, k)] + d[(k, j)]);
                    }
                }
            }
        }
    }
}

#[test]
fn reconstructed_paths_match_distances() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_weighted_graph(&mut rng, 10, 0.3);
        let paths = all_pairs_shortest_paths(&graph);

        for i in 0..10 {
            for j in 0..10 {
                let distance = paths.distance(i, j).unwrap();
                match paths.path(i, j) {
                    Ok(path) => {
                        assert_eq!(path.first(), Some(&i));
                        assert_eq!(path.last(), Some(&j));
                        assert_eq!(path_weight(&graph, &path), distance);
                    }
                    Err(Error::Unreachable { .. }) => assert_eq!(distance, INFINITY),
                    Err(e) => panic!("unexpected error {}", e),
                }
            }
        }
    }
}

#[test]
fn dijkstra_agrees_with_floyd_warshall() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_weighted_graph(&mut rng, 10, 0.3);
        let paths = all_pairs_shortest_paths(&graph);

        for s in 0..10 {
            for t in 0..10 {
                let expected = paths.distance(s, t).unwrap();
                match single_source_shortest_path(&graph, s, t) {
                    Ok(result) => {
                        assert_eq!(result.distance, expected);
                        assert_eq!(path_weight(&graph, &result.path), expected);
                    }
                    Err(Error::Unreachable { .. }) => assert_eq!(expected, INFINITY),
                    Err(e) => panic!("unexpected error {}", e),
                }
            }
        }
    }
}

#[test]
fn topological_order_is_valid_permutation() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_dag(&mut rng, 15);
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), 15);
        assert_respects_edges(&graph, &order);
    }
}

#[test]
fn topological_order_tracks_mutations() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = random_dag(&mut rng, 10);

        // 新节点依赖若干已有节点，不会引入环
        let deps: Vec<NodeId> = (0..graph.node_count()).filter(|_| rng.gen_bool(0.3)).collect();
        let added = graph.add_node(&deps).unwrap();
        let order = topological_sort(&graph).unwrap();
        assert!(order.contains(&added));
        assert_respects_edges(&graph, &order);

        let removed = rng.gen_range(0..graph.node_count());
        graph.remove_node(removed).unwrap();
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), graph.node_count());
        assert!(order.iter().all(|&i| i < graph.node_count()));
        assert_respects_edges(&graph, &order);
    }
}

#[test]
fn three_cycle_is_always_rejected() {
    let graph = DependencyGraph::new(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    assert!(matches!(
        topological_sort(&graph),
        Err(Error::CycleDetected { .. })
    ));
}

#[test]
fn bfs_visits_by_increasing_distance() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, edges) = random_unweighted_graph(&mut rng, 15);

        // 用单位权重的 Floyd-Warshall 求跳数
        let weighted: Vec<WeightedEdge> =
            edges.iter().map(|&(a, b)| WeightedEdge::new(a, b, 1)).collect();
        let hops = all_pairs_shortest_paths(
            &WeightedGraph::from_edges(15, &weighted, Direction::Undirected).unwrap(),
        );

        let order = bfs(&graph, 0).unwrap();
        let levels: Vec<Weight> = order
            .iter()
            .map(|&v| hops.distance(0, v).unwrap())
            .collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));

        let mut reached = dfs(&graph, 0).unwrap();
        let mut by_bfs = order.clone();
        reached.sort_unstable();
        by_bfs.sort_unstable();
        assert_eq!(reached, by_bfs);
    }
}

#[test]
fn components_partition_nodes() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, _) = random_unweighted_graph(&mut rng, 20);
        let components = connected_components(&graph);

        let mut owner = vec![usize::MAX; 20];
        for (c, component) in components.iter().enumerate() {
            for &node in component {
                assert_eq!(owner[node], usize::MAX, "节点 {} 属于多个分量", node);
                owner[node] = c;
            }
        }
        assert!(owner.iter().all(|&c| c != usize::MAX));

        for a in 0..20 {
            let reachable = dfs(&graph, a).unwrap();
            for b in 0..20 {
                assert_eq!(reachable.contains(&b), owner[a] == owner[b]);
            }
        }
    }
}

#[test]
fn components_example() {
    let graph = UnweightedGraph::from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
    assert_eq!(
        connected_components(&graph),
        vec![vec![0, 1, 2], vec![3, 4]]
    );
}
