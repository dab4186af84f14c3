//! GraphKit 演示脚本
//!
//! 依次演示最短路径、拓扑排序和遍历算法

use graphkit::{
    all_pairs_shortest_paths, connected_components, single_source_shortest_path,
    NamedDependencyGraph, NodeNames, Traversal, UnweightedGraph, WeightedGraph, INFINITY,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("GraphKit 演示");
    println!("=============\n");

    // 1. 最短路径
    println!("1. 最短路径...\n");
    let cities = NodeNames::from_names(["Lima", "Cusco", "Puno", "Tacna"])?;
    let graph = WeightedGraph::from_rows(
        4,
        vec![
            vec![0, 5, INFINITY, 9],
            vec![5, 0, 2, INFINITY],
            vec![INFINITY, 2, 0, 3],
            vec![9, INFINITY, 3, 0],
        ],
    )?;

    let paths = all_pairs_shortest_paths(&graph);
    for from in 0..graph.node_count() {
        for to in 0..graph.node_count() {
            let route: Vec<String> = paths
                .path(from, to)?
                .into_iter()
                .map(|i| cities.label(i))
                .collect();
            println!(
                "   {} -> {}: {:?} ({})",
                cities.label(from),
                cities.label(to),
                route,
                paths.distance(from, to).unwrap_or(INFINITY)
            );
        }
    }

    let lima = cities.index_of("Lima").unwrap_or(0);
    let puno = cities.index_of("Puno").unwrap_or(2);
    let result = single_source_shortest_path(&graph, lima, puno)?;
    println!("\n   Dijkstra Lima -> Puno: {:?}, 距离 {}\n", result.path, result.distance);

    // 2. 拓扑排序
    println!("2. 拓扑排序...\n");
    let mut subjects = NamedDependencyGraph::new();
    subjects.add("Programacion", &[])?;
    subjects.add("Matematica", &[])?;
    subjects.add("Estructuras", &["Programacion"])?;
    subjects.add("Algoritmos", &["Estructuras", "Matematica"])?;
    println!("   顺序: {}", subjects.topological_order()?.join(" --> "));

    subjects.remove("Matematica")?;
    println!("   删除 Matematica 后: {}\n", subjects.topological_order()?.join(" --> "));

    // 3. 遍历
    println!("3. 遍历...\n");
    let graph = UnweightedGraph::from_edges(6, &[(0, 1), (0, 2), (1, 3), (4, 5)])?;
    let traversal = Traversal::new(&graph);
    println!("   DFS(0): {:?}", traversal.dfs(0)?);
    println!("   BFS(0): {:?}", traversal.bfs(0)?);
    println!("   连通分量: {:?}", connected_components(&graph));

    Ok(())
}
