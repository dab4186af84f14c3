//! 交互会话
//!
//! 保存当前加载的图，把一行命令解析为图数据并调用算法。
//! 会话本身不做任何输出，结果以 `Report` 返回给打印器。

use crate::algorithm::{AllPairsPaths, Dijkstra, FloydWarshall, Traversal};
use crate::error::{Error, Result};
use crate::graph::{NamedDependencyGraph, NodeNames, UnweightedGraph, WeightedGraph};
use crate::types::{is_finite, NodeId, Weight, INFINITY};
use serde::{Serialize, Serializer};
use tracing::debug;

/// 命令执行结果
#[derive(Debug)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 算法结果
    Report(Report),
}

/// 算法结果报告（节点以显示标签给出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// 全源最短路径
    AllPairs {
        labels: Vec<String>,
        #[serde(serialize_with = "serialize_weight_rows")]
        distances: Vec<Vec<Weight>>,
        next_hops: Vec<Vec<String>>,
    },
    /// 单条最短路径
    Path {
        path: Vec<String>,
        #[serde(serialize_with = "serialize_weight")]
        distance: Weight,
    },
    /// 访问顺序或拓扑序
    Order { title: String, nodes: Vec<String> },
    /// 连通分量
    Components { components: Vec<Vec<String>> },
}

/// JSON 中 INFINITY 写为 null
fn finite(weight: Weight) -> Option<Weight> {
    is_finite(weight).then_some(weight)
}

fn serialize_weight<S: Serializer>(
    weight: &Weight,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    finite(*weight).serialize(serializer)
}

fn serialize_weight_rows<S: Serializer>(
    rows: &[Vec<Weight>],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(
        rows.iter()
            .map(|row| row.iter().map(|&w| finite(w)).collect::<Vec<_>>()),
    )
}

/// 会话状态
#[derive(Debug, Default)]
pub struct Session {
    names: NodeNames,
    weighted: Option<WeightedGraph>,
    all_pairs: Option<AllPairsPaths>,
    unweighted: Option<UnweightedGraph>,
    catalog: NamedDependencyGraph,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行一行命令
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(CommandResult::Continue);
        }

        let parts: Vec<&str> = input.splitn(2, char::is_whitespace).collect();
        let cmd = parts[0].to_lowercase();
        let args = parts.get(1).copied().unwrap_or("").trim();
        debug!(command = %cmd, "执行命令");

        match cmd.as_str() {
            "quit" | "exit" | "q" => Ok(CommandResult::Exit),
            "help" | "h" | "?" => Ok(CommandResult::Message(help_text())),
            "show" | "info" => Ok(CommandResult::Message(self.summary())),

            "names" => {
                self.names = NodeNames::from_names(args.split_whitespace())?;
                Ok(CommandResult::Message(format!(
                    "已设置 {} 个节点名称",
                    self.names.len()
                )))
            }

            "weights" | "uweights" => {
                let mut rows = parse_weight_rows(args)?;
                if cmd == "uweights" {
                    mirror_upper_triangle(&mut rows);
                }
                let n = rows.len();
                let graph = WeightedGraph::from_rows(n, rows)?;
                let edges = graph.edge_count();
                self.weighted = Some(graph);
                self.all_pairs = None;
                Ok(CommandResult::Message(format!(
                    "带权图已加载: {} 个节点, {} 条有向边",
                    n, edges
                )))
            }

            "adjacency" | "adj" => {
                let rows = parse_rows(args)?;
                let n = rows.len();
                self.unweighted = Some(UnweightedGraph::from_rows(n, rows)?);
                Ok(CommandResult::Message(format!("无权图已加载: {} 个节点", n)))
            }

            "floyd" => {
                let graph = self.weighted_graph()?;
                let paths = FloydWarshall::new(graph).run();
                let report = self.all_pairs_report(&paths);
                self.all_pairs = Some(paths);
                Ok(CommandResult::Report(report))
            }

            "path" => {
                let paths = self
                    .all_pairs
                    .as_ref()
                    .ok_or_else(|| Error::Parse("请先执行 floyd".to_string()))?;
                let (from, to) = self.two_nodes(args, paths.node_count())?;
                let path = paths.path(from, to)?;
                let distance = paths.distance(from, to).unwrap_or(INFINITY);
                Ok(CommandResult::Report(Report::Path {
                    path: self.labels(&path),
                    distance,
                }))
            }

            "dijkstra" => {
                let graph = self.weighted_graph()?;
                let (from, to) = self.two_nodes(args, graph.node_count())?;
                let result = Dijkstra::new(graph).shortest_path(from, to)?;
                Ok(CommandResult::Report(Report::Path {
                    path: self.labels(&result.path),
                    distance: result.distance,
                }))
            }

            "dfs" | "bfs" => {
                let graph = self.unweighted_graph()?;
                let start = self.resolve(first_arg(args, "起点")?, graph.node_count())?;
                let traversal = Traversal::new(graph);
                let (title, order) = if cmd == "dfs" {
                    ("深度优先遍历", traversal.dfs(start)?)
                } else {
                    ("广度优先遍历", traversal.bfs(start)?)
                };
                Ok(CommandResult::Report(Report::Order {
                    title: title.to_string(),
                    nodes: self.labels(&order),
                }))
            }

            "components" | "cc" => {
                let graph = self.unweighted_graph()?;
                let components = Traversal::new(graph)
                    .connected_components()
                    .iter()
                    .map(|c| self.labels(c))
                    .collect();
                Ok(CommandResult::Report(Report::Components { components }))
            }

            "subject" | "add" => {
                let mut words = args.split_whitespace();
                let name = words
                    .next()
                    .ok_or_else(|| Error::Parse("用法: subject <名称> [依赖...]".to_string()))?;
                let dependencies: Vec<&str> = words.collect();
                self.catalog.add(name, &dependencies)?;
                self.catalog_order()
            }

            "drop" | "remove" => {
                let name = first_arg(args, "名称")?;
                self.catalog.remove(name)?;
                self.catalog_order()
            }

            "order" | "topo" => self.catalog_order(),

            _ => Err(Error::Parse(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                cmd
            ))),
        }
    }

    fn weighted_graph(&self) -> Result<&WeightedGraph> {
        self.weighted
            .as_ref()
            .ok_or_else(|| Error::Parse("请先用 weights 或 uweights 加载带权图".to_string()))
    }

    fn unweighted_graph(&self) -> Result<&UnweightedGraph> {
        self.unweighted
            .as_ref()
            .ok_or_else(|| Error::Parse("请先用 adjacency 加载无权图".to_string()))
    }

    /// 解析节点引用：索引或名称
    fn resolve(&self, token: &str, n: usize) -> Result<NodeId> {
        let index = match token.parse::<NodeId>() {
            Ok(index) => index,
            Err(_) => self
                .names
                .index_of(token)
                .ok_or_else(|| Error::NodeNotFound(token.to_string()))?,
        };
        Error::check_index(index, n)?;
        Ok(index)
    }

    fn two_nodes(&self, args: &str, n: usize) -> Result<(NodeId, NodeId)> {
        let ids: Vec<&str> = args.split_whitespace().collect();
        if ids.len() < 2 {
            return Err(Error::Parse("用法: <命令> <起点> <终点>".to_string()));
        }
        Ok((self.resolve(ids[0], n)?, self.resolve(ids[1], n)?))
    }

    fn labels(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&i| self.names.label(i)).collect()
    }

    fn all_pairs_report(&self, paths: &AllPairsPaths) -> Report {
        let n = paths.node_count();
        let labels = self.labels(&(0..n).collect::<Vec<_>>());
        let next_hops = paths
            .next_hops()
            .iter_rows()
            .map(|row| self.labels(row))
            .collect();

        Report::AllPairs {
            labels,
            distances: paths.distances().to_rows(),
            next_hops,
        }
    }

    fn catalog_order(&self) -> Result<CommandResult> {
        let order = self.catalog.topological_order()?;
        Ok(CommandResult::Report(Report::Order {
            title: "拓扑序".to_string(),
            nodes: order.into_iter().map(str::to_string).collect(),
        }))
    }

    /// 当前会话概况
    pub fn summary(&self) -> String {
        let mut out = String::from("会话状态:\n");
        out.push_str(&format!("  节点名称: {}\n", self.names.len()));
        match &self.weighted {
            Some(g) => out.push_str(&format!(
                "  带权图: {} 个节点, {} 条有向边{}\n",
                g.node_count(),
                g.edge_count(),
                if g.is_symmetric() { " (对称)" } else { "" }
            )),
            None => out.push_str("  带权图: 未加载\n"),
        }
        match &self.unweighted {
            Some(g) => out.push_str(&format!("  无权图: {} 个节点\n", g.node_count())),
            None => out.push_str("  无权图: 未加载\n"),
        }
        out.push_str(&format!(
            "  依赖图: {} 个节点, {} 条依赖\n",
            self.catalog.len(),
            self.catalog.graph().edge_count()
        ));
        out
    }
}

fn first_arg<'a>(args: &'a str, what: &str) -> Result<&'a str> {
    args.split_whitespace()
        .next()
        .ok_or_else(|| Error::Parse(format!("缺少参数: {}", what)))
}

/// 解析以 `;` 分隔的整数行
fn parse_rows(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.split_whitespace()
                .map(|token| {
                    token
                        .parse::<i64>()
                        .map_err(|_| Error::Parse(format!("无效的数字: {}", token)))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// 解析权重矩阵：非对角线上的 0、`inf`、`-` 表示无边，对角线上的 `inf`、`-` 视为 0
fn parse_weight_rows(input: &str) -> Result<Vec<Vec<Weight>>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(i, row)| {
            row.split_whitespace()
                .enumerate()
                .map(|(j, token)| -> Result<Weight> {
                    let value = match token.to_lowercase().as_str() {
                        "inf" | "-" | "∞" => INFINITY,
                        other => other
                            .parse::<Weight>()
                            .map_err(|_| Error::Parse(format!("无效的权重: {}", token)))?,
                    };
                    Ok(match (i == j, value) {
                        (true, INFINITY) => 0,
                        (false, 0) => INFINITY,
                        (_, v) => v,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// 以上三角为准镜像为对称矩阵
fn mirror_upper_triangle(rows: &mut [Vec<Weight>]) {
    let n = rows.len();
    for i in 0..n {
        for j in i + 1..n {
            if let Some(&w) = rows[i].get(j) {
                if let Some(cell) = rows.get_mut(j).and_then(|r| r.get_mut(i)) {
                    *cell = w;
                }
            }
        }
    }
}

/// 命令帮助
pub fn help_text() -> String {
    r#"
═══════════════════════════════════════════════════════════════
                    GraphKit 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  show, info                 显示会话状态
  names <名称...>            设置节点名称（按索引顺序）
                             示例: names Lima Cusco Puno

最短路径:
  weights <行>; <行>; ...    加载有向带权图（0、inf、- 表示无边）
                             示例: weights 0 4 0; 0 0 1; 2 0 0
  uweights <行>; ...         加载无向带权图（以上三角为准）
  floyd                      Floyd-Warshall 全源最短路径
  path <起点> <终点>         按上次 floyd 结果重构路径
  dijkstra <起点> <终点>     Dijkstra 单源最短路径

拓扑排序:
  subject <名称> [依赖...]   添加节点及依赖，并输出拓扑序
                             示例: subject Fisica Calculo
  drop <名称>                删除节点，并输出拓扑序
  order                      输出当前拓扑序

遍历:
  adjacency <行>; ...        加载 0/1 邻接矩阵
                             示例: adjacency 0 1 0; 1 0 0; 0 0 0
  dfs <起点>                 深度优先遍历
  bfs <起点>                 广度优先遍历
  components                 连通分量

节点可以用索引或名称引用。
═══════════════════════════════════════════════════════════════
"#
    .to_string()
}
