//! 结果打印器
//!
//! 提供表格和 JSON 两种输出格式

use super::config::OutputFormat;
use super::session::Report;
use crate::types::format_weight;
use prettytable::{format, Cell, Row, Table};

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// 打印算法结果
    pub fn print_report(&self, report: &Report, execution_time_ms: u128) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
            OutputFormat::Table => {
                format!("{}({} ms)\n", self.format_table(report), execution_time_ms)
            }
        }
    }

    fn format_table(&self, report: &Report) -> String {
        match report {
            Report::AllPairs {
                labels,
                distances,
                next_hops,
            } => {
                let rows: Vec<Vec<String>> = distances
                    .iter()
                    .map(|row| row.iter().map(|&w| format_weight(w)).collect())
                    .collect();
                format!(
                    "最短距离矩阵:\n{}\n下一跳矩阵:\n{}\n",
                    matrix_table(labels, &rows),
                    matrix_table(labels, next_hops)
                )
            }
            Report::Path { path, distance } => format!(
                "路径: {}\n最短距离: {}\n",
                path.join(" -> "),
                format_weight(*distance)
            ),
            Report::Order { title, nodes } => {
                format!("{}: {} --> 结束\n", title, nodes.join(" --> "))
            }
            Report::Components { components } => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(Row::new(vec![Cell::new("#"), Cell::new("节点")]));
                for (i, component) in components.iter().enumerate() {
                    table.add_row(Row::new(vec![
                        Cell::new(&(i + 1).to_string()),
                        Cell::new(&component.join(", ")),
                    ]));
                }
                format!("连通分量: {} 个\n{}", components.len(), table)
            }
        }
    }
}

/// 带行列标签的方阵表格
fn matrix_table(labels: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header = vec![Cell::new("")];
    header.extend(labels.iter().map(|l| Cell::new(l)));
    table.set_titles(Row::new(header));

    for (label, row) in labels.iter().zip(rows) {
        let mut cells = vec![Cell::new(label)];
        cells.extend(row.iter().map(|v| Cell::new(v)));
        table.add_row(Row::new(cells));
    }

    table.to_string()
}
