//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
const COMMANDS: &[&str] = &[
    // 基础
    "help", "quit", "exit", "show", "info", "names",
    // 最短路径
    "weights", "uweights", "floyd", "path", "dijkstra",
    // 拓扑排序
    "subject", "drop", "order",
    // 遍历
    "adjacency", "dfs", "bfs", "components",
];

/// GraphKit CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 以 prefix 开头的命令
    fn candidates(prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_lowercase();
        COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 只补全第一个单词（命令名）
        let start = line_to_cursor.len() - line_to_cursor.trim_start().len();
        let word = &line_to_cursor[start..];
        if word.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        Ok((start, Self::candidates(word)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        let names: Vec<String> = CommandCompleter::candidates("d")
            .into_iter()
            .map(|p| p.replacement)
            .collect();
        assert_eq!(names, vec!["dijkstra", "drop", "dfs"]);

        assert!(CommandCompleter::candidates("zz").is_empty());
        assert_eq!(CommandCompleter::candidates("FLO").len(), 1);
    }
}
