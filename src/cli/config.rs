//! 命令行配置

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 历史记录文件名
pub const HISTORY_FILE: &str = ".graphkit_history";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 交互式命令行配置
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// 历史记录文件；None 表示不保存历史
    pub history_file: Option<PathBuf>,
    /// 输出格式
    pub format: OutputFormat,
    /// 提示符
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
            format: OutputFormat::Table,
            prompt: "graphkit> ".to_string(),
        }
    }
}
