//! 交互式命令行
//!
//! 会话、命令补全、结果打印和配置

mod completer;
mod config;
mod printer;
mod session;

pub use completer::CommandCompleter;
pub use config::{OutputFormat, ShellConfig, HISTORY_FILE};
pub use printer::Printer;
pub use session::{help_text, CommandResult, Report, Session};
