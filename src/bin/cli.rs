//! GraphKit CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use graphkit::cli::{CommandCompleter, CommandResult, OutputFormat, Printer, Session, ShellConfig};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphkit-cli")]
#[command(about = "GraphKit 图算法命令行工具")]
#[command(version)]
struct Args {
    /// 依次执行命令后退出（可重复）
    #[arg(short = 'e', long)]
    execute: Vec<String>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// JSON 输出，等同于 `--format json`
    #[arg(long)]
    json: bool,

    /// 历史记录文件
    #[arg(long)]
    history: Option<PathBuf>,

    /// 不保存历史记录
    #[arg(long)]
    no_history: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 只输出错误日志
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        let mut config = ShellConfig {
            format: if self.json {
                OutputFormat::Json
            } else {
                self.format
            },
            ..ShellConfig::default()
        };
        if self.no_history {
            config.history_file = None;
        } else if let Some(path) = &self.history {
            config.history_file = Some(path.clone());
        }
        config
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    let config = args.shell_config();
    let printer = Printer::new(config.format);
    let mut session = Session::new();

    // 单次执行模式
    if !args.execute.is_empty() {
        for command in &args.execute {
            match run_command(&mut session, &printer, command) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => {
                    eprintln!("{}", format!("错误: {}", e).red());
                    std::process::exit(1);
                }
            }
        }
        return Ok(());
    }

    println!("{}", "GraphKit CLI - 经典图算法演示".bright_cyan());
    println!("=============================");
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("初始化行编辑器失败")?;
    editor.set_helper(Some(CommandCompleter::new()));

    if let Some(path) = &config.history_file {
        if editor.load_history(path).is_err() {
            debug!(path = %path.display(), "没有历史记录");
        }
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line) {
                    debug!(error = %e, "写入历史记录失败");
                }

                match run_command(&mut session, &printer, line) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => println!("{}", format!("错误: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "保存历史记录失败");
        }
    }

    println!("再见！");
    Ok(())
}

/// 执行一条命令并打印结果；返回 true 表示退出
fn run_command(session: &mut Session, printer: &Printer, line: &str) -> graphkit::Result<bool> {
    let start = Instant::now();
    match session.execute(line)? {
        CommandResult::Exit => return Ok(true),
        CommandResult::Continue => {}
        CommandResult::Message(message) => println!("{}", message),
        CommandResult::Report(report) => {
            println!("{}", printer.print_report(&report, start.elapsed().as_millis()))
        }
    }
    Ok(false)
}
