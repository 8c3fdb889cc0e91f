//! smauto-paths 主程序入口
//!
//! 启动时解析一次路径，之后按命令输出

use clap::Parser;
use smauto_paths::cli::{self, Cli, Commands};
use std::io::IsTerminal;
use smauto_paths::{ProcessEnv, ResolvedPaths, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    init_logging(verbose);

    if let Err(e) = run(cli) {
        e.report(verbose);
        std::process::exit(1);
    }
}

/// 日志输出到 stderr，RUST_LOG 优先；非终端不输出颜色码
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.base_dir {
        Some(base_dir) => ResolvedPaths::resolve(base_dir, &ProcessEnv),
        None => ResolvedPaths::from_process()?,
    };

    match cli.command {
        Commands::Show { format, normalize } => {
            let format = cli::parse_format(&format)?;
            let paths = if normalize { paths.normalized() } else { paths };
            println!("{}", paths.render(format)?);
        }

        Commands::Get { target, normalize } => {
            let target = cli::parse_target(&target)?;
            let paths = if normalize { paths.normalized() } else { paths };
            println!("{}", paths.get(target).display());
        }
    }

    Ok(())
}
