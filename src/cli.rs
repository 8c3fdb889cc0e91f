//! CLI 参数定义

use crate::error::{PathsError, Result};
use crate::types::{OutputFormat, PathTarget};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// smauto-paths - 模板目录与模型仓库路径解析
#[derive(Parser)]
#[command(
    name = "smauto-paths",
    version,
    about = "解析模板目录与模型仓库路径",
    long_about = "以安装目录为基准计算 templates 与 models 路径，MODEL_REPO_PATH 非空时覆盖模型仓库位置"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 指定基准目录（默认：可执行文件所在目录）
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 显示全部解析结果
    Show {
        /// 输出格式 (env/json/toml)
        #[arg(short, long, default_value = "env")]
        format: String,
        /// 折叠 `.` 与 `..` 后输出
        #[arg(short, long)]
        normalize: bool,
    },

    /// 输出单个路径
    Get {
        /// 路径目标 (base/templates/models)
        target: String,
        /// 折叠 `.` 与 `..` 后输出
        #[arg(short, long)]
        normalize: bool,
    },
}

/// 解析输出格式参数
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::parse(format).ok_or_else(|| PathsError::InvalidFormat(format.to_string()))
}

/// 解析路径目标参数
pub fn parse_target(target: &str) -> Result<PathTarget> {
    PathTarget::parse(target).ok_or_else(|| PathsError::InvalidTarget(target.to_string()))
}
