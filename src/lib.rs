//! smauto-paths - 模型仓库与模板目录解析
//!
//! 启动时计算一次，之后以不可变的 [`ResolvedPaths`] 显式传递给使用方

// 错误处理
pub mod error;

// 数据类型
pub mod types;

// 环境与路径工具
pub mod utils;

// 路径解析核心
pub mod core;

// CLI 定义
pub mod cli;

#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use crate::core::ResolvedPaths;
pub use error::{PathsError, Result};
pub use types::{ModelRepoSource, OutputFormat, PathTarget};
pub use utils::env::{EnvLookup, ProcessEnv};
pub use utils::paths::{MODEL_REPO_ENV, MODELS_DIR_NAME, TEMPLATES_DIR_NAME};
