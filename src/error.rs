//! 错误处理模块
//!
//! 路径解析本身不会失败；这里的错误来自进程定位和输出阶段

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathsError {
    #[error("无法定位当前可执行文件: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML序列化错误: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("无效的输出格式: {0}")]
    InvalidFormat(String),

    #[error("无效的路径目标: {0}")]
    InvalidTarget(String),

    #[error("路径不是有效的 UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

impl PathsError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                PathsError::InvalidFormat(format) => eprintln!("无效格式: {}", format),
                PathsError::InvalidTarget(target) => eprintln!("无效目标: {}", target),
                PathsError::NonUtf8Path(path) => {
                    eprintln!("路径无法序列化: {}", path.display())
                }
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PathsError>;
