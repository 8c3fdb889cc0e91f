//! 路径工具：基准目录与纯词法规范化，不访问文件系统

use crate::error::{PathsError, Result};
use std::path::{Component, Path, PathBuf};

/// 覆盖模型仓库位置的环境变量
pub const MODEL_REPO_ENV: &str = "MODEL_REPO_PATH";

/// 模板目录名（基准目录下一级）
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// 模型目录名（基准目录的同级）
pub const MODELS_DIR_NAME: &str = "models";

/// 产物所在目录
///
/// 裸文件名得到空路径（后续拼接为相对路径）；根路径以自身为基准
pub fn base_dir_of(artifact: &Path) -> PathBuf {
    match artifact.parent() {
        Some(parent) => parent.to_path_buf(),
        None => artifact.to_path_buf(),
    }
}

/// 当前可执行文件所在目录
pub fn executable_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(PathsError::CurrentExe)?;
    Ok(base_dir_of(&exe))
}

/// 词法规范化：去掉 `.`，把 `..` 折叠进前一段
///
/// 不解析符号链接。绝对路径在根之上的 `..` 被丢弃，相对路径开头的 `..` 保留，
/// 完全折叠的相对路径得到 `.`
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}
