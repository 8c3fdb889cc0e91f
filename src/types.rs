//! 核心数据结构定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 模型仓库路径的来源（优先级：环境变量覆盖 > 计算默认值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRepoSource {
    /// 来自非空的 MODEL_REPO_PATH
    Override,
    /// 基准目录的同级 models 目录
    Default,
}

impl fmt::Display for ModelRepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelRepoSource::Override => write!(f, "override"),
            ModelRepoSource::Default => write!(f, "default"),
        }
    }
}

/// 可单独查询的路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTarget {
    Base,
    Templates,
    Models,
}

impl PathTarget {
    /// 从字符串转换
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "base" => Some(PathTarget::Base),
            "templates" => Some(PathTarget::Templates),
            "models" => Some(PathTarget::Models),
            _ => None,
        }
    }
}

impl fmt::Display for PathTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTarget::Base => write!(f, "base"),
            PathTarget::Templates => write!(f, "templates"),
            PathTarget::Models => write!(f, "models"),
        }
    }
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    ENV,
    JSON,
    TOML,
}

impl OutputFormat {
    /// 从字符串转换，未知格式返回 None
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "env" | "e" => Some(OutputFormat::ENV),
            "json" | "j" => Some(OutputFormat::JSON),
            "toml" | "t" => Some(OutputFormat::TOML),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse_is_case_insensitive() {
        assert_eq!(PathTarget::parse("Templates"), Some(PathTarget::Templates));
        assert_eq!(PathTarget::parse("MODELS"), Some(PathTarget::Models));
        assert_eq!(PathTarget::parse("base"), Some(PathTarget::Base));
        assert_eq!(PathTarget::parse("assets"), None);
        assert_eq!(PathTarget::parse("model"), None);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::JSON));
        assert_eq!(OutputFormat::parse("T"), Some(OutputFormat::TOML));
        assert_eq!(OutputFormat::parse("env"), Some(OutputFormat::ENV));
        assert_eq!(OutputFormat::parse("yaml"), None);
        assert_eq!(OutputFormat::default(), OutputFormat::ENV);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&ModelRepoSource::Override).unwrap();
        assert_eq!(json, "\"override\"");
        assert_eq!(ModelRepoSource::Default.to_string(), "default");
    }
}
