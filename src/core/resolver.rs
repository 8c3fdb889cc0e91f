//! 路径解析器
//!
//! 进程启动时构造一次 [`ResolvedPaths`]，之后只读共享。
//! 解析只做路径拼接和一次环境变量读取，不检查目录是否存在。

use crate::error::{PathsError, Result};
use crate::types::{ModelRepoSource, OutputFormat, PathTarget};
use crate::utils::env::{EnvLookup, ProcessEnv};
use crate::utils::paths::{
    base_dir_of, executable_base_dir, lexical_normalize, MODELS_DIR_NAME, MODEL_REPO_ENV,
    TEMPLATES_DIR_NAME,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// 解析结果：模板目录与模型仓库目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    base_dir: PathBuf,
    templates_path: PathBuf,
    model_repo_path: PathBuf,
    model_repo_source: ModelRepoSource,
}

/// 序列化视图
#[derive(Serialize)]
struct PathsRecord<'a> {
    base_dir: &'a str,
    templates_path: &'a str,
    model_repo_path: &'a str,
    model_repo_source: ModelRepoSource,
}

impl ResolvedPaths {
    /// 以给定基准目录和环境解析
    ///
    /// 非空的 MODEL_REPO_PATH 原样采用；未设置或为空时回退到 `<base>/../models`
    pub fn resolve<E: EnvLookup + ?Sized>(base_dir: impl Into<PathBuf>, env: &E) -> Self {
        let base_dir = base_dir.into();
        let templates_path = base_dir.join(TEMPLATES_DIR_NAME);

        let (model_repo_path, model_repo_source) = match env.var_os(MODEL_REPO_ENV) {
            Some(value) if !value.is_empty() => (PathBuf::from(value), ModelRepoSource::Override),
            _ => (
                base_dir.join("..").join(MODELS_DIR_NAME),
                ModelRepoSource::Default,
            ),
        };

        debug!(source = %model_repo_source, "{} resolved", MODEL_REPO_ENV);
        trace!(
            base_dir = %base_dir.display(),
            templates = %templates_path.display(),
            models = %model_repo_path.display(),
            "paths resolved"
        );

        Self {
            base_dir,
            templates_path,
            model_repo_path,
            model_repo_source,
        }
    }

    /// 以产物文件所在目录为基准解析
    pub fn from_artifact<E: EnvLookup + ?Sized>(artifact: &Path, env: &E) -> Self {
        Self::resolve(base_dir_of(artifact), env)
    }

    /// 进程启动入口：当前可执行文件所在目录 + 真实进程环境
    pub fn from_process() -> Result<Self> {
        let base_dir = executable_base_dir()?;
        Ok(Self::resolve(base_dir, &ProcessEnv))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    pub fn model_repo_path(&self) -> &Path {
        &self.model_repo_path
    }

    pub fn model_repo_source(&self) -> ModelRepoSource {
        self.model_repo_source
    }

    /// 模板目录下的文件路径
    pub fn template(&self, name: impl AsRef<Path>) -> PathBuf {
        self.templates_path.join(name)
    }

    /// 模型仓库下的文件路径
    pub fn model(&self, name: impl AsRef<Path>) -> PathBuf {
        self.model_repo_path.join(name)
    }

    /// 按目标取路径
    pub fn get(&self, target: PathTarget) -> &Path {
        match target {
            PathTarget::Base => &self.base_dir,
            PathTarget::Templates => &self.templates_path,
            PathTarget::Models => &self.model_repo_path,
        }
    }

    /// 词法规范化后的副本，原值保持不变
    pub fn normalized(&self) -> Self {
        Self {
            base_dir: lexical_normalize(&self.base_dir),
            templates_path: lexical_normalize(&self.templates_path),
            model_repo_path: lexical_normalize(&self.model_repo_path),
            model_repo_source: self.model_repo_source,
        }
    }

    /// 按输出格式渲染
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::ENV => Ok(format!(
                "BASE_DIR={}\nTEMPLATES_PATH={}\n{}={}",
                self.base_dir.display(),
                self.templates_path.display(),
                MODEL_REPO_ENV,
                self.model_repo_path.display()
            )),
            OutputFormat::JSON => Ok(serde_json::to_string_pretty(&self.record()?)?),
            OutputFormat::TOML => Ok(toml::to_string(&self.record()?)?),
        }
    }

    fn record(&self) -> Result<PathsRecord<'_>> {
        Ok(PathsRecord {
            base_dir: utf8(&self.base_dir)?,
            templates_path: utf8(&self.templates_path)?,
            model_repo_path: utf8(&self.model_repo_path)?,
            model_repo_source: self.model_repo_source,
        })
    }
}

fn utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| PathsError::NonUtf8Path(path.to_path_buf()))
}
