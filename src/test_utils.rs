//! 测试工具模块
//!
//! 修改进程环境的测试通过 [`EnvGuard`] 进行，并配合 `#[serial]` 串行执行

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// 环境变量守卫 - 释放时恢复原始环境
pub struct EnvGuard {
    original_vars: HashMap<OsString, OsString>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<OsString, OsString> = env::vars_os().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // 先移除新增的变量，再恢复被改动的值
        let current: Vec<OsString> = env::vars_os().map(|(k, _)| k).collect();
        for key in current {
            if !self.original_vars.contains_key(&key) {
                unsafe {
                    env::remove_var(&key);
                }
            }
        }

        for (key, value) in &self.original_vars {
            if env::var_os(key).as_ref() != Some(value) {
                unsafe {
                    env::set_var(key, value);
                }
            }
        }
    }
}
