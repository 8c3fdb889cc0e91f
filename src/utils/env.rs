//! 环境变量读取接口
//!
//! 解析器只通过 [`EnvLookup`] 读取环境，测试可注入合成环境而不修改进程环境

use std::collections::HashMap;
use std::ffi::OsString;

/// 环境变量来源
pub trait EnvLookup {
    /// 读取变量原始值，未设置返回 None
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// 真实进程环境
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

impl<E: EnvLookup + ?Sized> EnvLookup for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvGuard;
    use serial_test::serial;

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("MODEL_REPO_PATH".to_string(), "/srv/models".to_string());

        assert_eq!(env.var_os("MODEL_REPO_PATH"), Some(OsString::from("/srv/models")));
        assert_eq!(env.var_os("OTHER"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_reads_real_environment() {
        let guard = EnvGuard::new();
        guard.set_var("SMAUTO_PATHS_TEST_VAR", "value");
        assert_eq!(
            ProcessEnv.var_os("SMAUTO_PATHS_TEST_VAR"),
            Some(OsString::from("value"))
        );

        guard.remove_var("SMAUTO_PATHS_TEST_VAR");
        assert_eq!(ProcessEnv.var_os("SMAUTO_PATHS_TEST_VAR"), None);
    }
}
