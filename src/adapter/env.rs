//! Process Environment
//!
//! プロセスの環境変数を読み取る `EnvSource` 実装

use crate::application::use_cases::resolve_config::EnvSource;

/// プロセス環境変数
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
