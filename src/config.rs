use std::path::PathBuf;

use derive_from_env::FromEnv;

use crate::{error::LogError, level::Severity, target::Target};

/// Logger settings read from `LVLOG_*` environment variables.
#[derive(FromEnv)]
#[from_env(prefix = "LVLOG")]
#[allow(non_snake_case)]
pub struct EnvConfig {
    #[from_env(default = "TERMINAL")]
    pub TARGET: Target,
    #[from_env(default = "DEBUG")]
    pub LEVEL: Severity,
    pub PATH: Option<PathBuf>,
    #[from_env(default = "0")]
    pub FLUSH_INTERVAL_MS: u64,
}

impl EnvConfig {
    pub fn load() -> Result<Self, LogError> {
        Ok(Self::from_env()?)
    }
}
