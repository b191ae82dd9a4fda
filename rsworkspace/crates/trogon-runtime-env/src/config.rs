use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use trogon_std::env::ReadEnv;

use crate::runtime::{HostInfo, Runtime, UnknownRuntime};
use crate::version::{HostVersion, VersionError};

const ENV_RUNTIME: &str = "TROGON_RUNTIME";
const ENV_RUNTIME_VERSION: &str = "TROGON_RUNTIME_VERSION";
const ENV_ENV_FILE: &str = "TROGON_ENV_FILE";
const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("TROGON_RUNTIME: {0}")]
    UnknownRuntime(#[from] UnknownRuntime),

    #[error("TROGON_RUNTIME_VERSION: {0}")]
    InvalidVersion(#[from] VersionError),
}

/// Host identity and `.env` location, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEnvConfig {
    host: HostInfo,
    env_file: PathBuf,
}

impl RuntimeEnvConfig {
    pub fn new(host: HostInfo) -> Self {
        Self {
            host,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Reads `TROGON_RUNTIME`, `TROGON_RUNTIME_VERSION` and the optional
    /// `TROGON_ENV_FILE` (default `.env`).
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        let runtime: Runtime = env
            .var(ENV_RUNTIME)
            .map_err(|_| ConfigError::MissingVar(ENV_RUNTIME))?
            .parse()?;

        let version = env
            .var(ENV_RUNTIME_VERSION)
            .map_err(|_| ConfigError::MissingVar(ENV_RUNTIME_VERSION))?;
        HostVersion::parse(&version)?;

        let mut config = Self::new(HostInfo::new(runtime, version.trim()));

        if let Ok(raw) = env.var(ENV_ENV_FILE) {
            if raw.trim().is_empty() {
                warn!("{ENV_ENV_FILE} is empty, using default {DEFAULT_ENV_FILE:?}");
            } else {
                config = config.with_env_file(raw);
            }
        }

        Ok(config)
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }
}
