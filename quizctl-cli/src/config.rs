//! Layered configuration for the quizctl binary
//!
//! Precedence, lowest first: built-in defaults, the TOML config file,
//! environment (`DATABASE_URL`, `QUIZCTL_CONFIG`, also read from `.env`),
//! command-line flags. Environment and flags arrive together through clap's
//! `env` attributes, so this module only merges the file with what clap parsed.
//!
//! ```toml
//! database_url = "sqlite:///var/lib/quizctl/questions.db"
//!
//! [server]
//! bind = "0.0.0.0:3000"
//! cors_permissive = false
//! request_timeout_secs = 30
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use quizctl_server::ServerConfig;
use serde::Deserialize;

/// Used when neither flag, environment nor config file names a database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://quizctl.db";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub database_url: Option<String>,
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

/// Server settings given on the command line (or through their env vars).
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
    pub request_timeout_secs: Option<u64>,
}

impl QuizConfig {
    /// Load the config file.
    ///
    /// An explicitly named file must exist. Without one, `~/.quizctl/config.toml`
    /// is read when present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config file path: ~/.quizctl/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".quizctl").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Database URL: flag/env first, then the file, then [`DEFAULT_DATABASE_URL`].
    pub fn database_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database_url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    /// Server settings with flags layered over the file and the file over defaults.
    pub fn server_config(&self, overrides: &ServerOverrides) -> ServerConfig {
        let defaults = ServerConfig::default();
        let file = &self.server;

        ServerConfig {
            bind_addr: overrides.bind.or(file.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: overrides.cors_permissive
                || file.cors_permissive.unwrap_or(defaults.cors_permissive),
            request_timeout: overrides
                .request_timeout_secs
                .or(file.request_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}
