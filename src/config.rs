use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CronError, Result};
use crate::explain::TimeFormat;
use crate::schedule::DEFAULT_COUNT;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "CRONEXPR_CONFIG";

/// User-configurable settings for the `cronexpr` CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Occurrences listed by `next` when `-n` is not given (default: 5)
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Clock used by `explain` (default: 24h)
    #[serde(default)]
    pub time_format: TimeFormat,

    /// Emit JSON instead of plain text (default: false)
    #[serde(default)]
    pub json: bool,

    /// Tracing filter used when RUST_LOG is unset (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            time_format: TimeFormat::default(),
            json: false,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from an explicit path, else from `$CRONEXPR_CONFIG`.
    /// Returns default config when neither is set.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CronError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
