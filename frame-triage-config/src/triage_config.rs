//! `TriageConfig` struct, YAML persistence, and path resolution.
//!
//! Lives at `<config dir>/frame-triage/config.yaml`:
//!
//! ```yaml
//! log_level: info
//! color: true
//! start_expanded: false
//! extra_noise_rules:
//!   - file: "<anonymous>"
//!     method_names: ["JSON.parse"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::log_level::LogLevel;

fn default_true() -> bool {
    true
}

/// A noise rule added on top of the built-in denylist.
///
/// A frame is noise when its captured file equals `file` exactly and its
/// method name is one of `method_names`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseRuleConfig {
    /// Exact captured file name (e.g. `<anonymous>`).
    pub file: String,
    /// Method names that are noise when seen in `file`.
    pub method_names: Vec<String>,
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Noise rules appended to the built-in `<anonymous>` denylist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_noise_rules: Vec<NoiseRuleConfig>,

    /// Log level for the stderr log backend.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit ANSI colors when printing styled output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Start with every frame shown, like `--all`.
    #[serde(default)]
    pub start_expanded: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            extra_noise_rules: Vec::new(),
            log_level: LogLevel::default(),
            color: true,
            start_expanded: false,
        }
    }
}

impl TriageConfig {
    /// Directory holding the config file.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("frame-triage")
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from the default path, or defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading config from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents).map_err(|e| match e {
            ConfigError::Yaml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::debug!(
            "Config loaded: {} extra noise rule(s), log_level={}",
            config.extra_noise_rules.len(),
            config.log_level
        );
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// Parse failures are reported as `ConfigError::Yaml` because no path is
    /// known here; `load_from` rewraps them with the file path.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: TriageConfig = serde_yaml_ng::from_str(yaml).map_err(ConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Reject rules that could never match or would match everything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, rule) in self.extra_noise_rules.iter().enumerate() {
            if rule.file.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "extra_noise_rules[{i}].file must not be empty"
                )));
            }
            if rule.method_names.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "extra_noise_rules[{i}].method_names must list at least one method"
                )));
            }
        }
        Ok(())
    }
}
