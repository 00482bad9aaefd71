//! Typed error variants for the frame-triage-config crate.
//!
//! Library consumers can match on specific failure modes instead of opaque
//! strings; the binary wraps these in `anyhow` with added context.

use std::path::PathBuf;

/// Errors that can occur when loading or saving configuration.
///
/// # Example
///
/// ```rust,no_run
/// use frame_triage_config::{ConfigError, TriageConfig};
///
/// match TriageConfig::load_from("config.yaml") {
///     Ok(config) => println!("{} extra noise rules", config.extra_noise_rules.len()),
///     Err(ConfigError::Parse { path, source }) => eprintln!("{}: {source}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error on config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// YAML text (not read from a file) could not be parsed.
    #[error("invalid config YAML: {0}")]
    Yaml(#[source] serde_yaml_ng::Error),

    /// The config could not be serialized for saving.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("config validation error: {0}")]
    Validation(String),
}
