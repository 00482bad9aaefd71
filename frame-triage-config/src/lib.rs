//! Configuration system for the frame-triage runtime error overlay.
//!
//! This crate provides configuration loading, saving, and default values
//! for the triage engine and its command line front end. It includes:
//!
//! - Additional noise-frame rules appended to the built-in denylist
//! - Log level selection
//! - Output settings (color, initial disclosure)

mod error;
mod log_level;
mod triage_config;

pub use error::ConfigError;
pub use log_level::LogLevel;
pub use triage_config::{NoiseRuleConfig, TriageConfig};
