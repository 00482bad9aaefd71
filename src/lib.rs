//! Runtime error stack frame triage.
//!
//! Filters engine noise out of a captured call stack, picks the single
//! culprit frame to show with its source snippet, and splits the rest into
//! collapsible leading context and a call stack governed by a per-overlay
//! show/hide state.
//!
//! - [`triage`] — the derivation core
//! - [`render`] — collaborator seams and a styled-text renderer
//! - [`cli`]    — the `frame-triage` command line front end

pub mod cli;
pub mod debug;
pub mod render;
pub mod triage;

pub use frame_triage_config::{ConfigError, LogLevel, NoiseRuleConfig, TriageConfig};
