//! Command-line interface for frame-triage.
//!
//! Reads a runtime error document, triages its frames, and prints the
//! overlay as text, ANSI-styled text, or a JSON report.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use frame_triage_config::{LogLevel, TriageConfig};

use crate::render::{
    OverlayTheme, SourcePackageGrouper, TextOverlayRenderer, render_runtime_error,
};
use crate::triage::{NoiseDenylist, RuntimeError, RuntimeErrorOverlay, TriageReport};

/// frame-triage - Pick the culprit frame of a runtime error and fold the rest
#[derive(Parser, Debug)]
#[command(name = "frame-triage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Runtime error JSON document (`-` reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Show all frames (flips the initial disclosure state once)
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (default: user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// How the triaged overlay is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// Text with ANSI colors (plain when the config disables color)
    Ansi,
    /// JSON triage report
    Json,
}

impl Cli {
    /// Config from `--config`, or the user config file when present.
    pub fn load_config(&self) -> Result<TriageConfig> {
        match &self.config {
            Some(path) => TriageConfig::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => TriageConfig::load().context("failed to load user config"),
        }
    }
}

/// Read the input document from a file or stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read runtime error from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Triage `json` and produce the output text for `format`.
pub fn run_document(
    json: &str,
    config: &TriageConfig,
    show_all: bool,
    format: OutputFormat,
) -> Result<String> {
    let error = RuntimeError::from_json(json)?;
    log::info!(
        "Loaded runtime error {} with {} frame(s)",
        error.id,
        error.frames.len()
    );

    let denylist = NoiseDenylist::from_config(&config.extra_noise_rules);
    let mut overlay = RuntimeErrorOverlay::with_denylist(error, denylist);
    if show_all || config.start_expanded {
        overlay.expand();
    }

    let output = match format {
        OutputFormat::Json => TriageReport::from_overlay(&overlay).to_json()?,
        OutputFormat::Text | OutputFormat::Ansi => {
            let rendered = render_runtime_error(
                &overlay,
                &SourcePackageGrouper,
                &TextOverlayRenderer::new(OverlayTheme::default()),
            );
            if format == OutputFormat::Ansi && config.color {
                rendered.to_ansi()
            } else {
                rendered.to_plain_text()
            }
        }
    };
    Ok(output)
}

/// Parse arguments, set up logging, and run.
pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes up before config so config loading is itself logged
    // when a level was given explicitly.
    let explicit = cli.log_level.map(LogLevel::to_level_filter);
    crate::debug::init_log_bridge(crate::debug::resolve_level(
        explicit,
        LogLevel::default().to_level_filter(),
    ));

    let config = cli.load_config()?;
    crate::debug::init_log_bridge(crate::debug::resolve_level(
        explicit,
        config.log_level.to_level_filter(),
    ));

    let json = read_input(&cli.input)?;
    let output = run_document(&json, &config, cli.all, cli.format)
        .with_context(|| format!("failed to triage {}", cli.input.display()))?;
    println!("{output}");
    Ok(())
}
