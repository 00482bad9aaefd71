//! Logging backend for the frame-triage binary.
//!
//! Routes every `log::info!()`, `log::debug!()` etc. to stderr as
//! `[timestamp] [LEVEL] [target] message`, keeping stdout free for the
//! rendered overlay or JSON report.
//!
//! Level precedence: explicit level (CLI flag), then `RUST_LOG`, then the
//! config file value.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Stderr logger; the mutex keeps concurrent records from interleaving.
struct StderrLogger {
    level: LevelFilter,
    lock: Mutex<()>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _guard = self.lock.lock();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a `RUST_LOG`-style value. Only a bare level is understood; module
/// filters are ignored.
fn level_from_env_value(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Resolve the effective level from the three sources.
pub fn resolve_level(cli: Option<LevelFilter>, config: LevelFilter) -> LevelFilter {
    cli.or_else(|| {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|v| level_from_env_value(&v))
    })
    .unwrap_or(config)
}

/// Install the stderr logger. Safe to call more than once; later calls only
/// adjust the max level.
pub fn init_log_bridge(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level: LevelFilter::Trace,
        lock: Mutex::new(()),
    });
    // Err means a logger is already installed, which is fine.
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}
