//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging system for the application.
// FORMAT: seq|level|category|message

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter so interleaved log lines can be re-ordered.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Process start time, used for elapsed-time reporting.
static START: Lazy<Instant> = Lazy::new(Instant::now);

static LOGGER: PipeLogger = PipeLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Milliseconds since the logger was installed.
pub fn elapsed_ms() -> u128 {
    START.elapsed().as_millis()
}

/// Writes `seq|level|category|message` lines to stderr, keeping stdout free
/// for command output. The category rides on the log target.
struct PipeLogger;

impl Log for PipeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Debug | Level::Trace => "D",
        };
        eprintln!("{}|{}|{}|{}", next_seq(), level, record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Install the pipe logger. `verbosity` counts repeated `-v` flags:
/// 0 = warnings and errors, 1 = info, 2 or more = debug.
pub fn init(verbosity: u8) {
    Lazy::force(&START);
    let filter = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        log::debug!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        log::warn!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        log::error!(target: $cat, $($arg)*)
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use log_debug;
pub use log_error;
pub use log_info;
pub use log_warn;
