//! Debug logging for agent-deck.
//!
//! Bridges the `log` facade to a file in the temp directory
//! (`/tmp/agent_deck_debug.log` on Unix, `%TEMP%\agent_deck_debug.log` on
//! Windows) so diagnostic output never mixes with the host UI's stdout/stderr.
//!
//! The level comes from, in order: an explicit override, `RUST_LOG`
//! (`error`, `info`, `debug`, ...), then `DEBUG_LEVEL`:
//! - 0 or unset: No logging
//! - 1: Errors only
//! - 2: Info level (store loads, shortcut changes)
//! - 3: Debug level (registrations, dispatch)
//! - 4: Trace level (suppressed and ignored key events)

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a `DEBUG_LEVEL` value. Anything unrecognized is `Off`.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .map(|value| Self::parse(&value))
            .unwrap_or(DebugLevel::Off)
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Pick the effective level from an override and the raw `RUST_LOG` and
/// `DEBUG_LEVEL` values.
pub fn resolve_level(
    level_override: Option<LevelFilter>,
    rust_log: Option<&str>,
    debug_level: Option<&str>,
) -> LevelFilter {
    if let Some(level) = level_override {
        return level;
    }
    if let Some(level) = rust_log.and_then(|value| value.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    debug_level
        .map(DebugLevel::parse)
        .unwrap_or(DebugLevel::Off)
        .level_filter()
}

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/agent_deck_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("agent_deck_debug.log");
    path
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    fn write_raw(&self, msg: &str) {
        let mut file = self.file.lock();
        let _ = file.write_all(msg.as_bytes());
        let _ = file.flush();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_raw(&format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Install the file logger as the `log` backend.
///
/// Returns the effective level. Only the first successful call installs a
/// logger; later calls report the installed level. If the log file cannot be
/// opened logging stays off rather than falling back to stderr.
pub fn init_log_bridge(level_override: Option<LevelFilter>) -> LevelFilter {
    if let Some(logger) = LOGGER.get() {
        return logger.level;
    }

    let level = resolve_level(
        level_override,
        std::env::var("RUST_LOG").ok().as_deref(),
        std::env::var("DEBUG_LEVEL").ok().as_deref(),
    );
    if level == LevelFilter::Off {
        return LevelFilter::Off;
    }

    let file = match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(log_path())
    {
        Ok(file) => file,
        Err(_) => return LevelFilter::Off,
    };

    let logger = LOGGER.get_or_init(|| FileLogger {
        level,
        file: Mutex::new(file),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
        logger.write_raw(&format!(
            "\n{}\nagent-deck debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            logger.level,
            "=".repeat(80)
        ));
    }
    logger.level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_level_parse() {
        assert_eq!(DebugLevel::parse("0"), DebugLevel::Off);
        assert_eq!(DebugLevel::parse(" 3 "), DebugLevel::Debug);
        assert_eq!(DebugLevel::parse("4"), DebugLevel::Trace);
        assert_eq!(DebugLevel::parse("verbose"), DebugLevel::Off);
        assert_eq!(DebugLevel::parse("9"), DebugLevel::Off);
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Warn), Some("trace"), Some("4")),
            LevelFilter::Warn
        );
    }

    #[test]
    fn test_rust_log_before_debug_level() {
        assert_eq!(resolve_level(None, Some("debug"), Some("1")), LevelFilter::Debug);
        // Unparseable RUST_LOG falls through
        assert_eq!(
            resolve_level(None, Some("agent_deck=debug"), Some("2")),
            LevelFilter::Info
        );
    }

    #[test]
    fn test_off_by_default() {
        assert_eq!(resolve_level(None, None, None), LevelFilter::Off);
    }
}
