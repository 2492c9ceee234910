//! # lvlog
//! Thread-safe leveled logger writing to the terminal, an append-only log file, or both.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! lvlog = "0.1.0"
//! ```
//!
//! ```rust
//! use lvlog::Logger;
//!
//! let logger = Logger::default();
//! logger.info("Hello, world!");
//! ```
//!
//! ## Logging to files
//! The log file is created if it does not exist and appended to if it does.
//! Each session is bracketed by a start and an end marker line.
//!
//! ```rust
//! use lvlog::{Severity, Target, logger_config};
//!
//! # let dir = std::env::temp_dir().join(format!("lvlog-doc-{}", std::process::id()));
//! # std::fs::create_dir_all(&dir).unwrap();
//! let path = dir.join("app.log");
//! let logger = logger_config()
//!     .with_target(Target::File)
//!     .with_level(Severity::Info)
//!     .with_log_file(&path)
//!     .build()
//!     .expect("Unable to open log file");
//!
//! logger.debug("filtered out");
//! logger.warning("Hello, world!");
//! drop(logger); // writes the end marker
//!
//! let content = std::fs::read_to_string(&path).unwrap();
//! assert!(content.contains("[WARNING] Hello, world!\n"));
//! assert!(!content.contains("filtered out"));
//! # std::fs::remove_dir_all(&dir).ok();
//! ```
//!
//! ## Multi-threaded logging
//! A logger is shared by reference (or `Arc`) between threads; every record is written atomically.
//! ```rust
//! use std::sync::Arc;
//! use lvlog::Logger;
//!
//! let logger = Arc::new(Logger::default());
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let logger = Arc::clone(&logger);
//!     std::thread::spawn(move || logger.warning(&format!("Hello, world from thread {i}!")))
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```

mod config;
mod error;
mod level;
mod log_writer;
mod target;
mod utils;

pub use config::EnvConfig;
pub use error::LogError;
pub use level::Severity;
pub use log_writer::{LogFile, LogTerminal, LogWriter};
pub use target::Target;

use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{Log, Metadata, Record};

use utils::{SESSION_END, SESSION_START, format_log, format_marker, timestamp};

/// Sinks owned by a logger, guarded by its lock.
struct Sinks {
    terminal: Option<LogTerminal>,
    file: Option<LogFile>,
}

/// Leveled logger. Safe to share between threads.
///
/// Records below the threshold are dropped. Every other record is written as
/// `[YYYY-MM-DD HH:MM:SS.mmm][LEVEL] message` to the configured sinks.
pub struct Logger {
    target: Target,
    threshold: Severity,
    path: Option<PathBuf>,
    sinks: Mutex<Sinks>,
}

impl Default for Logger {
    /// Terminal only, every severity, no session marker.
    fn default() -> Self {
        Self {
            target: Target::Terminal,
            threshold: Severity::Debug,
            path: None,
            sinks: Mutex::new(Sinks {
                terminal: Some(LogTerminal::stdout()),
                file: None,
            }),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("target", &self.target)
            .field("threshold", &self.threshold)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Builds a logger and writes the session start marker.
    ///
    /// `path` is ignored for [`Target::Terminal`]. Fails if the log file cannot be opened.
    pub fn new<P: AsRef<Path>>(
        target: Target,
        threshold: Severity,
        path: P,
    ) -> Result<Self, LogError> {
        logger_config()
            .with_target(target)
            .with_level(threshold)
            .with_log_file(path)
            .build()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Log file path, `None` when nothing is written to a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a record of this severity passes the threshold.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    pub fn debug(&self, text: &str) {
        self.output(text, Severity::Debug);
    }

    pub fn info(&self, text: &str) {
        self.output(text, Severity::Info);
    }

    pub fn warning(&self, text: &str) {
        self.output(text, Severity::Warning);
    }

    pub fn error(&self, text: &str) {
        self.output(text, Severity::Error);
    }

    /// Writes one record. The lock is held from filtering to the final flush,
    /// so lines from concurrent callers never interleave.
    pub fn output(&self, text: &str, severity: Severity) {
        let mut sinks = self.lock();
        if !self.is_enabled(severity) {
            return;
        }
        let time = timestamp();
        let Sinks { terminal, file } = &mut *sinks;
        if let Some(terminal) = terminal {
            let line = if terminal.colored() {
                format_log(&time, severity.colored(), text)
            } else {
                format_log(&time, severity, text)
            };
            terminal.regular(&line);
        }
        if let Some(file) = file {
            file.regular(&format_log(&time, severity, text));
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_session(&self) {
        let line = format_marker(&timestamp(), SESSION_START);
        let mut sinks = self.lock();
        if let Some(file) = sinks.file.as_mut() {
            file.regular(&line);
        }
        if let Some(terminal) = sinks.terminal.as_mut() {
            terminal.regular(&line);
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let sinks = self.sinks.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = sinks.file.as_mut() {
            file.regular(&format_marker(&timestamp(), SESSION_END));
            file.regular("");
            file.flush();
        }
    }
}

/// Bridge to the `log` facade. TRACE records are logged as DEBUG.
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        if !Log::enabled(self, record.metadata()) {
            return;
        }
        let severity = record.level().into();
        match record.args().as_str() {
            Some(text) => self.output(text, severity),
            None => self.output(&record.args().to_string(), severity),
        }
    }

    fn flush(&self) {
        let mut sinks = self.lock();
        if let Some(terminal) = sinks.terminal.as_mut() {
            terminal.flush();
        }
        if let Some(file) = sinks.file.as_mut() {
            file.flush();
        }
    }
}

/// Builder for configuring and creating a [`Logger`].
pub struct ConfigBuilder {
    target: Target,
    level: Severity,
    log_file: Option<PathBuf>,
    terminal: Option<LogTerminal>,
    color: Option<bool>,
    flush_interval: Duration,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            target: Target::Terminal,
            level: Severity::Debug,
            log_file: None,
            terminal: None,
            color: None,
            flush_interval: Duration::ZERO,
        }
    }
}

impl From<EnvConfig> for ConfigBuilder {
    fn from(config: EnvConfig) -> Self {
        logger_config()
            .with_target(config.TARGET)
            .with_level(config.LEVEL)
            .maybe_with_log_file(config.PATH)
            .with_flush_interval(Duration::from_millis(config.FLUSH_INTERVAL_MS))
    }
}

impl ConfigBuilder {
    /// Builder seeded from the `LVLOG_*` environment variables.
    pub fn from_env() -> Result<Self, LogError> {
        Ok(EnvConfig::load()?.into())
    }

    /// Sets the sinks records are written to.
    pub fn with_target(self, target: Target) -> Self {
        Self { target, ..self }
    }
    /// Sets the minimum severity written.
    pub fn with_level(self, level: Severity) -> Self {
        Self { level, ..self }
    }
    /// Sets the log file path. Opened by [`build`](Self::build).
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Maybe sets the log file path.
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        Self {
            log_file: path.map(|p| p.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Replaces standard output with another stream.
    pub fn with_terminal_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        Self {
            terminal: Some(LogTerminal::new(writer)),
            ..self
        }
    }
    /// Allows or forbids the colored level tag on the terminal.
    ///
    /// Allowing it is not enough: `colored` still drops the color when stdout
    /// is not a terminal or `NO_COLOR` is set.
    pub fn with_color(self, yes: bool) -> Self {
        Self {
            color: Some(yes),
            ..self
        }
    }
    /// Minimum time between two flushes of the log file. Zero, the default, flushes every record.
    pub fn with_flush_interval(self, flush_interval: Duration) -> Self {
        Self {
            flush_interval,
            ..self
        }
    }

    /// Opens the sinks and writes the session start marker to each of them.
    pub fn build(self) -> Result<Logger, LogError> {
        let Self {
            target,
            level,
            log_file,
            terminal,
            color,
            flush_interval,
        } = self;
        let file = if target.writes_file() {
            let path = log_file.ok_or(LogError::MissingPath { target })?;
            Some(LogFile::new(path)?.with_flush_interval(flush_interval))
        } else {
            None
        };
        let terminal = target.writes_terminal().then(|| {
            let terminal = terminal.unwrap_or_default();
            match color {
                Some(color) => terminal.with_color(color),
                None => terminal,
            }
        });
        let logger = Logger {
            target,
            threshold: level,
            path: file.as_ref().map(|f| f.path().to_path_buf()),
            sinks: Mutex::new(Sinks { terminal, file }),
        };
        logger.start_session();
        Ok(logger)
    }
}

/// Returns a default ConfigBuilder: terminal only, every severity.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
