use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crate::error::LogError;

/// A sink receiving fully formatted lines. Writes are best-effort.
pub trait LogWriter {
    fn regular(&mut self, line: &str);
    fn flush(&mut self);
}

/// Append-only log file. Created if absent, never truncated.
pub struct LogFile {
    path: PathBuf,
    file: BufWriter<File>,
    flush_interval: Duration,
    last_flush: Instant,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: BufWriter::new(file),
            flush_interval: Duration::ZERO,
            last_flush: Instant::now(),
        })
    }

    /// Minimum time between two flushes. Zero flushes after every line.
    pub fn with_flush_interval(self, flush_interval: Duration) -> Self {
        Self {
            flush_interval,
            ..self
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for LogFile {
    fn regular(&mut self, line: &str) {
        writeln!(self.file, "{line}").ok();
        if self.last_flush.elapsed() >= self.flush_interval {
            self.flush();
        }
    }

    fn flush(&mut self) {
        self.file.flush().ok();
        self.last_flush = Instant::now();
    }
}

/// Terminal sink. Standard output unless another stream is injected.
pub struct LogTerminal {
    out: Box<dyn Write + Send>,
    color: bool,
}

impl Default for LogTerminal {
    fn default() -> Self {
        Self::stdout()
    }
}

impl LogTerminal {
    /// Standard output with a colored level tag when it is a terminal.
    pub fn stdout() -> Self {
        Self {
            out: Box::new(std::io::stdout()),
            color: true,
        }
    }

    /// Any byte stream standing in for the terminal. Plain text by default.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Box::new(writer),
            color: false,
        }
    }

    /// Allows or forbids the colored level tag. `colored` may still drop it.
    pub fn with_color(self, color: bool) -> Self {
        Self { color, ..self }
    }

    pub fn colored(&self) -> bool {
        self.color
    }
}

impl LogWriter for LogTerminal {
    fn regular(&mut self, line: &str) {
        writeln!(self.out, "{line}").ok();
        self.out.flush().ok();
    }

    fn flush(&mut self) {
        self.out.flush().ok();
    }
}
