use std::{fmt, str::FromStr};

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::error::LogError;

/// Severity of a log record. Ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Tag written between brackets in every record.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    pub(crate) fn colored(self) -> ColoredString {
        match self {
            Severity::Debug => self.name().blue(),
            Severity::Info => self.name().green(),
            Severity::Warning => self.name().yellow(),
            Severity::Error => self.name().red(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            _ => Err(LogError::UnknownSeverity(s.into())),
        }
    }
}

/// `log` has one level below DEBUG; it is folded into DEBUG.
impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => LevelFilter::Trace,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error => LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Severity::default(), Severity::Debug);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" Error ".parse::<Severity>().unwrap(), Severity::Error);
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(LogError::UnknownSeverity(s)) if s == "fatal"
        ));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(Severity::from(Level::Trace), Severity::Debug);
        assert_eq!(Severity::from(Level::Warn), Severity::Warning);
        assert_eq!(LevelFilter::from(Severity::Debug), LevelFilter::Trace);
        assert_eq!(LevelFilter::from(Severity::Error), LevelFilter::Error);
    }
}
