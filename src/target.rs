use std::{fmt, str::FromStr};

use crate::error::LogError;

/// Where records are written. Fixed for the lifetime of a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    File,
    #[default]
    Terminal,
    FileAndTerminal,
}

impl Target {
    pub fn writes_file(self) -> bool {
        self != Target::Terminal
    }

    pub fn writes_terminal(self) -> bool {
        self != Target::File
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::File => "FILE",
            Target::Terminal => "TERMINAL",
            Target::FileAndTerminal => "FILE_AND_TERMINAL",
        })
    }
}

impl FromStr for Target {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FILE" => Ok(Target::File),
            "TERMINAL" => Ok(Target::Terminal),
            "FILE_AND_TERMINAL" => Ok(Target::FileAndTerminal),
            _ => Err(LogError::UnknownTarget(s.into())),
        }
    }
}
