use std::fmt::Display;

use chrono::Local;

/// Marker written when a logger is built.
pub const SESSION_START: &str = "<开始日志>";
/// Marker written to the log file when a logger is dropped.
pub const SESSION_END: &str = "<结束日志>";

/// Local wall-clock time, millisecond precision.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

pub fn format_log<L: Display>(time: &str, level: L, message: &str) -> String {
    format!("[{time}][{level}] {message}")
}

pub fn format_marker(time: &str, marker: &str) -> String {
    format!("[{time}]{marker}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::level::Severity;

    #[test]
    fn test_timestamp_shape() {
        let time = timestamp();
        assert_eq!(time.len(), "2024-01-01 00:00:00.000".len());
        assert!(NaiveDateTime::parse_from_str(&time, "%Y-%m-%d %H:%M:%S%.3f").is_ok());
        assert_eq!(&time[19..20], ".");
        assert!(time[20..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_log() {
        assert_eq!(
            format_log("2024-03-05 07:08:09.010", Severity::Warning, "disk almost full"),
            "[2024-03-05 07:08:09.010][WARNING] disk almost full"
        );
        assert_eq!(
            format_marker("2024-03-05 07:08:09.010", SESSION_START),
            "[2024-03-05 07:08:09.010]<开始日志>"
        );
    }
}
