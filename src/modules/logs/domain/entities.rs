use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a persisted log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

/// A single persisted log record. Append-only; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub content: String,
    pub level: LogLevel,
    pub production: bool,
    /// Server-assigned, Unix milliseconds.
    pub timestamp: i64,
}

impl LogEntry {
    /// Formats the entry as one human-readable line:
    /// `<UTC date>: <"production"|"dev" padded> <LEVEL> - <content>`,
    /// with embedded newlines escaped as ` \n `.
    pub fn display_line(&self) -> String {
        let date_time = DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let environment = if self.production {
            "production".to_string()
        } else {
            format!("{:<10}", "dev")
        };

        format!(
            "{}: {} {} - {}",
            date_time.format("%a, %d %b %Y %H:%M:%S GMT"),
            environment,
            self.level.as_str(),
            self.content.replace('\n', " \\n ")
        )
    }
}
