use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Uppercase label used in the raw log line.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A raw system/application event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    pub message: String,
    pub details: Map<String, Value>,
    pub related_alerts: Vec<String>,
    pub related_cases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub event_type: String,
    pub raw_log: String,
}

impl LogEntry {
    /// The raw log line is always derived from (timestamp, level, message)
    /// so the two representations cannot drift apart.
    pub fn format_raw(timestamp: DateTime<Utc>, level: LogLevel, message: &str) -> String {
        format!(
            "[{}] {}: {}",
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            level.label(),
            message
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn has_related_alerts(&self) -> bool {
        !self.related_alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_format_raw() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let raw = LogEntry::format_raw(ts, LogLevel::Warn, "User authentication failed");
        assert_eq!(raw, "[2024-01-15T09:30:00.000Z] WARN: User authentication failed");
    }

    #[test]
    fn test_level_wire_format() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        let parsed: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, LogLevel::Error);
    }
}
