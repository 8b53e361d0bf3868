// Copyright (C) 2026  winnyboy5
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! Severity, alert and record-kind enumerations.

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record severity.
///
/// The discriminants follow the numbering used by common structured
/// logging backends. Value 3 is unused and must stay unused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum LogLevel {
    /// Diagnostic detail
    Debug = -1,
    /// Routine operation
    #[default]
    Info = 0,
    /// Unexpected but handled
    #[serde(alias = "warning")]
    Warn = 1,
    /// Failed operation
    Error = 2,
    /// Written, then the caller panics
    Panic = 4,
    /// Written, then the process exits with status 1
    Fatal = 5,
}

impl LogLevel {
    /// Lowercase level name as written by the sinks
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Panic => "panic",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Numeric value of the level
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "panic" => Ok(LogLevel::Panic),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LogError::InvalidLevel(format!(
                "Unknown level: {}. Expected one of: debug, info, warn, error, panic, fatal",
                s
            ))),
        }
    }
}

impl TryFrom<i8> for LogLevel {
    type Error = LogError;

    fn try_from(value: i8) -> Result<Self, LogError> {
        match value {
            -1 => Ok(LogLevel::Debug),
            0 => Ok(LogLevel::Info),
            1 => Ok(LogLevel::Warn),
            2 => Ok(LogLevel::Error),
            4 => Ok(LogLevel::Panic),
            5 => Ok(LogLevel::Fatal),
            other => Err(LogError::InvalidLevel(format!("Unknown level value: {}", other))),
        }
    }
}

/// Alert routing flag, independent of severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum AlertLevel {
    /// No downstream alert
    #[default]
    None = 0,
    /// Route the record to alerting pipelines
    Alert = 1,
}

impl AlertLevel {
    /// Integer written into the `alert` field
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Kind of record, written as the `log_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    /// Leveled application record
    Application,
    /// HTTP transaction
    HttpHandler,
    /// Broker transaction
    KafkaHandler,
    /// Business event
    Event,
}

impl LogType {
    /// Value written as `log_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Application => "application",
            LogType::HttpHandler => "handler.http",
            LogType::KafkaHandler => "handler.kafka",
            LogType::Event => "event",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_level_values_keep_gap() {
        assert_eq!(LogLevel::Debug.as_i8(), -1);
        assert_eq!(LogLevel::Info.as_i8(), 0);
        assert_eq!(LogLevel::Warn.as_i8(), 1);
        assert_eq!(LogLevel::Error.as_i8(), 2);
        assert_eq!(LogLevel::Panic.as_i8(), 4);
        assert_eq!(LogLevel::Fatal.as_i8(), 5);
        assert!(LogLevel::try_from(3).is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Panic);
        assert!(LogLevel::Panic < LogLevel::Fatal);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" Fatal ".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_serde_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Panic).unwrap(), "\"panic\"");
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn test_log_type_tags() {
        assert_eq!(LogType::Application.as_str(), "application");
        assert_eq!(LogType::HttpHandler.as_str(), "handler.http");
        assert_eq!(LogType::KafkaHandler.as_str(), "handler.kafka");
        assert_eq!(LogType::Event.as_str(), "event");
    }

    #[test]
    fn test_alert_default_is_none() {
        assert_eq!(AlertLevel::default(), AlertLevel::None);
        assert_eq!(AlertLevel::Alert.as_i32(), 1);
    }
}
