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
//! Sink forwarding records into the `tracing` ecosystem.
//!
//! Useful when an application already installs a `tracing` subscriber and
//! wants sukilog records to flow through it. The fixed metadata becomes
//! event fields; `data` is carried as its JSON text.

use crate::error::LogResult;
use crate::level::LogLevel;
use crate::sink::{BuildSink, EncoderConfig, Entry, Sink};
use serde_json::Value;
use std::io;
use std::sync::Arc;

/// Target of every forwarded event
pub const TRACING_TARGET: &str = "sukilog";

/// Forwards entries as `tracing` events
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    min_level: LogLevel,
}

impl TracingSink {
    /// Sink forwarding records at `min_level` and above
    pub fn new(min_level: LogLevel) -> Self {
        TracingSink { min_level }
    }
}

struct Rendered {
    app_name: String,
    version: String,
    log_type: String,
    alert: i64,
    data: String,
    caller: String,
}

impl Rendered {
    fn from_entry(entry: &Entry) -> Self {
        let text = |key: &str| match entry.field(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        Rendered {
            app_name: text("app_name"),
            version: text("version"),
            log_type: text("log_type"),
            alert: entry.field("alert").and_then(Value::as_i64).unwrap_or(0),
            data: entry
                .field("data")
                .map(Value::to_string)
                .unwrap_or_else(|| "{}".to_string()),
            caller: entry
                .caller
                .map(|c| format!("{}:{}", c.file(), c.line()))
                .unwrap_or_default(),
        }
    }
}

macro_rules! forward {
    ($event:ident, $entry:ident, $r:ident) => {
        tracing::$event!(
            target: TRACING_TARGET,
            app_name = %$r.app_name,
            version = %$r.version,
            log_type = %$r.log_type,
            alert = $r.alert,
            data = %$r.data,
            caller = %$r.caller,
            "{}",
            $entry.message
        )
    };
}

impl Sink for TracingSink {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn write(&self, entry: &Entry) -> io::Result<()> {
        let rendered = Rendered::from_entry(entry);
        match entry.level {
            LogLevel::Debug => forward!(debug, entry, rendered),
            LogLevel::Info => forward!(info, entry, rendered),
            LogLevel::Warn => forward!(warn, entry, rendered),
            LogLevel::Error | LogLevel::Panic | LogLevel::Fatal => {
                forward!(error, entry, rendered)
            }
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds [`TracingSink`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSinkBuilder;

impl BuildSink for TracingSinkBuilder {
    fn build(&self, encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>> {
        Ok(Arc::new(TracingSink::new(encoder.min_level)))
    }
}
