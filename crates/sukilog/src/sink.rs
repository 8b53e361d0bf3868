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
//! Backend sink contract and the bundled JSON-lines sink.
//!
//! The facade never formats output itself. It hands an [`Entry`] (level,
//! message, caller, ordered fields) to a [`Sink`], which decides whether the
//! level is enabled and how the record is encoded and written.

use crate::compose::Fields;
use crate::error::LogResult;
use crate::level::LogLevel;
use chrono::Utc;
use serde_json::Value;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

/// One record as handed to a sink
#[derive(Debug, Clone)]
pub struct Entry {
    /// Severity
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Call site of the facade method
    pub caller: Option<&'static Location<'static>>,
    /// Top-level fields in emission order
    pub fields: Fields,
}

impl Entry {
    /// Look up a top-level field by key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Leveled structured-record sink. Implementations must be safe to call
/// from several threads at once.
pub trait Sink: Send + Sync {
    /// Whether records at `level` are written
    fn enabled(&self, level: LogLevel) -> bool;

    /// Encode and write one record
    fn write(&self, entry: &Entry) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&self) -> io::Result<()>;
}

/// Encoding conventions a sink is built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Lowest level written
    pub min_level: LogLevel,
    /// Key of the level field
    pub level_key: String,
    /// Key of the message field
    pub message_key: String,
    /// Key of the timestamp field
    pub time_key: String,
    /// Key of the caller field
    pub caller_key: String,
    /// chrono format string for the time field
    pub time_format: String,
}

impl EncoderConfig {
    /// Lowercase levels, `message` and `timestamp` keys, ISO-8601 UTC time
    /// with millisecond precision and a `Z` suffix
    pub fn production(min_level: LogLevel) -> Self {
        EncoderConfig {
            min_level,
            level_key: "level".to_string(),
            message_key: "message".to_string(),
            time_key: "timestamp".to_string(),
            caller_key: "caller".to_string(),
            time_format: "%Y-%m-%dT%H:%M:%S%.3fZ".to_string(),
        }
    }
}

/// Constructs sinks for [`crate::SukiLogger::configure`]
pub trait BuildSink: Send + Sync {
    /// Construct a sink for `encoder`
    fn build(&self, encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>>;
}

impl<F> BuildSink for F
where
    F: Fn(&EncoderConfig) -> LogResult<Arc<dyn Sink>> + Send + Sync,
{
    fn build(&self, encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>> {
        self(encoder)
    }
}

/// Output destination of the JSON sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    /// Write to standard error
    #[default]
    Stderr,

    /// Write to standard output
    Stdout,
}

/// Writes one JSON object per line.
///
/// Key order is level, timestamp, caller, message, then the entry fields
/// in the order they were assembled.
pub struct JsonSink {
    encoder: EncoderConfig,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonSink {
    /// Sink writing to any writer
    pub fn new(encoder: EncoderConfig, writer: impl Write + Send + 'static) -> Self {
        JsonSink {
            encoder,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Sink writing to stderr or stdout
    pub fn for_output(encoder: EncoderConfig, output: LogOutput) -> Self {
        match output {
            LogOutput::Stderr => JsonSink::new(encoder, io::stderr()),
            LogOutput::Stdout => JsonSink::new(encoder, io::stdout()),
        }
    }

    /// Encoder the sink was built with
    pub fn encoder(&self) -> &EncoderConfig {
        &self.encoder
    }

    /// Encode `entry` as a single JSON line, without the trailing newline
    pub fn encode(&self, entry: &Entry) -> String {
        let mut line = String::with_capacity(256);
        line.push('{');

        let timestamp = Utc::now().format(&self.encoder.time_format).to_string();
        push_field(&mut line, &self.encoder.level_key, &Value::from(entry.level.as_str()));
        push_field(&mut line, &self.encoder.time_key, &Value::String(timestamp));
        if let Some(caller) = entry.caller {
            let caller = format!("{}:{}", caller.file(), caller.line());
            push_field(&mut line, &self.encoder.caller_key, &Value::String(caller));
        }
        push_field(&mut line, &self.encoder.message_key, &Value::from(entry.message.as_str()));
        for (key, value) in &entry.fields {
            push_field(&mut line, key, value);
        }

        line.push('}');
        line
    }
}

fn push_field(line: &mut String, key: &str, value: &Value) {
    if line.len() > 1 {
        line.push(',');
    }
    // Display on Value is infallible compact JSON
    let _ = write!(line, "{}:{}", Value::from(key), value);
}

impl Sink for JsonSink {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.encoder.min_level
    }

    fn write(&self, entry: &Entry) -> io::Result<()> {
        let mut line = self.encode(entry);
        line.push('\n');

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        writer.write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        writer.flush()
    }
}

impl Drop for JsonSink {
    fn drop(&mut self) {
        let _ = Sink::flush(self);
    }
}

/// Builds [`JsonSink`]s for a fixed output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSinkBuilder {
    /// Destination of every built sink
    pub output: LogOutput,
}

impl JsonSinkBuilder {
    /// Builder for `output`
    pub fn new(output: LogOutput) -> Self {
        JsonSinkBuilder { output }
    }
}

impl BuildSink for JsonSinkBuilder {
    fn build(&self, encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>> {
        Ok(Arc::new(JsonSink::for_output(encoder.clone(), self.output)))
    }
}
