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
//! Domain payload builders.
//!
//! Every builder here is total: absent collections become empty, absent
//! errors become [`ErrorInfo::default`], and serialization problems degrade
//! to empty strings instead of failing the caller.

use crate::diagnostics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// String-to-string map used for headers, params and query strings
pub type StringMap = BTreeMap<String, String>;

/// Error name and stack trace attached to a handler result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error name
    pub name: String,
    /// Stack trace text
    pub stack_trace: String,
}

/// Inbound HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpRequestInfo {
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
    /// Client address
    pub remote_ip: String,
    /// Header values
    pub headers: StringMap,
    /// Path parameters
    pub params: StringMap,
    /// Query string values
    pub query: StringMap,
    /// Replaced when over the configured size limit
    pub body: String,
}

/// Outcome of an HTTP request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpResponseInfo {
    /// HTTP status code
    pub status: i64,
    /// Handler duration, in the caller's unit of choice
    pub duration: f64,
    /// Response body, replaced when over the size limit
    pub body: String,
    /// Empty when the call succeeded
    pub error: ErrorInfo,
}

/// Broker message envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaMessage {
    /// Topic name
    pub topic: String,
    /// Partition number
    pub partition: i64,
    /// Offset within the partition
    pub offset: i64,
    /// Message headers
    pub headers: StringMap,
    /// Message key
    pub key: String,
    /// Message value as text
    pub payload: String,
    /// Broker timestamp
    pub timestamp: DateTime<Utc>,
}

/// Outcome of handling a broker message
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KafkaResult {
    /// Handler duration
    pub duration: f64,
    /// Empty when handling succeeded
    pub error: ErrorInfo,
}

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    /// Entity created
    Create,
    /// Entity updated
    Update,
    /// Entity deleted
    Delete,
}

/// Whether the action went through or was compensated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventResult {
    /// The action went through
    Success,
    /// The action was rolled back
    Compensate,
}

/// Business event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    /// Kind of entity affected
    pub entity: String,
    /// What happened
    pub action: EventAction,
    /// Outcome of the action
    pub result: EventResult,
    /// Caller-supplied correlation id
    pub reference_id: String,
    /// Serialized event data
    pub data: String,
}

/// Build an [`HttpRequestInfo`], substituting empty maps for absent ones
pub fn with_http_request(
    method: impl Into<String>,
    path: impl Into<String>,
    remote_ip: impl Into<String>,
    headers: Option<StringMap>,
    params: Option<StringMap>,
    query: Option<StringMap>,
    body: impl Into<String>,
) -> HttpRequestInfo {
    HttpRequestInfo {
        method: method.into(),
        path: path.into(),
        remote_ip: remote_ip.into(),
        headers: headers.unwrap_or_default(),
        params: params.unwrap_or_default(),
        query: query.unwrap_or_default(),
        body: body.into(),
    }
}

/// Build an [`HttpResponseInfo`]; a missing error becomes the empty one
pub fn with_http_response(
    status: i64,
    duration: f64,
    body: impl Into<String>,
    error: Option<ErrorInfo>,
) -> HttpResponseInfo {
    HttpResponseInfo {
        status,
        duration,
        body: body.into(),
        error: error.unwrap_or_default(),
    }
}

/// Build a [`KafkaMessage`], substituting an empty map for absent headers
pub fn with_kafka_message(
    topic: impl Into<String>,
    partition: i64,
    offset: i64,
    headers: Option<StringMap>,
    key: impl Into<String>,
    payload: impl Into<String>,
    timestamp: DateTime<Utc>,
) -> KafkaMessage {
    KafkaMessage {
        topic: topic.into(),
        partition,
        offset,
        headers: headers.unwrap_or_default(),
        key: key.into(),
        payload: payload.into(),
        timestamp,
    }
}

/// Build a [`KafkaResult`]; a missing error becomes the empty one
pub fn with_kafka_result(duration: f64, error: Option<ErrorInfo>) -> KafkaResult {
    KafkaResult {
        duration,
        error: error.unwrap_or_default(),
    }
}

/// Build an [`EventLog`], serializing `data` immediately.
///
/// `data` serializing to `null` (`None`, `()`) gives an empty string, a
/// string is kept as-is, anything else becomes compact JSON. If
/// serialization fails the data is an empty string.
pub fn with_event<T: Serialize + ?Sized>(
    entity: impl Into<String>,
    action: EventAction,
    result: EventResult,
    data: &T,
    reference_id: impl Into<String>,
) -> EventLog {
    let data = match serde_json::to_value(data) {
        Ok(Value::Null) => String::new(),
        Ok(Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(e) => {
            diagnostics::serialization_failed("event", "data", &e);
            String::new()
        }
    };

    EventLog {
        entity: entity.into(),
        action,
        result,
        reference_id: reference_id.into(),
        data,
    }
}

/// Build an [`ErrorInfo`].
///
/// With a single trace value that value is the stack trace. With two or
/// more, the second one is used and the first is discarded. With none the
/// stack trace is empty.
pub fn with_error(name: impl Into<String>, stacktrace: &[&str]) -> ErrorInfo {
    let stack_trace = match stacktrace {
        [] => "",
        [only] => *only,
        [_, second, ..] => *second,
    };

    ErrorInfo {
        name: name.into(),
        stack_trace: stack_trace.to_string(),
    }
}
