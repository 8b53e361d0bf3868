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
//! Field primitives: named values, error fields, trace correlation and
//! record options.

use crate::diagnostics;
use crate::level::AlertLevel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Value carried by a [`LogField`]
#[derive(Clone)]
pub enum FieldValue {
    /// Any serializable value, already converted to JSON
    Json(Value),
    /// An error; only its message ever reaches a record
    Error(Arc<dyn StdError + Send + Sync>),
}

impl FieldValue {
    /// JSON form written into the record. Errors become their message text.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Json(value) => value.clone(),
            FieldValue::Error(err) => Value::String(err.to_string()),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            FieldValue::Error(err) => f.debug_tuple("Error").field(&err.to_string()).finish(),
        }
    }
}

/// A single named value
#[derive(Debug, Clone)]
pub struct LogField {
    /// Key inside the application payload
    pub key: String,
    /// Value as written
    pub value: FieldValue,
}

/// Wrap any serializable value under `key`.
///
/// Keys are not validated; empty and duplicate keys are accepted. A value
/// that fails to serialize is recorded as `null`.
pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> LogField {
    let key = key.into();
    let value = serde_json::to_value(value).unwrap_or_else(|e| {
        diagnostics::serialization_failed("field", &key, &e);
        Value::Null
    });

    LogField {
        key,
        value: FieldValue::Json(value),
    }
}

/// Wrap an error under `key`; the record carries its message only
pub fn any_error<E>(key: impl Into<String>, err: E) -> LogField
where
    E: StdError + Send + Sync + 'static,
{
    LogField {
        key: key.into(),
        value: FieldValue::Error(Arc::new(err)),
    }
}

/// Field keyed `"error"` holding the error message, or `""` when absent
pub fn error(err: Option<&dyn StdError>) -> LogField {
    let message = err.map(|e| e.to_string()).unwrap_or_default();
    LogField {
        key: "error".to_string(),
        value: FieldValue::Json(Value::String(message)),
    }
}

/// Trace correlation for one logical request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraceInfo {
    /// Trace identifier
    pub trace_id: String,
    /// Span identifier
    pub span_id: String,
    /// Not written into records
    pub request_id: String,
}

impl TraceInfo {
    /// The part of the correlation written into records
    pub fn correlation(&self) -> TraceCorrelation {
        TraceCorrelation {
            trace_id: self.trace_id.clone(),
            span_id: self.span_id.clone(),
        }
    }
}

/// Trace and span identifiers as they appear under `data.tracing`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceCorrelation {
    /// Trace identifier
    pub trace_id: String,
    /// Span identifier
    pub span_id: String,
}

/// Build a [`TraceInfo`]; `request_id` defaults to an empty string
pub fn with_tracing(
    trace_id: impl Into<String>,
    span_id: impl Into<String>,
    request_id: Option<&str>,
) -> TraceInfo {
    TraceInfo {
        trace_id: trace_id.into(),
        span_id: span_id.into(),
        request_id: request_id.unwrap_or_default().to_string(),
    }
}

/// Per-record options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOption {
    /// Alert level of the record
    pub alert: AlertLevel,
}

impl LogOption {
    /// Option raising the record's alert level
    pub fn alert() -> Self {
        LogOption {
            alert: AlertLevel::Alert,
        }
    }
}

/// Identity; reads well at call sites
pub fn with_option(opts: LogOption) -> LogOption {
    opts
}
