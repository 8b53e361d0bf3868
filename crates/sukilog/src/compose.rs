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
//! Record composition.
//!
//! Callers hand each emission an ordered list of [`LogArg`] items. The
//! composer walks that list once, in call-site order, and folds it into
//! the alert level and the nested `data` object of a single record:
//!
//! - [`LogArg::Trace`] lands under `data.tracing` with only the trace and
//!   span ids; a later trace replaces an earlier one.
//! - [`LogArg::Option`] sets the alert level; the last one wins.
//! - [`LogArg::Field`] is merged by key into `data.<app_name>` (or
//!   `data.payload` when the app name is empty) for application records;
//!   later keys overwrite earlier ones.
//! - everything else is skipped.
//!
//! The fixed top-level fields are added by [`assemble`].

use crate::config::Config;
use crate::diagnostics;
use crate::field::{LogField, LogOption, TraceInfo};
use crate::level::{AlertLevel, LogType};
use crate::payload::{EventLog, HttpRequestInfo, HttpResponseInfo, KafkaMessage, KafkaResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Replacement text for request/response bodies over the size limit
pub const BODY_TOO_LARGE: &str = "body is too large";

/// Payload key used for application fields when the app name is empty
pub const FALLBACK_APP_KEY: &str = "payload";

/// Ordered top-level record fields handed to a sink
pub type Fields = Vec<(&'static str, Value)>;

/// One context item passed alongside a log message
#[derive(Debug, Clone)]
pub enum LogArg {
    /// Trace correlation for `data.tracing`
    Trace(TraceInfo),
    /// Per-record options
    Option(LogOption),
    /// Key/value merged into the application payload
    Field(LogField),
    /// Domain object; skipped by the composer
    Payload(DomainPayload),
}

/// Domain objects that can travel in an argument list.
///
/// The composer does not merge these; the specialized emission methods
/// take their domain objects as explicit parameters instead.
#[derive(Debug, Clone)]
pub enum DomainPayload {
    /// Inbound HTTP request
    HttpRequest(HttpRequestInfo),
    /// HTTP response
    HttpResponse(HttpResponseInfo),
    /// Broker message
    KafkaMessage(KafkaMessage),
    /// Broker handling result
    KafkaResult(KafkaResult),
    /// Business event
    Event(EventLog),
}

impl From<TraceInfo> for LogArg {
    fn from(trace: TraceInfo) -> Self {
        LogArg::Trace(trace)
    }
}

impl From<LogOption> for LogArg {
    fn from(opts: LogOption) -> Self {
        LogArg::Option(opts)
    }
}

impl From<LogField> for LogArg {
    fn from(field: LogField) -> Self {
        LogArg::Field(field)
    }
}

impl From<DomainPayload> for LogArg {
    fn from(payload: DomainPayload) -> Self {
        LogArg::Payload(payload)
    }
}

macro_rules! domain_payload_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(value: $ty) -> Self {
                    LogArg::Payload(DomainPayload::$variant(value))
                }
            }
        )*
    };
}

domain_payload_from! {
    HttpRequestInfo => HttpRequest,
    HttpResponseInfo => HttpResponse,
    KafkaMessage => KafkaMessage,
    KafkaResult => KafkaResult,
    EventLog => Event,
}

/// Which argument kinds a record honours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Leveled application records: trace, option and field items
    Application,
    /// HTTP, Kafka and event records: trace and option items only
    Handler,
}

/// Result of folding an argument list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    /// Alert level of the last option item
    pub alert: AlertLevel,
    /// Contents of the record's `data` object
    pub data: Map<String, Value>,
}

impl Composition {
    /// Serialize `value` into `data` under `key`.
    ///
    /// Serialization failure stores `null` rather than failing the record.
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            diagnostics::serialization_failed("payload", key, &e);
            Value::Null
        });
        self.data.insert(key.to_string(), value);
    }
}

/// Fold `args` into a [`Composition`]
pub fn compose<I>(scope: Scope, app_name: &str, args: I) -> Composition
where
    I: IntoIterator<Item = LogArg>,
{
    let mut composition = Composition::default();
    let mut app_data = Map::new();

    for arg in args {
        match arg {
            LogArg::Trace(trace) => {
                composition.insert("tracing", &trace.correlation());
            }
            LogArg::Option(opts) => composition.alert = opts.alert,
            LogArg::Field(field) if scope == Scope::Application => {
                app_data.insert(field.key, field.value.to_json());
            }
            LogArg::Field(_) | LogArg::Payload(_) => {}
        }
    }

    if !app_data.is_empty() {
        let app_key = if app_name.is_empty() {
            FALLBACK_APP_KEY
        } else {
            app_name
        };
        composition
            .data
            .insert(app_key.to_string(), Value::Object(app_data));
    }

    composition
}

/// Replace `body` with [`BODY_TOO_LARGE`] when it exceeds `max_body_size`
/// bytes. A limit of zero disables the check.
pub fn truncate_body(body: &mut String, max_body_size: usize) {
    if max_body_size > 0 && body.len() > max_body_size {
        *body = BODY_TOO_LARGE.to_string();
    }
}

/// Build the ordered top-level fields of a record:
/// `app_name`, `version`, `log_type`, `alert`, `data`.
pub fn assemble(config: &Config, log_type: LogType, composition: Composition) -> Fields {
    vec![
        ("app_name", Value::String(config.app_name.clone())),
        ("version", Value::String(config.version.clone())),
        ("log_type", Value::String(log_type.as_str().to_string())),
        ("alert", Value::from(composition.alert.as_i32())),
        ("data", Value::Object(composition.data)),
    ]
}
