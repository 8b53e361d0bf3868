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
//! sukilog
//!
//! A structured-logging facade producing one uniform record shape for
//! application events, HTTP transactions, broker transactions and business
//! events.
//!
//! # Features
//!
//! - **Uniform records**: `app_name`, `version`, `log_type` and `alert` on
//!   every record, call payload nested under `data`
//! - **Mixed context arguments**: trace correlation, alert options and
//!   key/value fields passed together as [`LogArg`] items
//! - **Domain payloads**: HTTP request/response, Kafka message/result and
//!   business event builders with consistent defaults
//! - **Pluggable sinks**: JSON lines on stderr/stdout or forwarding into
//!   `tracing`
//! - **Default instance**: a lazily-built, fatal-only process-wide logger
//!
//! # Example
//!
//! ```ignore
//! use sukilog::{any, log_args, with_tracing, Config, LogLevel, SukiLogger};
//!
//! fn main() -> Result<(), sukilog::LogError> {
//!     let logger = SukiLogger::new(
//!         Config::production()
//!             .with_app_name("orders")
//!             .with_level(LogLevel::Debug),
//!     )?;
//!
//!     let trace = with_tracing("4bf92f35", "00f067aa", None);
//!     logger.info("order placed", log_args![trace, any("order_id", &42)]);
//!     Ok(())
//! }
//! ```

pub mod compose;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod payload;
pub mod sink;
pub mod tracing_sink;

pub use compose::{DomainPayload, LogArg, BODY_TOO_LARGE};
pub use config::Config;
pub use diagnostics::{init_diagnostics, LogFormat};
pub use error::{LogError, LogResult};
pub use field::{any, any_error, error, with_option, with_tracing, LogField, LogOption, TraceInfo};
pub use global::{configure_global, global, set_global};
pub use level::{AlertLevel, LogLevel, LogType};
pub use logger::SukiLogger;
pub use payload::{
    with_error, with_event, with_http_request, with_http_response, with_kafka_message,
    with_kafka_result, ErrorInfo, EventAction, EventLog, EventResult, HttpRequestInfo,
    HttpResponseInfo, KafkaMessage, KafkaResult, StringMap,
};
pub use sink::{BuildSink, EncoderConfig, Entry, JsonSink, JsonSinkBuilder, LogOutput, Sink};
pub use tracing_sink::{TracingSink, TracingSinkBuilder};
