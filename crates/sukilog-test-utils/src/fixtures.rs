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
//! Payload fixtures.

use chrono::{DateTime, TimeZone, Utc};
use sukilog::{
    with_event, with_http_request, with_http_response, with_kafka_message, with_kafka_result,
    Config, EventAction, EventLog, EventResult, HttpRequestInfo, HttpResponseInfo, KafkaMessage,
    KafkaResult, LogLevel, StringMap,
};

/// Canned configs and payloads
pub struct TestFixtures;

impl TestFixtures {
    /// Debug-level config for an app called "orders"
    pub fn config() -> Config {
        Config::production()
            .with_app_name("orders")
            .with_version("2.4.0")
            .with_level(LogLevel::Debug)
    }

    /// A fixed instant, so serialized timestamps are stable
    pub fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0)
            .single()
            .unwrap_or_default()
    }

    /// A single JSON content-type header
    pub fn headers() -> StringMap {
        let mut headers = StringMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers
    }

    /// `POST /orders` from 10.1.2.3 carrying `body`
    pub fn http_request(body: &str) -> HttpRequestInfo {
        with_http_request(
            "POST",
            "/orders",
            "10.1.2.3",
            Some(Self::headers()),
            None,
            None,
            body,
        )
    }

    /// Response without error info
    pub fn http_response(status: i64, body: &str) -> HttpResponseInfo {
        with_http_response(status, 12.5, body, None)
    }

    /// Message on `orders.created` at the fixed timestamp
    pub fn kafka_message() -> KafkaMessage {
        with_kafka_message(
            "orders.created",
            2,
            1024,
            None,
            "order-42",
            r#"{"id":42}"#,
            Self::timestamp(),
        )
    }

    /// Successful result
    pub fn kafka_result() -> KafkaResult {
        with_kafka_result(3.75, None)
    }

    /// Successful `order` creation with reference `ref-42`
    pub fn event() -> EventLog {
        with_event(
            "order",
            EventAction::Create,
            EventResult::Success,
            &serde_json::json!({"id": 42}),
            "ref-42",
        )
    }
}
