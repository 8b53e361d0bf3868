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
//! Assertions on the uniform record shape.

use serde_json::Value;
use sukilog::Entry;

/// Top-level record keys, in emission order
pub const RECORD_KEYS: [&str; 5] = ["app_name", "version", "log_type", "alert", "data"];

/// Assert `entry` has exactly the uniform top-level fields, in order
pub fn assert_record_shape(entry: &Entry) {
    let keys: Vec<&str> = entry.fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, RECORD_KEYS, "unexpected top-level fields in {:?}", entry);
    assert!(
        entry.field("data").is_some_and(Value::is_object),
        "data must be an object in {:?}",
        entry
    );
}

/// Assert the `log_type` field
pub fn assert_log_type(entry: &Entry, expected: &str) {
    assert_eq!(
        entry.field("log_type").and_then(Value::as_str),
        Some(expected),
        "unexpected log_type in {:?}",
        entry
    );
}

/// Assert the `alert` field
pub fn assert_alert(entry: &Entry, expected: i64) {
    assert_eq!(
        entry.field("alert").and_then(Value::as_i64),
        Some(expected),
        "unexpected alert in {:?}",
        entry
    );
}

/// The `data` object of `entry`, or `Value::Null` if missing
pub fn data_of(entry: &Entry) -> Value {
    entry.field("data").cloned().unwrap_or(Value::Null)
}
