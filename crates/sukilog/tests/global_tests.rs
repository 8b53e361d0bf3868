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
#![allow(clippy::unwrap_used)]
//! Integration tests for the process-wide logger
//!
//! The global slot is shared by every test in this binary, so each test
//! holds `SERIAL` while it touches it.

use std::sync::{Arc, Mutex, MutexGuard};
use sukilog::{
    any, configure_global, global, log_args, set_global, Config, LogArg, LogLevel, SukiLogger,
};
use sukilog_test_utils::{assert_log_type, data_of, CapturingBuilder, TestFixtures};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn install_capture(config: Config) -> Arc<CapturingBuilder> {
    let builder = CapturingBuilder::new();
    let logger =
        SukiLogger::with_builder(config, Arc::<CapturingBuilder>::clone(&builder)).unwrap();
    set_global(logger);
    builder
}

#[test]
fn test_global_is_shared_between_calls() {
    let _guard = serial();
    let first = global();
    let second = global();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_set_global_routes_records() {
    let _guard = serial();
    let builder = install_capture(TestFixtures::config());

    global().info("via global", log_args![any("k", &1)]);

    let entry = builder.latest().unwrap().last().unwrap();
    assert_eq!(entry.message, "via global");
    assert_log_type(&entry, "application");
    assert_eq!(data_of(&entry)["orders"]["k"], 1);
}

#[test]
fn test_set_global_returns_and_flushes_previous() {
    let _guard = serial();
    let first = install_capture(TestFixtures::config());
    let first_sink = first.latest().unwrap();

    let second = CapturingBuilder::new();
    let logger = SukiLogger::with_builder(
        TestFixtures::config(),
        Arc::<CapturingBuilder>::clone(&second),
    )
    .unwrap();
    let previous = set_global(logger).unwrap();

    assert_eq!(previous.config().app_name, "orders");
    assert_eq!(first_sink.flush_count(), 1);

    // Holders of the old instance keep writing to its sink
    previous.warn("old handle", Vec::<LogArg>::new());
    global().warn("new handle", Vec::<LogArg>::new());
    assert_eq!(first_sink.last().unwrap().message, "old handle");
    assert_eq!(second.latest().unwrap().last().unwrap().message, "new handle");
}

#[test]
fn test_configure_global_applies_config() {
    let _guard = serial();
    let config = Config::production()
        .with_app_name("billing")
        .with_level(LogLevel::Error);
    configure_global(config).unwrap();

    let logger = global();
    assert_eq!(logger.config().app_name, "billing");
    assert!(!logger.enabled(LogLevel::Warn));
    assert!(logger.enabled(LogLevel::Error));
}
