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
//! Convenience macros for building argument lists and emitting records.

/// Build a `Vec<LogArg>` from values of mixed kinds
///
/// # Example
///
/// ```ignore
/// let args = log_args![
///     with_tracing("trace-1", "span-1", None),
///     with_option(LogOption::alert()),
///     any("order_id", &42),
/// ];
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),+]
    };
}

/// Log at info level through a logger
///
/// # Example
///
/// ```ignore
/// log_info!(logger, "order placed", any("order_id", &42), trace);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $msg:expr) => {
        $logger.info($msg, $crate::log_args![])
    };
    ($logger:expr, $msg:expr, $($arg:expr),+ $(,)?) => {
        $logger.info($msg, $crate::log_args![$($arg),+])
    };
}

/// Log at debug level through a logger
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $msg:expr) => {
        $logger.debug($msg, $crate::log_args![])
    };
    ($logger:expr, $msg:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug($msg, $crate::log_args![$($arg),+])
    };
}

/// Log at warn level through a logger
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $msg:expr) => {
        $logger.warn($msg, $crate::log_args![])
    };
    ($logger:expr, $msg:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn($msg, $crate::log_args![$($arg),+])
    };
}

/// Log at error level through a logger
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $msg:expr) => {
        $logger.error($msg, $crate::log_args![])
    };
    ($logger:expr, $msg:expr, $($arg:expr),+ $(,)?) => {
        $logger.error($msg, $crate::log_args![$($arg),+])
    };
}
