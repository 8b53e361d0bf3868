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
//! Error types for logger construction and configuration.
//!
//! Emission itself never fails: only building a sink, parsing
//! configuration and installing the diagnostics subscriber return errors.

use thiserror::Error;

/// Errors surfaced by sukilog
#[derive(Error, Debug)]
pub enum LogError {
    /// A sink could not be constructed
    #[error("Failed to build log sink: {0}")]
    SinkBuild(String),

    /// Unknown level name or value
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Malformed `SUKILOG_*` environment variable
    #[error("Environment variable parsing error: {variable}={value}. {reason}")]
    EnvVar {
        /// Variable name
        variable: String,
        /// Rejected value
        value: String,
        /// What was expected
        reason: String,
    },

    /// Diagnostics subscriber setup failed
    #[error("Diagnostics setup error: {0}")]
    Diagnostics(String),

    /// Sink I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Build a [`LogError::SinkBuild`]
    pub fn sink_build(message: impl Into<String>) -> Self {
        LogError::SinkBuild(message.into())
    }

    /// Build a [`LogError::EnvVar`]
    pub fn env_var(
        variable: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LogError::EnvVar {
            variable: variable.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type LogResult<T> = Result<T, LogError>;
