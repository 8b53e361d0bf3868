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
//! Logger configuration.
//!
//! [`Config`] holds the minimum level, the identity written on every
//! record and the HTTP body size limit. It deserializes with serde so it
//! can live inside an application's own config file, and `SUKILOG_*`
//! environment variables override it.

use crate::error::{LogError, LogResult};
use crate::level::LogLevel;
use serde::{Deserialize, Serialize};

/// Default HTTP body size limit in bytes (1 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 1_048_576;

/// Environment variable overriding [`Config::log_level`]
pub const ENV_LEVEL: &str = "SUKILOG_LEVEL";
/// Environment variable overriding [`Config::app_name`]
pub const ENV_APP_NAME: &str = "SUKILOG_APP_NAME";
/// Environment variable overriding [`Config::version`]
pub const ENV_VERSION: &str = "SUKILOG_VERSION";
/// Environment variable overriding [`Config::max_body_size`]
pub const ENV_MAX_BODY_SIZE: &str = "SUKILOG_MAX_BODY_SIZE";

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level written by the sink
    pub log_level: LogLevel,

    /// Written as `app_name`; also the payload key for application fields
    pub app_name: String,

    /// Written as `version`
    pub version: String,

    /// HTTP bodies longer than this many bytes are replaced; 0 disables
    pub max_body_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config::production()
    }
}

impl Config {
    /// The documented default: info level, "application", "1.0.0", 1 MiB
    pub fn production() -> Self {
        Config {
            log_level: LogLevel::Info,
            app_name: "application".to_string(),
            version: "1.0.0".to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    /// Set the minimum level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set the application name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the application version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the HTTP body size limit
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Production defaults with environment overrides applied
    pub fn from_env() -> LogResult<Self> {
        let mut config = Config::production();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `SUKILOG_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> LogResult<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> LogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LEVEL) {
            self.log_level = value.parse().map_err(|_| {
                LogError::env_var(
                    ENV_LEVEL,
                    &value,
                    "expected one of: debug, info, warn, error, panic, fatal",
                )
            })?;
        }
        if let Some(value) = lookup(ENV_APP_NAME) {
            self.app_name = value;
        }
        if let Some(value) = lookup(ENV_VERSION) {
            self.version = value;
        }
        if let Some(value) = lookup(ENV_MAX_BODY_SIZE) {
            self.max_body_size = value.trim().parse().map_err(|_| {
                LogError::env_var(ENV_MAX_BODY_SIZE, &value, "expected a byte count")
            })?;
        }
        Ok(())
    }
}
