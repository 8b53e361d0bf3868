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
//! Internal diagnostics channel.
//!
//! Logging calls never fail, so problems inside sukilog itself (a value
//! that does not serialize, a sink write error) are reported as `tracing`
//! events under [`DIAGNOSTICS_TARGET`]. Nothing is printed unless the
//! application installs a subscriber, for example with [`init_diagnostics`].

use crate::error::{LogError, LogResult};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Target of every diagnostic event
pub const DIAGNOSTICS_TARGET: &str = "sukilog::diagnostics";

/// Environment variable read when no explicit filter is given
pub const ENV_DIAGNOSTICS_FILTER: &str = "SUKILOG_DIAG";

/// Output format of the diagnostics subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human-readable
    #[default]
    Pretty,

    /// Single line per event
    Compact,

    /// JSON, one object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LogError::Diagnostics(format!(
                "Unknown format: {}. Expected one of: pretty, compact, json",
                s
            ))),
        }
    }
}

pub(crate) fn serialization_failed(kind: &str, key: &str, err: &serde_json::Error) {
    tracing::debug!(
        target: DIAGNOSTICS_TARGET,
        kind,
        key,
        error = %err,
        "value could not be serialized, recording an empty value"
    );
}

pub(crate) fn write_failed(err: &dyn std::fmt::Display) {
    tracing::warn!(target: DIAGNOSTICS_TARGET, error = %err, "log sink write failed");
}

pub(crate) fn flush_failed(err: &dyn std::fmt::Display) {
    tracing::warn!(target: DIAGNOSTICS_TARGET, error = %err, "log sink flush failed");
}

/// Install a global `tracing` subscriber printing to stderr.
///
/// `filter` takes an `EnvFilter` directive such as `"sukilog=debug"`. When
/// absent, `SUKILOG_DIAG` is read, then `"warn"` is used. Fails if a global
/// subscriber is already installed.
///
/// # Example
///
/// ```ignore
/// use sukilog::{init_diagnostics, LogFormat};
///
/// init_diagnostics(LogFormat::Compact, Some("sukilog::diagnostics=debug"))?;
/// ```
pub fn init_diagnostics(format: LogFormat, filter: Option<&str>) -> LogResult<()> {
    let env_filter = build_env_filter(filter)?;

    let (pretty, compact, json) = match format {
        LogFormat::Pretty => (
            Some(fmt::layer().with_writer(std::io::stderr).pretty()),
            None,
            None,
        ),
        LogFormat::Compact => (
            None,
            Some(fmt::layer().with_writer(std::io::stderr).compact()),
            None,
        ),
        LogFormat::Json => (
            None,
            None,
            Some(fmt::layer().with_writer(std::io::stderr).json()),
        ),
    };

    Registry::default()
        .with(env_filter)
        .with(pretty)
        .with(compact)
        .with(json)
        .try_init()
        .map_err(|e| LogError::Diagnostics(format!("Failed to install subscriber: {}", e)))
}

fn build_env_filter(filter: Option<&str>) -> LogResult<EnvFilter> {
    let directive = filter
        .map(str::to_string)
        .or_else(|| std::env::var(ENV_DIAGNOSTICS_FILTER).ok())
        .unwrap_or_else(|| "warn".to_string());

    EnvFilter::try_new(&directive).map_err(|e| {
        LogError::Diagnostics(format!("Failed to parse filter '{}': {}", directive, e))
    })
}
