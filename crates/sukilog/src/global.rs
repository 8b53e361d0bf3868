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
//! Process-wide default logger.
//!
//! The default instance is built on first access, exactly once, with a
//! fatal-only JSON sink on stderr so an unconfigured process stays quiet.
//! Applications replace it wholesale with [`configure_global`] or
//! [`set_global`]; callers already holding the previous `Arc` keep using it.

use crate::config::Config;
use crate::diagnostics;
use crate::error::LogResult;
use crate::level::LogLevel;
use crate::logger::SukiLogger;
use crate::sink::{EncoderConfig, JsonSink, LogOutput};
use std::sync::{Arc, OnceLock, RwLock};

static GLOBAL: OnceLock<RwLock<Arc<SukiLogger>>> = OnceLock::new();

#[cfg(test)]
static FALLBACK_BUILDS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

fn fallback() -> SukiLogger {
    #[cfg(test)]
    FALLBACK_BUILDS.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

    let config = Config::production().with_level(LogLevel::Fatal);
    let sink = JsonSink::for_output(EncoderConfig::production(config.log_level), LogOutput::Stderr);
    SukiLogger::with_sink(config, Arc::new(sink))
}

fn slot() -> &'static RwLock<Arc<SukiLogger>> {
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(fallback())))
}

/// The process-wide logger, built on first use
pub fn global() -> Arc<SukiLogger> {
    let guard = slot().read().unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(&guard)
}

/// Replace the process-wide logger, returning the previous one after
/// flushing its sink
pub fn set_global(logger: SukiLogger) -> Option<Arc<SukiLogger>> {
    let logger = Arc::new(logger);
    let slot = match GLOBAL.get() {
        Some(slot) => slot,
        None => match GLOBAL.set(RwLock::new(Arc::clone(&logger))) {
            Ok(()) => return None,
            // Lost the race against a first access; replace what it built
            Err(_) => slot(),
        },
    };

    let mut guard = slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = std::mem::replace(&mut *guard, logger);
    drop(guard);

    if let Err(e) = previous.sync() {
        diagnostics::flush_failed(&e);
    }
    Some(previous)
}

/// Build a JSON-on-stderr logger for `config` and install it as the
/// process-wide logger
pub fn configure_global(config: Config) -> LogResult<()> {
    let logger = SukiLogger::new(config)?;
    set_global(logger);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    global()
                })
            })
            .collect();

        let loggers: Vec<Arc<SukiLogger>> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(loggers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(FALLBACK_BUILDS.load(Ordering::SeqCst), 1);

        let logger = &loggers[0];
        assert_eq!(logger.config().log_level, LogLevel::Fatal);
        assert!(!logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Fatal));
    }
}
