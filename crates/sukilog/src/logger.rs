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
//! The logger facade.

use crate::compose::{assemble, compose, truncate_body, Composition, LogArg, Scope};
use crate::config::Config;
use crate::diagnostics;
use crate::error::LogResult;
use crate::level::{LogLevel, LogType};
use crate::payload::{EventLog, HttpRequestInfo, HttpResponseInfo, KafkaMessage, KafkaResult};
use crate::sink::{BuildSink, EncoderConfig, Entry, JsonSinkBuilder, Sink};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Structured logger writing uniform records to a [`Sink`].
///
/// Every record carries `app_name`, `version`, `log_type` and `alert` at the
/// top level and the call-specific payload under `data`. Emission methods
/// take `&self` and can be called from any number of threads.
///
/// # Example
///
/// ```ignore
/// use sukilog::{any, log_args, with_tracing, Config, SukiLogger};
///
/// let logger = SukiLogger::new(Config::production().with_app_name("orders"))?;
/// logger.info(
///     "order placed",
///     log_args![with_tracing("trace-1", "span-1", None), any("order_id", &42)],
/// );
/// ```
pub struct SukiLogger {
    config: Config,
    sink: Arc<dyn Sink>,
    builder: Arc<dyn BuildSink>,
}

impl fmt::Debug for SukiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SukiLogger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SukiLogger {
    /// Logger writing JSON lines to stderr
    pub fn new(config: Config) -> LogResult<Self> {
        Self::with_builder(config, Arc::new(JsonSinkBuilder::default()))
    }

    /// Logger whose sinks, now and on [`configure`](Self::configure), come
    /// from `builder`
    pub fn with_builder(config: Config, builder: Arc<dyn BuildSink>) -> LogResult<Self> {
        let sink = builder.build(&EncoderConfig::production(config.log_level))?;
        Ok(SukiLogger {
            config,
            sink,
            builder,
        })
    }

    /// Logger around an already-built sink. Later reconfiguration builds
    /// JSON sinks on stderr.
    pub fn with_sink(config: Config, sink: Arc<dyn Sink>) -> Self {
        SukiLogger {
            config,
            sink,
            builder: Arc::new(JsonSinkBuilder::default()),
        }
    }

    /// Configuration the current sink was built for
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether records at `level` reach the sink
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sink.enabled(level)
    }

    /// Rebuild the sink for `config`.
    ///
    /// The previous sink is flushed before it is dropped. On error the
    /// logger keeps its current sink and configuration.
    pub fn configure(&mut self, config: Config) -> LogResult<()> {
        let sink = self
            .builder
            .build(&EncoderConfig::production(config.log_level))?;
        let previous = std::mem::replace(&mut self.sink, sink);
        if let Err(e) = previous.flush() {
            diagnostics::flush_failed(&e);
        }
        self.config = config;
        Ok(())
    }

    /// Flush the sink
    pub fn sync(&self) -> LogResult<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Write an application record at debug level
    #[track_caller]
    pub fn debug<I>(&self, message: &str, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Debug, message, args, Location::caller());
    }

    /// Write an application record at info level
    #[track_caller]
    pub fn info<I>(&self, message: &str, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Info, message, args, Location::caller());
    }

    /// Write an application record at warn level
    #[track_caller]
    pub fn warn<I>(&self, message: &str, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Warn, message, args, Location::caller());
    }

    /// Write an application record at error level
    #[track_caller]
    pub fn error<I>(&self, message: &str, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Error, message, args, Location::caller());
    }

    /// Write the record, then panic with `message`.
    ///
    /// The panic happens even when the panic level is filtered out.
    #[track_caller]
    pub fn panic<I>(&self, message: &str, args: I) -> !
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Panic, message, args, Location::caller());
        panic!("{}", message);
    }

    /// Write the record, flush, then exit the process with status 1.
    ///
    /// The exit happens even when the fatal level is filtered out.
    #[track_caller]
    pub fn fatal<I>(&self, message: &str, args: I) -> !
    where
        I: IntoIterator<Item = LogArg>,
    {
        self.log(LogLevel::Fatal, message, args, Location::caller());
        if let Err(e) = self.sink.flush() {
            diagnostics::flush_failed(&e);
        }
        std::process::exit(1);
    }

    /// Record an HTTP transaction at info level.
    ///
    /// Only trace and option items in `args` are honoured. Bodies longer
    /// than `max_body_size` are replaced before the record is built.
    #[track_caller]
    pub fn request_http<I>(
        &self,
        message: &str,
        mut request: HttpRequestInfo,
        mut response: HttpResponseInfo,
        args: I,
    ) where
        I: IntoIterator<Item = LogArg>,
    {
        if !self.sink.enabled(LogLevel::Info) {
            return;
        }

        let mut composition = compose(Scope::Handler, &self.config.app_name, args);
        truncate_body(&mut request.body, self.config.max_body_size);
        truncate_body(&mut response.body, self.config.max_body_size);
        composition.insert("http_request", &request);
        composition.insert("http_response", &response);

        self.emit(
            LogLevel::Info,
            message,
            LogType::HttpHandler,
            composition,
            Location::caller(),
        );
    }

    /// Record a broker transaction at info level
    #[track_caller]
    pub fn request_kafka<I>(
        &self,
        message: &str,
        kafka_message: KafkaMessage,
        kafka_result: KafkaResult,
        args: I,
    ) where
        I: IntoIterator<Item = LogArg>,
    {
        if !self.sink.enabled(LogLevel::Info) {
            return;
        }

        let mut composition = compose(Scope::Handler, &self.config.app_name, args);
        composition.insert("kafka_message", &kafka_message);
        composition.insert("kafka_result", &kafka_result);

        self.emit(
            LogLevel::Info,
            message,
            LogType::KafkaHandler,
            composition,
            Location::caller(),
        );
    }

    /// Record a business event at info level
    #[track_caller]
    pub fn event<I>(&self, message: &str, event: EventLog, args: I)
    where
        I: IntoIterator<Item = LogArg>,
    {
        if !self.sink.enabled(LogLevel::Info) {
            return;
        }

        let mut composition = compose(Scope::Handler, &self.config.app_name, args);
        composition.insert("event", &event);

        self.emit(
            LogLevel::Info,
            message,
            LogType::Event,
            composition,
            Location::caller(),
        );
    }

    fn log<I>(&self, level: LogLevel, message: &str, args: I, caller: &'static Location<'static>)
    where
        I: IntoIterator<Item = LogArg>,
    {
        if !self.sink.enabled(level) {
            return;
        }

        let composition = compose(Scope::Application, &self.config.app_name, args);
        self.emit(level, message, LogType::Application, composition, caller);
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        log_type: LogType,
        composition: Composition,
        caller: &'static Location<'static>,
    ) {
        let entry = Entry {
            level,
            message: message.to_string(),
            caller: Some(caller),
            fields: assemble(&self.config, log_type, composition),
        };

        if let Err(e) = self.sink.write(&entry) {
            diagnostics::write_failed(&e);
        }
    }
}

impl Drop for SukiLogger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.flush() {
            diagnostics::flush_failed(&e);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::sink::JsonSink;
    use std::io;

    #[test]
    fn test_configure_failure_keeps_previous_state() {
        let builds = std::sync::atomic::AtomicUsize::new(0);
        let builder = move |encoder: &EncoderConfig| -> LogResult<Arc<dyn Sink>> {
            if builds.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                Ok(Arc::new(JsonSink::new(encoder.clone(), io::sink())))
            } else {
                Err(LogError::sink_build("no output available"))
            }
        };

        let mut logger = SukiLogger::with_builder(Config::production(), Arc::new(builder)).unwrap();
        let err = logger
            .configure(Config::production().with_app_name("other"))
            .unwrap_err();

        assert!(matches!(err, LogError::SinkBuild(_)));
        assert_eq!(logger.config().app_name, "application");
        assert!(logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_configure_applies_level() {
        let mut logger = SukiLogger::new(Config::production()).unwrap();
        assert!(logger.enabled(LogLevel::Info));

        logger
            .configure(Config::production().with_level(LogLevel::Error))
            .unwrap();
        assert!(!logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    #[should_panic(expected = "cannot continue")]
    fn test_panic_unwinds_even_when_filtered() {
        let logger = SukiLogger::with_sink(
            Config::production(),
            Arc::new(JsonSink::new(EncoderConfig::production(LogLevel::Fatal), io::sink())),
        );
        logger.panic("cannot continue", Vec::<LogArg>::new());
    }
}
