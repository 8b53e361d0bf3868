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
//! In-memory sinks and builders.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use sukilog::{BuildSink, EncoderConfig, Entry, LogError, LogLevel, LogResult, Sink};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sink keeping every entry it is handed
#[derive(Debug)]
pub struct CaptureSink {
    encoder: EncoderConfig,
    entries: Mutex<Vec<Entry>>,
    flushes: AtomicUsize,
}

impl CaptureSink {
    /// Sink with production encoding at `min_level`
    pub fn new(min_level: LogLevel) -> Self {
        Self::with_encoder(EncoderConfig::production(min_level))
    }

    /// Sink built with an explicit encoder
    pub fn with_encoder(encoder: EncoderConfig) -> Self {
        CaptureSink {
            encoder,
            entries: Mutex::new(Vec::new()),
            flushes: AtomicUsize::new(0),
        }
    }

    /// Encoder the sink was built with
    pub fn encoder(&self) -> &EncoderConfig {
        &self.encoder
    }

    /// All captured entries, oldest first
    pub fn entries(&self) -> Vec<Entry> {
        lock(&self.entries).clone()
    }

    /// The most recent entry
    pub fn last(&self) -> Option<Entry> {
        lock(&self.entries).last().cloned()
    }

    /// Number of captured entries
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured entries
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    /// How many times `flush` was called
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl Sink for CaptureSink {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.encoder.min_level
    }

    fn write(&self, entry: &Entry) -> io::Result<()> {
        lock(&self.entries).push(entry.clone());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Builder handing out a fresh [`CaptureSink`] per build
#[derive(Debug, Default)]
pub struct CapturingBuilder {
    built: Mutex<Vec<Arc<CaptureSink>>>,
}

impl CapturingBuilder {
    /// Shared builder, ready to hand to a logger
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of sinks built so far
    pub fn build_count(&self) -> usize {
        lock(&self.built).len()
    }

    /// Every sink built so far, oldest first
    pub fn sinks(&self) -> Vec<Arc<CaptureSink>> {
        lock(&self.built).clone()
    }

    /// The sink built most recently
    pub fn latest(&self) -> Option<Arc<CaptureSink>> {
        lock(&self.built).last().cloned()
    }
}

impl BuildSink for CapturingBuilder {
    fn build(&self, encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>> {
        let sink = Arc::new(CaptureSink::with_encoder(encoder.clone()));
        lock(&self.built).push(Arc::clone(&sink));
        Ok(sink)
    }
}

/// Builder that always fails
#[derive(Debug, Clone)]
pub struct FailingBuilder {
    /// Message carried by every build error
    pub reason: String,
}

impl FailingBuilder {
    /// Builder failing with `reason`
    pub fn new(reason: impl Into<String>) -> Self {
        FailingBuilder {
            reason: reason.into(),
        }
    }
}

impl BuildSink for FailingBuilder {
    fn build(&self, _encoder: &EncoderConfig) -> LogResult<Arc<dyn Sink>> {
        Err(LogError::sink_build(self.reason.clone()))
    }
}
