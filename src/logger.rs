//! Buffered diagnostic logger.
//!
//! Entries are appended with [`Logger::cache_log`] or [`Logger::log`] and stay
//! in memory until [`Logger::flush_log`] writes them to the sink as one
//! newline-joined batch. Nothing here can fail: a logger must not be able to
//! take down the code it is diagnosing.

use std::mem;

use parking_lot::Mutex;
use tracing::debug;

use crate::sink::{ConsoleSink, LogSink};
use crate::stringify::{stringify_with, StringifyOptions};
use crate::value::Value;

/// Diagnostic log buffer plus the sink it flushes to.
///
/// Construct one at start-up and share it by reference (or `Rc`/`Arc`) with
/// every collaborator that records diagnostics.
pub struct Logger {
    buffer: Mutex<Vec<String>>,
    sink: Box<dyn LogSink>,
    options: StringifyOptions,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger that flushes to the console.
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink)
    }

    pub fn with_sink(sink: impl LogSink + 'static) -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            sink: Box::new(sink),
            options: StringifyOptions::default(),
        }
    }

    /// Replaces the formatting options used by [`Logger::log`] and
    /// [`Logger::stringify`].
    pub fn with_options(mut self, options: StringifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> StringifyOptions {
        self.options
    }

    /// Appends `text` to the buffer.
    pub fn cache_log(&self, text: impl Into<String>) {
        self.buffer.lock().push(text.into());
    }

    /// Writes all buffered entries joined by `\n` and empties the buffer.
    ///
    /// An empty buffer still produces one (empty) write.
    pub fn flush_log(&self) {
        let entries = mem::take(&mut *self.buffer.lock());
        debug!(entries = entries.len(), "flushing diagnostic buffer");
        self.sink.write(&entries.join("\n"));
    }

    /// Records each pair's value; the label is never emitted.
    ///
    /// Labels exist so call sites read as `("link status", status)`. Only the
    /// stringified value lands in the buffer.
    pub fn log<L, V, I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (L, V)>,
        V: Into<Value>,
    {
        for (_label, value) in pairs {
            let text = self.stringify(&value.into());
            self.cache_log(text);
        }
    }

    /// Formats `value` at depth 0 with this logger's options.
    pub fn stringify(&self, value: &Value) -> String {
        stringify_with(value, self.options, 0)
    }

    /// Snapshot of the buffered entries in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.buffer.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Writes straight to the sink's error channel, skipping the buffer.
    pub(crate) fn report_error(&self, text: &str) {
        self.sink.write_error(text);
    }
}
