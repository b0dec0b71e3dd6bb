//! Output side of a flush.

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives flushed diagnostic text.
pub trait LogSink: Send + Sync {
    /// Emits one flushed batch.
    fn write(&self, text: &str);

    /// Emits text that bypasses the buffer, such as a failed link log.
    fn write_error(&self, text: &str) {
        self.write(text);
    }
}

/// Browser console on wasm32, stderr everywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, text: &str) {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(text));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, text: &str) {
        eprintln!("{text}");
    }

    #[cfg(target_arch = "wasm32")]
    fn write_error(&self, text: &str) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(text));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_error(&self, text: &str) {
        eprintln!("{text}");
    }
}

/// Keeps every write in memory. Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every batch written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// Every error-channel write so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, text: &str) {
        self.writes.lock().push(text.to_string());
    }

    fn write_error(&self, text: &str) {
        self.errors.lock().push(text.to_string());
    }
}
