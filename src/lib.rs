#![cfg_attr(target_arch = "wasm32", allow(dead_code))]
//! WebGL quad tutorial with a buffered diagnostic logger.
//!
//! The logger ([`Logger`]) and its depth-bounded formatter compile on every
//! target. The WebGL renderer and the JavaScript bindings only exist on
//! wasm32.

pub mod error;
pub mod introspect;
pub mod logger;
pub mod scene;
pub mod sink;
pub mod stringify;
pub mod value;

pub use error::RenderError;
pub use introspect::{ActiveInfo, GlIntrospect, GlObject, RendererInfo};
pub use logger::Logger;
pub use sink::{ConsoleSink, LogSink, MemorySink};
pub use stringify::{stringify, stringify_with, BraceLayout, StringifyOptions};
pub use value::Value;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::Logger;

    pub mod bindings;
    mod render;
    pub mod webgl;

    pub const CANVAS_ID: &str = "gl-canvas";

    /// Routes panics and `tracing` events to the browser console.
    ///
    /// Safe to call more than once; later calls keep the first subscriber.
    pub fn init_diagnostics() {
        console_error_panic_hook::set_once();
        if tracing_wasm::try_set_as_global_default().is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        init_diagnostics();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let log = Logger::new();
        let result = render::start(&canvas, &log);
        log.flush_log();
        result
    }
}
