//! JavaScript-facing `DebugLog` class.
//!
//! JS values can be cyclic, so the conversion into [`Value`] stops at the
//! same depth cap the formatter uses. Anything below the cap would be replaced
//! by the placeholder anyway.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::stringify::{stringify_with, MAX_DEPTH};
use crate::{Logger, StringifyOptions, Value};

/// Converts a JS value, reading at most `MAX_DEPTH + 1` levels deep.
pub fn value_from_js(value: &JsValue) -> Value {
    convert(value, 0)
}

fn convert(value: &JsValue, depth: usize) -> Value {
    if depth > MAX_DEPTH {
        return Value::Undefined;
    }

    if value.is_null() {
        Value::Null
    } else if value.is_undefined() {
        Value::Undefined
    } else if let Some(s) = value.as_string() {
        Value::Text(s)
    } else if let Some(n) = value.as_f64() {
        Value::Number(n)
    } else if let Some(b) = value.as_bool() {
        Value::Boolean(b)
    } else if let Some(array) = value.dyn_ref::<Array>() {
        array
            .iter()
            .map(|item| convert(&item, depth + 1))
            .collect()
    } else if value.is_object() && !value.is_function() {
        let object = value.unchecked_ref::<Object>();
        let entries = Object::keys(object)
            .iter()
            .filter_map(|key| {
                let name = key.as_string()?;
                // A throwing getter reads as undefined rather than aborting the log.
                let item = Reflect::get(object, &key).unwrap_or(JsValue::UNDEFINED);
                Some((name, convert(&item, depth + 1)))
            })
            .collect();
        Value::Mapping(entries)
    } else {
        // Functions, symbols and bigints: whatever their own toString says.
        Value::Other(value.unchecked_ref::<Object>().to_string().into())
    }
}

/// Buffered diagnostic log for page scripts.
#[wasm_bindgen]
pub struct DebugLog {
    inner: Logger,
}

#[wasm_bindgen]
impl DebugLog {
    #[wasm_bindgen(constructor)]
    pub fn new(indent: Option<usize>) -> DebugLog {
        let options = StringifyOptions::default();
        let options = indent.map_or(options, |i| options.with_indent(i));
        DebugLog {
            inner: Logger::new().with_options(options),
        }
    }

    #[wasm_bindgen(js_name = cacheLog)]
    pub fn cache_log(&self, text: String) {
        self.inner.cache_log(text);
    }

    #[wasm_bindgen(js_name = flushLog)]
    pub fn flush_log(&self) {
        self.inner.flush_log();
    }

    /// Takes `[value, label, value, label, ...]` and records the values.
    pub fn log(&self, args: Array) {
        let pairs: Vec<(JsValue, Value)> = args
            .iter()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| {
                let label = pair.get(1).cloned().unwrap_or(JsValue::UNDEFINED);
                (label, value_from_js(&pair[0]))
            })
            .collect();
        self.inner.log(pairs);
    }

    pub fn stringify(&self, value: JsValue, indent: Option<usize>, depth: Option<usize>) -> String {
        let options = self.inner.options();
        let options = indent.map_or(options, |i| options.with_indent(i));
        stringify_with(&value_from_js(&value), options, depth.unwrap_or(0))
    }

    /// Buffered entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.inner.entries()
    }
}
