//! Depth-bounded structural formatter.
//!
//! The depth cap is the only guard against runaway recursion: once `depth`
//! exceeds [`MAX_DEPTH`] the formatter returns [`DEPTH_PLACEHOLDER`] without
//! looking at the value at all.

use crate::value::{format_number, Value};

/// Deepest level that is still formatted.
pub const MAX_DEPTH: usize = 5;

/// Emitted in place of anything nested deeper than [`MAX_DEPTH`].
pub const DEPTH_PLACEHOLDER: &str = "[Max Depth Reached]";

/// Spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Where mapping keys and closing braces are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BraceLayout {
    /// Keys one level in from the opening line, closing brace at the
    /// current level: `{\n  a: 1\n}` at depth 0.
    #[default]
    Aligned,
    /// Keys at `depth * indent`, closing brace at `(depth - 1) * indent`
    /// clamped at zero. Matches the layout of the original tutorial logger.
    Legacy,
}

impl BraceLayout {
    fn key_pad(self, depth: usize, indent: usize) -> usize {
        match self {
            BraceLayout::Aligned => (depth + 1) * indent,
            BraceLayout::Legacy => depth * indent,
        }
    }

    fn close_pad(self, depth: usize, indent: usize) -> usize {
        match self {
            BraceLayout::Aligned => depth * indent,
            BraceLayout::Legacy => depth.saturating_sub(1) * indent,
        }
    }
}

/// Formatting knobs for [`stringify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringifyOptions {
    pub indent: usize,
    pub layout: BraceLayout,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            layout: BraceLayout::default(),
        }
    }
}

impl StringifyOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_layout(mut self, layout: BraceLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Formats `value` starting at `depth` with `indent` spaces per level and the
/// default brace layout.
pub fn stringify(value: &Value, indent: usize, depth: usize) -> String {
    stringify_with(value, StringifyOptions::default().with_indent(indent), depth)
}

/// Formats `value` starting at `depth` using `options`.
///
/// Strings are quoted but not escaped, sequences stay on one line, and
/// mappings put one `key: value` entry per line.
pub fn stringify_with(value: &Value, options: StringifyOptions, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return DEPTH_PLACEHOLDER.to_string();
    }

    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Text(s) => format!("\"{s}\""),
        Value::Number(n) => format_number(*n),
        Value::Boolean(b) => b.to_string(),
        Value::Sequence(items) => {
            let nested = items
                .iter()
                .map(|item| stringify_with(item, options, depth + 1))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{nested}]")
        }
        Value::Mapping(entries) => {
            let key_pad = " ".repeat(options.layout.key_pad(depth, options.indent));
            let nested = entries
                .iter()
                .map(|(key, item)| {
                    format!("{key_pad}{key}: {}", stringify_with(item, options, depth + 1))
                })
                .collect::<Vec<_>>()
                .join(",\n");
            let close_pad = " ".repeat(options.layout.close_pad(depth, options.indent));
            format!("{{\n{nested}\n{close_pad}}}")
        }
        Value::Other(text) => text.clone(),
    }
}
