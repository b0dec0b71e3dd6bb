//! Structured values accepted by the diagnostic stringifier.
//!
//! `Value` is a plain tree: collaborators build one from Rust data (or from
//! JSON / JS values) and hand it to the logger. Mapping entries keep their
//! insertion order, which is the order the stringifier emits them in.

use std::fmt;

/// A diagnostic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// An absent value, printed as `undefined`.
    Undefined,
    Text(String),
    Number(f64),
    Boolean(bool),
    Sequence(Vec<Value>),
    /// Keyed entries in insertion order.
    Mapping(Vec<(String, Value)>),
    /// Anything else, already converted to its textual form.
    Other(String),
}

impl Value {
    /// Builds a `Mapping` from key/value pairs, keeping their order.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps any displayable value as `Other`.
    pub fn other(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }
}

/// Formats a number the way JavaScript's `Number.prototype.toString` does.
///
/// Integral values print without a fraction, `-0` prints as `0`, and values
/// outside `[1e-6, 1e21)` switch to exponent form with an explicit sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    // Rust prints `1e21` / `1.5e-7`; JavaScript wants `1e+21` / `1.5e-7`.
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::stringify(
            self,
            crate::stringify::DEFAULT_INDENT,
            0,
        ))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Sequence(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Other(n.to_string()),
            },
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::from(items),
            Json::Object(map) => Value::mapping(map),
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn non_finite_numbers_use_js_names() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn large_and_tiny_numbers_use_signed_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn f32_widening_matches_typed_array_text() {
        assert_eq!(format_number(f64::from(0.1f32)), "0.10000000149011612");
    }

    #[test]
    fn json_object_becomes_mapping() {
        let json = serde_json::json!({ "a": 1, "b": [true, null] });
        let value = Value::from(json);
        assert_eq!(
            value,
            Value::Mapping(vec![
                ("a".into(), Value::Number(1.0)),
                (
                    "b".into(),
                    Value::Sequence(vec![Value::Boolean(true), Value::Null])
                ),
            ])
        );
    }

    #[test]
    fn json_object_keeps_source_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).expect("valid json");
        let value = Value::from(json);
        assert_eq!(value.to_string(), "{\n  z: 1,\n  a: 2,\n  m: 3\n}");
    }

    #[test]
    fn none_becomes_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }
}
