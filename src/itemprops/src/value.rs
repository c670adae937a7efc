//! Numeric extraction from raw property values.
//!
//! Property values are usually strings holding a number with a unit suffix
//! (`"-1.5m/s"`, `"35%"`), but the dataset is loose: values may be absent,
//! null, numeric, or arbitrary text. Nothing here ever fails; anything that
//! does not yield a number yields `0.0`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

/// First signed decimal token: optional minus, digits, optional fraction.
static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("numeric token pattern is valid"));

/// Classification of a property's raw `value` field.
///
/// Every variant except [`RawValue::Present`] is "empty" and is skipped by
/// the scanner without attempting extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// The property object has no `value` key.
    Absent,
    Null,
    False,
    EmptyString,
    /// Numeric zero, integer or float.
    Zero,
    EmptyArray,
    EmptyObject,
    Present(&'a Value),
}

impl<'a> RawValue<'a> {
    /// Classify an optional JSON value.
    pub fn classify(value: Option<&'a Value>) -> Self {
        let Some(value) = value else {
            return RawValue::Absent;
        };

        match value {
            Value::Null => RawValue::Null,
            Value::Bool(false) => RawValue::False,
            Value::String(s) if s.is_empty() => RawValue::EmptyString,
            Value::Number(n) if n.as_f64() == Some(0.0) => RawValue::Zero,
            Value::Array(a) if a.is_empty() => RawValue::EmptyArray,
            Value::Object(o) if o.is_empty() => RawValue::EmptyObject,
            other => RawValue::Present(other),
        }
    }

    /// Classify the `value` field of a property object.
    ///
    /// Non-object property values have no `value` field and classify as
    /// [`RawValue::Absent`].
    pub fn of_property(property: &'a Value) -> Self {
        Self::classify(property.get("value"))
    }

    /// True for every empty kind.
    pub fn is_skipped(&self) -> bool {
        !matches!(self, RawValue::Present(_))
    }

    /// The underlying value, if present.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            RawValue::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Textual form of a present value, as handed to [`parse_numeric`].
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.value().map(value_text)
    }
}

/// Render a JSON value as plain text: strings verbatim, everything else in
/// compact JSON form.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Parse the first signed decimal token found in `text`.
///
/// Returns `0.0` when there is no token or when the token does not parse to
/// a finite float.
pub fn parse_numeric(text: &str) -> f64 {
    let Some(token) = NUMERIC_TOKEN.find(text) else {
        return 0.0;
    };

    match token.as_str().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Extract a number from an arbitrary JSON value.
///
/// Only strings are searched; every other value yields `0.0`.
pub fn extract_number(value: &Value) -> f64 {
    match value {
        Value::String(s) => parse_numeric(s),
        _ => 0.0,
    }
}
