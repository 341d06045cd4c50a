//! Raw field values and the input/output bags passed through a conversion
//!
//! A presentation layer collects whatever the user typed (text) or whatever
//! a client sent (numbers), so values stay raw until a conversion reads them
//! through one of the guard accessors on [`InputBag`].

use crate::number::{display_number, parse_number};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A raw field value as collected from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number. Empty or non-numeric text and NaN give `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_nan() => None,
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => parse_number(s),
        }
    }

    /// Text form of the value. Numbers use [`display_number`].
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawValue::Number(n) => Cow::Owned(display_number(*n)),
            RawValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Empty text is the "nothing typed yet" state
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.is_empty())
    }

    /// Truthiness: empty text, zero and NaN are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            RawValue::Number(n) => *n != 0.0 && !n.is_nan(),
            RawValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Number(_) => "Number",
            RawValue::Text(_) => "Text",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// Current form values, keyed by input field key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputBag {
    values: HashMap<String, RawValue>,
}

impl InputBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, replacing any earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ========== Guards ==========

    /// Numeric value of a field that must be present.
    ///
    /// Missing, empty, non-numeric and NaN values give `None`; zero is a value.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(RawValue::as_number)
    }

    /// Numeric value of a field that must be truthy.
    ///
    /// A numeric zero means "unset", but typed text such as `"0"` is a value.
    pub fn nonzero(&self, key: &str) -> Option<f64> {
        self.values
            .get(key)
            .filter(|v| v.is_truthy())
            .and_then(RawValue::as_number)
    }

    /// Text of a field that must be truthy (non-empty text, non-zero number)
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values
            .get(key)
            .filter(|v| v.is_truthy())
            .map(RawValue::as_text)
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for InputBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Computed results, keyed by output field key.
///
/// An empty string means the inputs were insufficient or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputBag {
    values: HashMap<String, String>,
}

impl OutputBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key mapped to the empty string
    pub fn blank<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            values: keys.into_iter().map(|k| (k.to_string(), String::new())).collect(),
        }
    }

    /// A bag with one output
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut bag = Self::new();
        bag.insert(key, value);
        bag
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when no output carries a value
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep only the outputs whose key satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.values.retain(|k, _| keep(k));
    }
}
