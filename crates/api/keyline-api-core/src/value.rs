//! Value: the closed set of runtime values a keyframe can carry.
//!
//! Sampling dispatches on the coarse kind of both endpoints, so the set is
//! deliberately small: numbers, text (which doubles as the carrier for color
//! strings), and flags. All numeric types use f64.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight kind enum for dispatch and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Flag => "flag",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar number (positions, factors, filter amounts, ...)
    Number(f64),

    /// Text; also carries color strings ("#1a2b3c", "rgba(...)")
    Text(String),

    /// Boolean (step-only for interpolation)
    Flag(bool),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Flag(_) => ValueKind::Flag,
        }
    }

    /// Strict numeric accessor. Flags are *not* numbers here; treating them
    /// as 0/1 would let continuous interpolation silently accept booleans.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the text payload, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Coerce any value into display text. Used by the text-reveal family,
    /// which accepts anything string-coercible.
    pub fn coerce_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{n}"),
            Value::Flag(b) => b.to_string(),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Flag(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
