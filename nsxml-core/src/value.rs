//! Primitive values carried between tokens.
//!
//! A value has no role of its own: the writer's current state decides whether
//! it is an attribute value, text content or a comment body.

use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Primitive payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String content.
    Text(Arc<str>),

    /// Integer: stringified in decimal.
    Integer(i64),

    /// Float: shortest round-trip form, so `5.0` renders as `5`.
    Float(f64),

    /// Boolean: `true` or `false`.
    Bool(bool),
}

impl Value {
    /// Try to get as string content.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Append the stringified value to `out`.
    ///
    /// Only `Text` can contain markup characters; numbers and booleans never
    /// need escaping.
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Value::Text(s) => out.push_str(s),
            // Writing into a String cannot fail.
            other => {
                let _ = write!(out, "{}", other);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
