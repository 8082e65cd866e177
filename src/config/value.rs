//! Typed values held by the config store
//!
//! Values are untyped on disk. Loading sniffs a type (bool, float, int, then
//! string), and typed getters convert on the way out.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i32),
    Str(String),
}

impl Value {
    /// Parse a raw value from the config file. First match wins.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(b) = parse_bool(raw) {
            Value::Bool(b)
        } else if let Ok(f) = raw.parse::<f64>() {
            Value::Float(f)
        } else if let Ok(i) = raw.parse::<i32>() {
            Value::Int(i)
        } else {
            Value::Str(raw.to_string())
        }
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i as i64),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                (*f >= i64::MIN as f64 && *f <= i64::MAX as f64).then_some(*f as i64)
            }
            Value::Str(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            // One entry per line
            Value::Str(s) => f.write_str(&s.replace(['\r', '\n'], " ")),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        // widen through the shortest decimal so 0.1f32 is written as 0.1
        Value::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        match i32::try_from(v) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(f64::from(v)),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Best-effort conversion out of a stored [`Value`]
/// Returns None when the stored value cannot represent `Self`
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Str(s) => parse_bool(s.trim()),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f as f32),
            Value::Int(i) => Some(*i as f32),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Bool(_) => None,
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|i| i32::try_from(i).ok())
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|i| u32::try_from(i).ok())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
