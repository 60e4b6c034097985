use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Largest magnitude an `f64` can hold while still being an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single parameter value of a step.
///
/// Values coming from the server that are neither text, number nor boolean are kept
/// as raw JSON so they survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Json(serde_json::Value),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn integral(n: f64) -> Option<i64> {
        (n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER).then_some(n as i64)
    }
}

// Whole numbers go out as JSON integers so `{"seconds": 5}` stays `5`, not `5.0`.
impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Number(n) => match Self::integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            ParamValue::Text(s) => serializer.serialize_str(s),
            ParamValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => match Self::integral(*n) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}
