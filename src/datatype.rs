// used to print out readable forms of a value
use std::fmt;

use serde::Serialize;

/// A modifier value. Exactly one of boolean, number or text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_text(*n)),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Renders a number the way page scripts stringify it: integral values
/// without a fraction, `-0` as `0`, and exponent form (`1e+21`, `1e-7`)
/// outside `1e-6 <= |n| < 1e21`.
fn number_text(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    // shortest digits, only the exponent sign differs
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => exp,
    }
}

/// Rust types a modifier value can be read back as.
///
/// `String` accepts every value, rendering numbers and booleans as text.
/// The other types only accept their own variant; a mismatch reads as absent.
pub trait DataType: Sized {
    fn convert(value: &Value) -> Option<Self>;
}

// ------------- Data Types --------------
impl DataType for bool {
    fn convert(value: &Value) -> Option<bool> {
        value.as_bool()
    }
}
impl DataType for f64 {
    fn convert(value: &Value) -> Option<f64> {
        value.as_number()
    }
}
impl DataType for String {
    fn convert(value: &Value) -> Option<String> {
        Some(value.to_string())
    }
}
