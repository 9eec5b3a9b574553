//! Schemaless property values.
//!
//! `PropertyValue` mirrors JSON's data model so a feature's `properties`
//! object survives decoding without loss.

use rustc_hash::FxHashMap;

/// A feature's property bag. Keys are unique.
pub type Properties = FxHashMap<String, PropertyValue>;

/// A generic JSON-shaped value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    /// All JSON numbers are held as double precision.
    Number(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(Properties),
    Null,
}

impl PropertyValue {
    /// Returns a short name for the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Number(_) => "number",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Array(_) => "array",
            PropertyValue::Object(_) => "object",
            PropertyValue::Null => "null",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}
