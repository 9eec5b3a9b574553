//! Property value decoding/encoding.
//!
//! Decoding never fails: an unrecognised value becomes `Null`, so a corrupt
//! property bag cannot abort the decode of the document around it.

use log::debug;
use serde_json::{Map, Number, Value};

use crate::error::EncodeError;
use crate::model::{Properties, PropertyValue};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes any JSON value into a `PropertyValue`.
///
/// Interpretations are tried in order (string, number, bool, array, object)
/// and the first that accepts the value wins. `Null` is the fallback.
pub fn decode_property_value(value: &Value) -> PropertyValue {
    try_string(value)
        .or_else(|| try_number(value))
        .or_else(|| try_bool(value))
        .or_else(|| try_array(value))
        .or_else(|| try_object(value))
        .unwrap_or(PropertyValue::Null)
}

fn try_string(value: &Value) -> Option<PropertyValue> {
    value.as_str().map(|s| PropertyValue::String(s.to_string()))
}

fn try_number(value: &Value) -> Option<PropertyValue> {
    value.as_f64().map(PropertyValue::Number)
}

fn try_bool(value: &Value) -> Option<PropertyValue> {
    value.as_bool().map(PropertyValue::Bool)
}

fn try_array(value: &Value) -> Option<PropertyValue> {
    value
        .as_array()
        .map(|items| PropertyValue::Array(items.iter().map(decode_property_value).collect()))
}

fn try_object(value: &Value) -> Option<PropertyValue> {
    value.as_object().map(|object| PropertyValue::Object(decode_members(object)))
}

fn decode_members(object: &Map<String, Value>) -> Properties {
    object
        .iter()
        .map(|(key, value)| (key.clone(), decode_property_value(value)))
        .collect()
}

/// Decodes an optional `properties` member.
///
/// Absent, `null` and non-object members all give an empty bag.
pub fn decode_properties(value: Option<&Value>) -> Properties {
    match value {
        Some(Value::Object(object)) => decode_members(object),
        Some(other) => {
            debug!("ignoring non-object properties member ({})", json_kind(other));
            Properties::default()
        }
        None => Properties::default(),
    }
}

/// Returns a short name for the JSON kind of `value`, used in log output.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a `PropertyValue` as JSON.
pub fn encode_property_value(value: &PropertyValue) -> Result<Value, EncodeError> {
    Ok(match value {
        PropertyValue::String(s) => Value::String(s.clone()),
        PropertyValue::Number(n) => Value::Number(encode_number(*n, "property value")?),
        PropertyValue::Bool(b) => Value::Bool(*b),
        PropertyValue::Array(items) => Value::Array(
            items
                .iter()
                .map(encode_property_value)
                .collect::<Result<_, _>>()?,
        ),
        PropertyValue::Object(members) => Value::Object(encode_properties(members)?),
        PropertyValue::Null => Value::Null,
    })
}

/// Encodes a property bag as a JSON object.
pub fn encode_properties(properties: &Properties) -> Result<Map<String, Value>, EncodeError> {
    properties
        .iter()
        .map(|(key, value)| Ok((key.clone(), encode_property_value(value)?)))
        .collect()
}

/// Converts a float to a JSON number, rejecting NaN and infinities.
pub(crate) fn encode_number(n: f64, context: &'static str) -> Result<Number, EncodeError> {
    Number::from_f64(n).ok_or(EncodeError::NonFiniteNumber { context })
}
