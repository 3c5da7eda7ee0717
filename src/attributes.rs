//! String-keyed attribute dictionaries attached to vector shapes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single attribute value.
///
/// JSON arrays and objects encountered while parsing are carried as their
/// serialized JSON text rather than structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Attribute dictionary. Owned exclusively by its shape, never aliased between
/// shapes.
pub type AttrDict = IndexMap<String, AttrValue>;

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&JsonValue> for AttrValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => AttrValue::Null,
            JsonValue::Bool(b) => AttrValue::Bool(*b),
            JsonValue::Number(n) => AttrValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => AttrValue::String(s.clone()),
            other => AttrValue::String(other.to_string()),
        }
    }
}

impl From<&AttrValue> for JsonValue {
    fn from(value: &AttrValue) -> Self {
        match value {
            AttrValue::Null => JsonValue::Null,
            AttrValue::Bool(b) => JsonValue::Bool(*b),
            AttrValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            AttrValue::String(s) => JsonValue::String(s.clone()),
        }
    }
}

/// Convert GeoJSON feature properties into an attribute dictionary.
pub(crate) fn attrs_from_json(props: &serde_json::Map<String, JsonValue>) -> AttrDict {
    props
        .iter()
        .map(|(key, value)| (key.clone(), AttrValue::from(value)))
        .collect()
}

/// Convert an attribute dictionary back into JSON feature properties.
pub(crate) fn attrs_to_json(attrs: &AttrDict) -> serde_json::Map<String, JsonValue> {
    attrs
        .iter()
        .map(|(key, value)| (key.clone(), JsonValue::from(value)))
        .collect()
}
