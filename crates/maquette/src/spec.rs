//! Loading and attribute access for the declarative spec document.
//!
//! The input is hierarchical YAML. Every element is a mapping with exactly
//! one top-level key naming its type (`CONTAINER`, `LABEL`, `BUTTON`,
//! `INPUT`, `IMAGE`, `TABLE`); the value carries type-specific attributes
//! such as `CONTENT`, `TYPE`, `PLACEHOLDER`, `FLEX-DIRECTION`, `CHILDREN`,
//! `COLUMNS`, `DATA`, `COLOR`, `BACKGROUND` and `BORDER_COLOR`. Any other
//! node shape is malformed and is skipped during parsing.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Parse a spec document from YAML text.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
}

/// Look up an attribute by name on an element's attribute mapping.
pub(crate) fn attr<'m>(attrs: &'m Mapping, name: &str) -> Option<&'m Value> {
    attrs
        .iter()
        .find(|(k, _)| k.as_str() == Some(name))
        .map(|(_, v)| v)
}

/// Look up a string attribute.
pub(crate) fn attr_str<'m>(attrs: &'m Mapping, name: &str) -> Option<&'m str> {
    attr(attrs, name).and_then(Value::as_str)
}

/// Render a scalar attribute value as text. Table data cells may be
/// written as strings, numbers or booleans.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
