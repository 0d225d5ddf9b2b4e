//! Static field metadata for case records.
//!
//! Every record that crosses the notice-of-change boundary declares a
//! constant descriptor table. The table mirrors the struct's serde
//! attributes: `name` is the field's canonical wire name and `alias`, when
//! present, is the `#[serde(rename = "...")]` override that wins on output.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Shape a field accepts when it is read back from a generic map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text. Numbers and booleans are accepted and stringified.
    Text,
    /// ISO calendar date (`yyyy-mm-dd`).
    Date,
    /// ISO timestamp without offset, fractional seconds allowed.
    DateTime,
    /// Nested record (JSON object).
    Record,
    /// CCD collection or plain list (JSON array).
    Collection,
}

impl FieldKind {
    /// Human-readable shape name used in conversion errors.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "a yyyy-mm-dd date",
            FieldKind::DateTime => "a timestamp",
            FieldKind::Record => "an object",
            FieldKind::Collection => "a list",
        }
    }

    /// Check `value` against this kind, returning the value to hand to serde.
    ///
    /// Returns `None` when the shape is incompatible.
    pub fn coerce(&self, value: &Value) -> Option<Value> {
        match (self, value) {
            (FieldKind::Text, Value::String(_)) => Some(value.clone()),
            (FieldKind::Text, Value::Number(n)) => Some(Value::String(n.to_string())),
            (FieldKind::Text, Value::Bool(b)) => Some(Value::String(b.to_string())),
            (FieldKind::Date, Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|_| value.clone()),
            (FieldKind::DateTime, Value::String(s)) => {
                s.parse::<NaiveDateTime>().ok().map(|_| value.clone())
            }
            (FieldKind::Record, Value::Object(_)) => Some(value.clone()),
            (FieldKind::Collection, Value::Array(_)) => Some(value.clone()),
            _ => None,
        }
    }
}

/// Name of the JSON type of `value`, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// One entry of a record's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub alias: Option<&'static str>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            alias: None,
            kind,
        }
    }

    pub const fn aliased(name: &'static str, alias: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            alias: Some(alias),
            kind,
        }
    }

    /// Key used when the field is written to a map.
    pub fn wire_key(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }
}

/// A typed record that can be flattened to and rebuilt from a generic map.
///
/// `FIELDS` lists the fields in declaration order and must agree with the
/// serde attributes on the implementing type.
pub trait CaseRecord: Serialize + DeserializeOwned + Default {
    /// Type name used in logs and error messages.
    const TYPE_NAME: &'static str;

    const FIELDS: &'static [FieldDescriptor];

    /// Look up a descriptor by alias or canonical name.
    fn field(key: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS
            .iter()
            .find(|f| f.alias == Some(key))
            .or_else(|| Self::FIELDS.iter().find(|f| f.name == key))
    }
}
