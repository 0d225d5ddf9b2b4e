//! Conversion between typed case records and generic string-keyed maps.
//!
//! The change-of-representation workflow exchanges loosely typed JSON
//! objects. `to_map` flattens a record into such an object, writing each
//! populated field under its wire key and leaving out empty values.
//! `from_map` rebuilds the record, accepting either a field's alias or its
//! canonical name and ignoring keys the record does not declare.

use serde_json::{Map, Value};
use shared_types::{json_type_name, CaseRecord, ConvertError};

/// Generic JSON object used at the workflow boundary.
pub type CaseMap = Map<String, Value>;

/// Stateless converter between [`CaseRecord`] types and [`CaseMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseConverter;

impl CaseConverter {
    /// Flatten `record` into a sparse map keyed by wire names.
    ///
    /// Empty strings, empty lists, nulls and nested records with no
    /// populated fields are left out.
    pub fn to_map<T: CaseRecord>(record: Option<&T>) -> Result<CaseMap, ConvertError> {
        let record = record.ok_or_else(|| {
            ConvertError::invalid_argument(format!("no {} supplied to convert", T::TYPE_NAME))
        })?;

        let mut fields = match serde_json::to_value(record) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                return Err(ConvertError::conversion(
                    T::TYPE_NAME,
                    format!("serialised to {} instead of an object", json_type_name(&other)),
                ))
            }
            Err(e) => return Err(ConvertError::conversion(T::TYPE_NAME, e.to_string())),
        };

        let mut map = CaseMap::new();
        for descriptor in T::FIELDS {
            let key = descriptor.wire_key();
            if let Some(value) = fields.remove(key).and_then(prune) {
                map.insert(key.to_string(), value);
            }
        }

        tracing::debug!(
            record = T::TYPE_NAME,
            declared = T::FIELDS.len(),
            populated = map.len(),
            "converted record to map"
        );
        Ok(map)
    }

    /// Rebuild a `T` from `map`.
    ///
    /// Each field reads the entry under its alias, falling back to its
    /// canonical name. Absent or null entries leave the field at its
    /// default.
    pub fn from_map<T: CaseRecord>(map: Option<&CaseMap>) -> Result<T, ConvertError> {
        let map = map.ok_or_else(|| {
            ConvertError::invalid_argument(format!("no map supplied to build {}", T::TYPE_NAME))
        })?;

        let mut fields = CaseMap::new();
        for descriptor in T::FIELDS {
            let entry = descriptor
                .alias
                .and_then(|alias| map.get(alias))
                .or_else(|| map.get(descriptor.name));
            let Some(value) = entry.filter(|v| !v.is_null()) else {
                continue;
            };
            let value = descriptor.kind.coerce(value).ok_or_else(|| {
                ConvertError::conversion(
                    descriptor.wire_key(),
                    format!(
                        "expected {}, found {}",
                        descriptor.kind.describe(),
                        json_type_name(value)
                    ),
                )
            })?;
            fields.insert(descriptor.wire_key().to_string(), value);
        }

        let matched = fields.len();
        let record = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ConvertError::conversion(T::TYPE_NAME, e.to_string()))?;

        tracing::debug!(
            record = T::TYPE_NAME,
            matched,
            ignored = map.len().saturating_sub(matched),
            "converted map to record"
        );
        Ok(record)
    }

    /// Convert one record type into another through the map form.
    pub fn convert<S: CaseRecord, T: CaseRecord>(source: &S) -> Result<T, ConvertError> {
        let map = Self::to_map(Some(source))?;
        Self::from_map(Some(&map))
    }
}

/// Drop empty values, recursing into nested objects and list elements.
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(Value::Array(
            items.into_iter().map(prune_element).collect(),
        )),
        Value::Object(fields) => {
            let fields = prune_object(fields);
            (!fields.is_empty()).then_some(Value::Object(fields))
        }
        other => Some(other),
    }
}

/// List elements are never removed, only their contents pruned.
fn prune_element(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(prune_object(fields)),
        other => other,
    }
}

fn prune_object(fields: CaseMap) -> CaseMap {
    fields
        .into_iter()
        .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
        .collect()
}
