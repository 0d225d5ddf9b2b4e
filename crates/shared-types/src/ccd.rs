use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// One entry of a CCD collection field: `{"id": "...", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListTypeItem<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub value: T,
}

impl<T> ListTypeItem<T> {
    /// Wrap `value` in a collection entry with a fresh id.
    pub fn new(value: T) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            value,
        }
    }

    pub fn with_id(id: impl Into<String>, value: T) -> Self {
        Self {
            id: Some(id.into()),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Dynamic lists (dropdowns)
// ---------------------------------------------------------------------------

/// A single dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicValueType {
    pub code: String,
    pub label: String,
}

impl DynamicValueType {
    pub fn create(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl CaseRecord for DynamicValueType {
    const TYPE_NAME: &'static str = "DynamicValueType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("code", FieldKind::Text),
        FieldDescriptor::new("label", FieldKind::Text),
    ];
}

/// A dropdown with its options and the currently selected option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicFixedListType {
    pub value: Option<DynamicValueType>,
    pub list_items: Vec<DynamicValueType>,
}

impl DynamicFixedListType {
    /// Code of the selected option, if any.
    pub fn selected_code(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.code.as_str())
    }

    /// Label of the selected option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.label.as_str())
    }

    /// Select the option with `code`. Returns false if it is not listed.
    pub fn select(&mut self, code: &str) -> bool {
        match self.list_items.iter().find(|item| item.code == code) {
            Some(item) => {
                self.value = Some(item.clone());
                true
            }
            None => false,
        }
    }
}

impl CaseRecord for DynamicFixedListType {
    const TYPE_NAME: &'static str = "DynamicFixedListType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("value", FieldKind::Record),
        FieldDescriptor::new("list_items", FieldKind::Collection),
    ];
}
