use serde::{Deserialize, Serialize};

use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// Wire value for an affirmative Yes/No field.
pub const YES: &str = "Yes";
/// Wire value for a negative Yes/No field.
pub const NO: &str = "No";

/// True when a Yes/No wire field holds `"Yes"` (case-insensitive).
pub fn is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(YES))
}

/// UK postal address as stored on the case (CCD `AddressUK`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Address {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub post_town: Option<String>,
    pub county: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Non-empty address parts joined with `", "`.
    pub fn single_line(&self) -> String {
        [
            &self.address_line1,
            &self.address_line2,
            &self.address_line3,
            &self.post_town,
            &self.county,
            &self.post_code,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl CaseRecord for Address {
    const TYPE_NAME: &'static str = "Address";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("AddressLine1", FieldKind::Text),
        FieldDescriptor::new("AddressLine2", FieldKind::Text),
        FieldDescriptor::new("AddressLine3", FieldKind::Text),
        FieldDescriptor::new("PostTown", FieldKind::Text),
        FieldDescriptor::new("County", FieldKind::Text),
        FieldDescriptor::new("PostCode", FieldKind::Text),
        FieldDescriptor::new("Country", FieldKind::Text),
    ];
}

/// Reference to a registered legal organisation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organisation {
    #[serde(rename = "OrganisationID")]
    pub organisation_id: Option<String>,
    #[serde(rename = "OrganisationName")]
    pub organisation_name: Option<String>,
}

impl Organisation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organisation_id: Some(id.into()),
            organisation_name: Some(name.into()),
        }
    }
}

impl CaseRecord for Organisation {
    const TYPE_NAME: &'static str = "Organisation";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("OrganisationID", FieldKind::Text),
        FieldDescriptor::new("OrganisationName", FieldKind::Text),
    ];
}
