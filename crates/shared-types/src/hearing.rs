use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ccd::ListTypeItem;
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// Hearing statuses that take a listed date out of the diary.
pub const INACTIVE_HEARING_STATUSES: &[&str] = &["Vacated", "Cancelled", "Postponed"];

/// One day a hearing is listed for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateListedType {
    pub listed_date: Option<NaiveDateTime>,
    #[serde(rename = "Hearing_status")]
    pub hearing_status: Option<String>,
}

impl DateListedType {
    /// True unless the listing has been vacated, cancelled or postponed.
    pub fn is_active(&self) -> bool {
        self.hearing_status
            .as_deref()
            .map_or(true, |status| !INACTIVE_HEARING_STATUSES.contains(&status.trim()))
    }
}

impl CaseRecord for DateListedType {
    const TYPE_NAME: &'static str = "DateListedType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("listedDate", FieldKind::DateTime),
        FieldDescriptor::aliased("hearingStatus", "Hearing_status", FieldKind::Text),
    ];
}

/// A hearing on the case and the days it is listed for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HearingType {
    pub hearing_number: Option<String>,
    #[serde(rename = "Hearing_type")]
    pub hearing_type: Option<String>,
    #[serde(rename = "Hearing_venue")]
    pub hearing_venue: Option<String>,
    pub hearing_date_collection: Vec<ListTypeItem<DateListedType>>,
}

impl CaseRecord for HearingType {
    const TYPE_NAME: &'static str = "HearingType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("hearingNumber", FieldKind::Text),
        FieldDescriptor::aliased("hearingType", "Hearing_type", FieldKind::Text),
        FieldDescriptor::aliased("hearingVenue", "Hearing_venue", FieldKind::Text),
        FieldDescriptor::new("hearingDateCollection", FieldKind::Collection),
    ];
}
