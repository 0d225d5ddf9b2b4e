//! Dropdown population from case collections.
//!
//! Lists are rebuilt on every page load. The previous selection survives a
//! rebuild as long as its code is still offered.

use shared_types::{CaseData, DynamicFixedListType, DynamicValueType};

use crate::dates::display_date;

/// Prefix of respondent dropdown codes.
pub const RESPONDENT_CODE_PREFIX: &str = "R: ";

/// Build a list from `values`, keeping the selection from `existing`.
pub fn from_values(
    values: Vec<DynamicValueType>,
    existing: Option<&DynamicFixedListType>,
) -> DynamicFixedListType {
    let mut list = DynamicFixedListType {
        value: None,
        list_items: values,
    };
    if let Some(code) = existing.and_then(DynamicFixedListType::selected_code) {
        if !list.select(code) {
            tracing::debug!("previous selection no longer offered");
        }
    }
    list
}

/// Respondents by name.
pub fn populate_respondent_list(
    case: &CaseData,
    existing: Option<&DynamicFixedListType>,
) -> DynamicFixedListType {
    let values = case
        .respondent_collection
        .iter()
        .map(|item| item.value.name())
        .filter(|name| !name.is_empty())
        .map(|name| DynamicValueType::create(format!("{RESPONDENT_CODE_PREFIX}{name}"), name))
        .collect();
    from_values(values, existing)
}

/// One entry per listed day of every hearing.
///
/// Codes are `<hearing number>-<day index>`, labels
/// `"<number>: <type> - <venue> - <date>"`.
pub fn populate_hearing_list(
    case: &CaseData,
    existing: Option<&DynamicFixedListType>,
) -> DynamicFixedListType {
    let mut values = Vec::new();
    for hearing in &case.hearing_collection {
        let hearing = &hearing.value;
        let number = hearing.hearing_number.as_deref().unwrap_or("").trim();
        for (index, listing) in hearing.hearing_date_collection.iter().enumerate() {
            let Some(listed) = listing.value.listed_date else {
                continue;
            };
            let date = display_date(listed.date());
            let label = [
                hearing.hearing_type.as_deref().unwrap_or(""),
                hearing.hearing_venue.as_deref().unwrap_or(""),
                date.as_str(),
            ]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" - ");
            values.push(DynamicValueType::create(
                format!("{number}-{}", index + 1),
                format!("{number}: {label}"),
            ));
        }
    }
    from_values(values, existing)
}

/// Jurisdiction codes raised on the claim, without duplicates.
pub fn populate_jurisdiction_list(
    case: &CaseData,
    existing: Option<&DynamicFixedListType>,
) -> DynamicFixedListType {
    let mut values: Vec<DynamicValueType> = Vec::new();
    for item in &case.jurisdiction_codes {
        let Some(code) = item.value.jurisdiction_code.as_deref().map(str::trim) else {
            continue;
        };
        if code.is_empty() || values.iter().any(|v| v.code == code) {
            continue;
        }
        values.push(DynamicValueType::create(code, code));
    }
    from_values(values, existing)
}
