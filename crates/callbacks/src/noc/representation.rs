//! Respondent representation changes driven by the notice-of-change
//! workflow.

use chrono::NaiveDateTime;
use shared_types::{
    AppError, CaseData, ChangeOrganisationRequest, DynamicFixedListType, DynamicValueType,
    ListTypeItem, Organisation, RepresentedTypeR, RespondentSumType, APPROVAL_PENDING,
    RESPONDENT_SOLICITOR_ROLES,
};

use super::case_converter::{CaseConverter, CaseMap};
use crate::logging::redact_value;

fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn require_name(respondent_name: &str) -> Result<(), AppError> {
    if respondent_name.trim().is_empty() {
        return Err(AppError::bad_request("Respondent name is required"));
    }
    Ok(())
}

/// Names of the respondents on the case, in collection order.
pub fn respondent_names(case: &CaseData) -> Vec<String> {
    case.respondent_collection
        .iter()
        .map(|item| item.value.name().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Find a respondent by name, returning its position in the collection.
pub fn find_respondent<'a>(
    case: &'a CaseData,
    respondent_name: &str,
) -> Option<(usize, &'a ListTypeItem<RespondentSumType>)> {
    case.respondent_collection
        .iter()
        .enumerate()
        .find(|(_, item)| names_match(item.value.name(), respondent_name))
}

/// A representative bound to a respondent id matches on that id alone; the
/// name is only consulted for representatives without one.
fn representative_index(
    case: &CaseData,
    respondent: &ListTypeItem<RespondentSumType>,
) -> Option<usize> {
    case.rep_collection
        .iter()
        .position(|rep| match rep.value.respondent_id.as_deref() {
            Some(rep_id) => respondent.id.as_deref() == Some(rep_id),
            None => rep
                .value
                .resp_rep_name
                .as_deref()
                .is_some_and(|name| names_match(name, respondent.value.name())),
        })
}

/// The representative acting for the named respondent, if any.
pub fn find_representative<'a>(
    case: &'a CaseData,
    respondent_name: &str,
) -> Option<&'a ListTypeItem<RepresentedTypeR>> {
    let (_, respondent) = find_respondent(case, respondent_name)?;
    representative_index(case, respondent).map(|index| &case.rep_collection[index])
}

/// Map form of the representative acting for the named respondent.
pub fn representative_to_map(case: &CaseData, respondent_name: &str) -> Result<CaseMap, AppError> {
    require_name(respondent_name)?;
    let representative = find_representative(case, respondent_name).ok_or_else(|| {
        AppError::not_found(format!(
            "No representative found for respondent {}",
            redact_value(respondent_name)
        ))
    })?;
    Ok(CaseConverter::to_map(Some(&representative.value))?)
}

/// Apply a representative supplied by the workflow to the named respondent.
///
/// An existing representative for the respondent is replaced in place and
/// keeps its collection id; otherwise a new entry is appended.
pub fn apply_representative_update(
    case: &mut CaseData,
    respondent_name: &str,
    update: &CaseMap,
) -> Result<(), AppError> {
    require_name(respondent_name)?;
    let mut representative: RepresentedTypeR = CaseConverter::from_map(Some(update))?;

    let (respondent, existing) = {
        let (_, respondent) = find_respondent(case, respondent_name).ok_or_else(|| {
            AppError::not_found(format!(
                "Respondent {} is not on the case",
                redact_value(respondent_name)
            ))
        })?;
        (respondent.clone(), representative_index(case, respondent))
    };

    representative.resp_rep_name = Some(respondent.value.name().to_string());
    representative.respondent_id = respondent.id.clone();

    match existing {
        Some(index) => {
            tracing::info!(index, "replacing respondent representative");
            case.rep_collection[index].value = representative;
        }
        None => {
            tracing::info!("adding respondent representative");
            case.rep_collection.push(ListTypeItem::new(representative));
        }
    }
    Ok(())
}

/// Build the request moving the named respondent's solicitor role to
/// `organisation_to_add`.
pub fn build_change_organisation_request(
    case: &CaseData,
    respondent_name: &str,
    organisation_to_add: Organisation,
    requested_at: NaiveDateTime,
) -> Result<ChangeOrganisationRequest, AppError> {
    require_name(respondent_name)?;
    let (index, _) = find_respondent(case, respondent_name).ok_or_else(|| {
        AppError::not_found(format!(
            "Respondent {} is not on the case",
            redact_value(respondent_name)
        ))
    })?;

    let role = RESPONDENT_SOLICITOR_ROLES.get(index).ok_or_else(|| {
        AppError::bad_request(format!(
            "At most {} respondents can be represented through notice of change",
            RESPONDENT_SOLICITOR_ROLES.len()
        ))
    })?;
    let role_value = DynamicValueType::create(*role, *role);

    let organisation_to_remove = find_representative(case, respondent_name)
        .and_then(|rep| rep.value.respondent_organisation.clone());

    tracing::debug!(
        role = *role,
        replacing = organisation_to_remove.is_some(),
        "built change organisation request"
    );

    Ok(ChangeOrganisationRequest {
        organisation_to_add: Some(organisation_to_add),
        organisation_to_remove,
        case_role_id: Some(DynamicFixedListType {
            value: Some(role_value.clone()),
            list_items: vec![role_value],
        }),
        request_timestamp: Some(requested_at),
        approval_status: Some(APPROVAL_PENDING.to_string()),
    })
}
