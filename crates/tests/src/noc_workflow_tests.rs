use callbacks::noc::{
    apply_representative_update, build_change_organisation_request, find_representative,
    representative_to_map, respondent_names, CaseConverter,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, CaseData, Organisation, APPROVAL_PENDING};

use crate::common::{sample_case, sample_case_map};

fn requested_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

fn update(value: Value) -> callbacks::noc::CaseMap {
    value.as_object().cloned().unwrap()
}

#[test]
fn representative_map_uses_wire_keys() {
    let map = representative_to_map(&sample_case(), "test company").unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "resp_RepName": "Test Company",
            "respondentId": "resp-1",
            "name_of_representative": "Sam Brown",
            "representative_email_address": "sam@brown.law",
            "respondentOrganisation": {
                "OrganisationID": "ORG-BROWN",
                "OrganisationName": "Brown LLP"
            },
            "myHmctsYesNo": "Yes"
        })
    );
}

#[test]
fn unrepresented_respondent_has_no_map() {
    let err = representative_to_map(&sample_case(), "Second Respondent Ltd").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn new_representative_is_appended_and_bound_to_respondent() {
    let mut case = sample_case();
    apply_representative_update(
        &mut case,
        "Second Respondent Ltd",
        &update(json!({
            "name_of_representative": "Kim Lee",
            "name_of_organisation": "Lee & Co",
            "resp_RepName": "Somebody Else"
        })),
    )
    .unwrap();

    assert_eq!(case.rep_collection.len(), 2);
    let added = &case.rep_collection[1];
    assert!(added.id.is_some());
    assert_eq!(added.value.resp_rep_name.as_deref(), Some("Second Respondent Ltd"));
    assert_eq!(added.value.respondent_id.as_deref(), Some("resp-2"));
    assert_eq!(
        find_representative(&case, "Second Respondent Ltd")
            .and_then(|rep| rep.value.name_of_representative.as_deref()),
        Some("Kim Lee")
    );
}

#[test]
fn existing_representative_is_replaced_in_place() {
    let mut case = sample_case();
    apply_representative_update(
        &mut case,
        "Test Company",
        &update(json!({"name_of_representative": "Alex Green"})),
    )
    .unwrap();

    assert_eq!(case.rep_collection.len(), 1);
    assert_eq!(case.rep_collection[0].id.as_deref(), Some("rep-1"));
    assert_eq!(
        case.rep_collection[0].value.name_of_representative.as_deref(),
        Some("Alex Green")
    );
    assert!(case.rep_collection[0].value.respondent_organisation.is_none());
}

#[test]
fn malformed_update_leaves_case_untouched() {
    let mut case = sample_case();
    let err = apply_representative_update(
        &mut case,
        "Test Company",
        &update(json!({"respondentOrganisation": "Brown LLP"})),
    )
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("respondentOrganisation"));
    assert_eq!(case, sample_case());
}

#[test]
fn change_request_moves_role_to_new_organisation() {
    let case = sample_case();
    let request = build_change_organisation_request(
        &case,
        "Test Company",
        Organisation::new("ORG-NEW", "New Chambers"),
        requested_at(),
    )
    .unwrap();

    let map = CaseConverter::to_map(Some(&request)).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "OrganisationToAdd": {
                "OrganisationID": "ORG-NEW",
                "OrganisationName": "New Chambers"
            },
            "OrganisationToRemove": {
                "OrganisationID": "ORG-BROWN",
                "OrganisationName": "Brown LLP"
            },
            "CaseRoleId": {
                "value": {
                    "code": "[RESPONDENTSOLICITORONE]",
                    "label": "[RESPONDENTSOLICITORONE]"
                },
                "list_items": [{
                    "code": "[RESPONDENTSOLICITORONE]",
                    "label": "[RESPONDENTSOLICITORONE]"
                }]
            },
            "RequestTimestamp": "2024-05-01T09:30:00",
            "ApprovalStatus": APPROVAL_PENDING
        })
    );
}

#[test]
fn change_request_for_second_respondent_uses_second_role() {
    let request = build_change_organisation_request(
        &sample_case(),
        "Second Respondent Ltd",
        Organisation::new("ORG-NEW", "New Chambers"),
        requested_at(),
    )
    .unwrap();
    assert_eq!(
        request.case_role_id.as_ref().and_then(|r| r.selected_code()),
        Some("[RESPONDENTSOLICITORTWO]")
    );
    assert!(request.organisation_to_remove.is_none());
}

#[test]
fn change_request_stored_on_case_survives_a_round_trip() {
    let mut case = sample_case();
    case.change_organisation_request = Some(
        build_change_organisation_request(
            &case,
            "Test Company",
            Organisation::new("ORG-NEW", "New Chambers"),
            requested_at(),
        )
        .unwrap(),
    );

    let map = CaseConverter::to_map(Some(&case)).unwrap();
    assert!(map.contains_key("changeOrganisationRequestField"));
    let rebuilt: CaseData = CaseConverter::from_map(Some(&map)).unwrap();
    assert_eq!(rebuilt, case);
}

#[test]
fn respondent_names_follow_payload_order() {
    let case: CaseData = CaseConverter::from_map(Some(&sample_case_map())).unwrap();
    assert_eq!(
        respondent_names(&case),
        vec!["Test Company".to_string(), "Second Respondent Ltd".to_string()]
    );
}
