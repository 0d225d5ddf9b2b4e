//! Case converter behaviour at the workflow boundary.

use callbacks::noc::{CaseConverter, CaseMap};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{CaseData, ConvertError, RespondentSumType};

use crate::common::{sample_case, sample_case_json, sample_case_map};

#[test]
fn respondent_example_round_trips_through_wire_keys() {
    let respondent = RespondentSumType {
        respondent_name: Some("Test Company".into()),
        respondent_email: Some("test@acme.org".into()),
        response_reference: Some("1789000".into()),
        ..Default::default()
    };

    let map = CaseConverter::to_map(Some(&respondent)).unwrap();
    assert_eq!(
        Value::Object(map.clone()),
        json!({
            "respondent_name": "Test Company",
            "respondent_email": "test@acme.org",
            "responseReference": "1789000"
        })
    );

    let rebuilt: RespondentSumType = CaseConverter::from_map(Some(&map)).unwrap();
    assert_eq!(rebuilt, respondent);
}

#[test]
fn workflow_payload_is_read_into_typed_case() {
    let case = sample_case();
    assert_eq!(case.ethos_case_reference.as_deref(), Some("6000123/2024"));
    assert_eq!(case.respondent_collection.len(), 2);
    assert_eq!(case.respondent_collection[0].id.as_deref(), Some("resp-1"));
    assert_eq!(
        case.respondent_collection[0].value.response_reference.as_deref(),
        Some("1789000")
    );
    assert_eq!(
        case.rep_collection[0]
            .value
            .respondent_organisation
            .as_ref()
            .and_then(|o| o.organisation_id.as_deref()),
        Some("ORG-BROWN")
    );
    assert_eq!(case.jurisdiction_codes.len(), 2);
}

#[test]
fn typed_case_writes_back_the_known_part_of_the_payload() {
    let map = CaseConverter::to_map(Some(&sample_case())).unwrap();

    let mut expected = sample_case_json();
    let expected = expected.as_object_mut().unwrap();
    expected.remove("caseSource");
    expected.remove("TTL");

    // Listing timestamps are normalised by the typed model.
    let mut written = Value::Object(map);
    for day in written["hearingCollection"][0]["value"]["hearingDateCollection"]
        .as_array_mut()
        .unwrap()
    {
        let listed = day["value"]["listedDate"].as_str().unwrap().to_string();
        day["value"]["listedDate"] = Value::String(format!("{listed}.000"));
    }

    assert_eq!(written, Value::Object(expected.clone()));
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let mut map = sample_case_map();
    map.insert("somethingNew".into(), json!([1, 2, 3]));
    let case: CaseData = CaseConverter::from_map(Some(&map)).unwrap();
    assert_eq!(case, sample_case());
}

#[test]
fn empty_fields_are_absent_from_the_map() {
    let mut case = sample_case();
    case.managing_office = Some(String::new());
    case.referral_collection.clear();
    let map = CaseConverter::to_map(Some(&case)).unwrap();
    assert!(!map.contains_key("managingOffice"));
    assert!(!map.contains_key("referralCollection"));
}

#[test]
fn shape_mismatch_fails_without_partial_result() {
    let mut map = sample_case_map();
    map.insert("respondentCollection".into(), json!({"id": "resp-1"}));
    let result: Result<CaseData, _> = CaseConverter::from_map(Some(&map));
    assert_eq!(
        result.unwrap_err(),
        ConvertError::conversion("respondentCollection", "expected a list, found an object")
    );
}

#[test]
fn missing_inputs_are_invalid_arguments() {
    assert!(matches!(
        CaseConverter::to_map::<CaseData>(None),
        Err(ConvertError::InvalidArgument(_))
    ));
    assert!(matches!(
        CaseConverter::from_map::<CaseData>(None),
        Err(ConvertError::InvalidArgument(_))
    ));
}

#[test]
fn converter_is_shareable_across_threads() {
    let map = sample_case_map();
    let expected = sample_case();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let case: CaseData = CaseConverter::from_map(Some(&map)).unwrap();
                    CaseConverter::to_map(Some(&case)).unwrap()
                })
            })
            .collect();
        let first: Vec<CaseMap> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for written in &first {
            let case: CaseData = CaseConverter::from_map(Some(written)).unwrap();
            assert_eq!(case, expected);
        }
    });
}
