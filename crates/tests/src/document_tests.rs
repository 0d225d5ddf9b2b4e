use callbacks::docgen::{
    build_document_request, referral_document_params, REFERRAL_SUMMARY_TEMPLATE,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::DocumentConfig;

use crate::common::{sample_case, today};

fn config() -> DocumentConfig {
    DocumentConfig {
        access_key: "key-123".into(),
        ..Default::default()
    }
}

#[test]
fn referral_summary_request_carries_case_and_referral_fields() {
    let mut case = sample_case();
    case.referral_collection[0].value.referral_details =
        Some("Respondent says \"late\"\nsee attached".into());
    let params = referral_document_params(&case, &case.referral_collection[0].value, today());
    assert_eq!(params.template_id, REFERRAL_SUMMARY_TEMPLATE);

    let body: Value = serde_json::from_str(&build_document_request(&params, &config())).unwrap();
    assert_eq!(
        body,
        json!({
            "accessKey": "key-123",
            "templateName": "EM-TRB-EGW-ENG-00067.docx",
            "outputName": "document.pdf",
            "data": {
                "caseNumber": "6000123/2024",
                "claimant": "Jane Smith",
                "respondent": "Test Company",
                "respondents": "Test Company, Second Respondent Ltd",
                "todayDate": "1 May 2024",
                "referralNumber": "1",
                "referralSubject": "ET3",
                "referralDetails": "Respondent says \"late\"\nsee attached",
                "referralDate": "2 Mar 2024"
            }
        })
    );
}

#[test]
fn request_fields_keep_insertion_order() {
    let case = sample_case();
    let params = referral_document_params(&case, &case.referral_collection[0].value, today());
    let body = build_document_request(&params, &config());
    let case_number = body.find("\"caseNumber\"").unwrap();
    let referral_date = body.find("\"referralDate\"").unwrap();
    assert!(case_number < referral_date);
}
