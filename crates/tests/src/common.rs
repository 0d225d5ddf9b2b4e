use callbacks::noc::{CaseConverter, CaseMap};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shared_types::CaseData;

/// A case payload as the workflow delivers it: wire keys, sparse fields,
/// and a few keys the helpers do not model.
pub fn sample_case_json() -> Value {
    json!({
        "ethosCaseReference": "6000123/2024",
        "managingOffice": "Leeds",
        "claimant": "Jane Smith",
        "claimantIndType": {
            "claimant_first_names": "Jane",
            "claimant_last_name": "Smith"
        },
        "respondentCollection": [
            {
                "id": "resp-1",
                "value": {
                    "respondent_name": "Test Company",
                    "respondent_email": "test@acme.org",
                    "responseReference": "1789000",
                    "responseReceived": "Yes",
                    "responseReceivedDate": "2024-03-01",
                    "respondent_address": {
                        "AddressLine1": "1 Industrial Way",
                        "PostTown": "Leeds",
                        "PostCode": "LS2 2BB"
                    }
                }
            },
            {
                "id": "resp-2",
                "value": {
                    "respondent_name": "Second Respondent Ltd"
                }
            }
        ],
        "repCollection": [
            {
                "id": "rep-1",
                "value": {
                    "resp_RepName": "Test Company",
                    "respondentId": "resp-1",
                    "name_of_representative": "Sam Brown",
                    "representative_email_address": "sam@brown.law",
                    "respondentOrganisation": {
                        "OrganisationID": "ORG-BROWN",
                        "OrganisationName": "Brown LLP"
                    },
                    "myHmctsYesNo": "Yes"
                }
            }
        ],
        "hearingCollection": [
            {
                "id": "hearing-1",
                "value": {
                    "hearingNumber": "1",
                    "Hearing_type": "Preliminary Hearing",
                    "Hearing_venue": "Leeds",
                    "hearingDateCollection": [
                        {
                            "id": "day-1",
                            "value": {
                                "listedDate": "2024-04-10T10:00:00.000",
                                "Hearing_status": "Listed"
                            }
                        },
                        {
                            "id": "day-2",
                            "value": {
                                "listedDate": "2024-06-12T10:00:00.000",
                                "Hearing_status": "Listed"
                            }
                        }
                    ]
                }
            }
        ],
        "referralCollection": [
            {
                "id": "referral-1",
                "value": {
                    "referralNumber": "1",
                    "referralSubject": "ET3",
                    "referralDetails": "Response received late",
                    "referralDate": "2024-03-02",
                    "referralReplyCollection": [
                        {
                            "id": "reply-1",
                            "value": {
                                "replyBy": "Judge Jones",
                                "directionTo": "Respondent",
                                "isUrgentReply": "No",
                                "directionDetails": "Explain the delay",
                                "replyDate": "2024-03-05"
                            }
                        }
                    ]
                }
            }
        ],
        "jurCodesCollection": [
            {"id": "jur-1", "value": {"juridictionCodesList": "UDL"}},
            {"id": "jur-2", "value": {"juridictionCodesList": "DDA"}}
        ],
        "caseSource": "ET1 Online",
        "TTL": {"SystemTTL": "2030-01-01"}
    })
}

pub fn sample_case_map() -> CaseMap {
    match sample_case_json() {
        Value::Object(map) => map,
        _ => unreachable!("sample case is an object"),
    }
}

pub fn sample_case() -> CaseData {
    CaseConverter::from_map(Some(&sample_case_map())).expect("sample case converts")
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}
