use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::Address;
use crate::record::{CaseRecord, FieldDescriptor, FieldKind};

/// A respondent (employer) named on the claim, with its ET3 response state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RespondentSumType {
    #[serde(rename = "respondent_name")]
    pub respondent_name: Option<String>,
    #[serde(rename = "respondent_email")]
    pub respondent_email: Option<String>,
    #[serde(rename = "respondent_phone1")]
    pub respondent_phone1: Option<String>,
    #[serde(rename = "respondent_address")]
    pub respondent_address: Option<Address>,
    pub respondent_contact_preference: Option<String>,
    pub response_reference: Option<String>,
    /// `"Yes"` once an ET3 response has been accepted.
    pub response_received: Option<String>,
    pub response_received_date: Option<NaiveDate>,
    /// `"Yes"` when the respondent intends to resist the claim.
    pub response_continue: Option<String>,
}

impl RespondentSumType {
    /// Respondent name trimmed, or `""` when absent.
    pub fn name(&self) -> &str {
        self.respondent_name.as_deref().map(str::trim).unwrap_or("")
    }
}

impl CaseRecord for RespondentSumType {
    const TYPE_NAME: &'static str = "RespondentSumType";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::aliased("respondentName", "respondent_name", FieldKind::Text),
        FieldDescriptor::aliased("respondentEmail", "respondent_email", FieldKind::Text),
        FieldDescriptor::aliased("respondentPhone1", "respondent_phone1", FieldKind::Text),
        FieldDescriptor::aliased("respondentAddress", "respondent_address", FieldKind::Record),
        FieldDescriptor::new("respondentContactPreference", FieldKind::Text),
        FieldDescriptor::new("responseReference", FieldKind::Text),
        FieldDescriptor::new("responseReceived", FieldKind::Text),
        FieldDescriptor::new("responseReceivedDate", FieldKind::Date),
        FieldDescriptor::new("responseContinue", FieldKind::Text),
    ];
}
