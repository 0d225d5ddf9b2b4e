use chrono::NaiveDate;
use serde_json::Value;
use shared_types::{CaseData, DocumentConfig, ReferralType};

use crate::dates::display_date;

/// Template id of the referral summary document.
pub const REFERRAL_SUMMARY_TEMPLATE: &str = "00067";

/// Parameters for one document generation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentParams {
    /// Template id without prefix or extension, e.g. `"00067"`.
    pub template_id: String,
    /// Template fields in the order they are written.
    pub data: Vec<(String, String)>,
}

impl DocumentParams {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            data: Vec::new(),
        }
    }

    /// Append a template field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// Escape `s` for insertion between the quotes of a JSON string literal.
pub fn escape_json(s: &str) -> String {
    let quoted = Value::String(s.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Build the JSON body sent to the document service by interpolating
/// escaped values into a fixed request template.
pub fn build_document_request(params: &DocumentParams, config: &DocumentConfig) -> String {
    let data = params
        .data
        .iter()
        .map(|(key, value)| format!("\"{}\":\"{}\"", escape_json(key), escape_json(value)))
        .collect::<Vec<_>>()
        .join(",\n");

    tracing::debug!(
        template = %params.template_id,
        fields = params.data.len(),
        "built document request"
    );

    format!(
        r#"{{"accessKey":"{access_key}",
"templateName":"{template_name}",
"outputName":"{output_name}",
"data":{{
{data}
}}
}}"#,
        access_key = escape_json(&config.access_key),
        template_name = escape_json(&format!(
            "{}{}.docx",
            config.template_prefix, params.template_id
        )),
        output_name = escape_json(&format!(
            "{}.{}",
            config.output_file_prefix, config.output_format
        )),
    )
}

/// Fields common to every case document.
pub fn document_data_from_case(case: &CaseData, today: NaiveDate) -> Vec<(String, String)> {
    let respondents = case
        .respondent_collection
        .iter()
        .map(|item| item.value.name())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>();

    vec![
        (
            "caseNumber".to_string(),
            case.ethos_case_reference.clone().unwrap_or_default(),
        ),
        ("claimant".to_string(), case.claimant_name()),
        (
            "respondent".to_string(),
            respondents.first().map(|name| name.to_string()).unwrap_or_default(),
        ),
        ("respondents".to_string(), respondents.join(", ")),
        ("todayDate".to_string(), display_date(today)),
    ]
}

/// Parameters for the referral summary document.
pub fn referral_document_params(
    case: &CaseData,
    referral: &ReferralType,
    today: NaiveDate,
) -> DocumentParams {
    let mut params = DocumentParams::new(REFERRAL_SUMMARY_TEMPLATE);
    params.data = document_data_from_case(case, today);
    params
        .field(
            "referralNumber",
            referral.referral_number.clone().unwrap_or_default(),
        )
        .field(
            "referralSubject",
            referral.referral_subject.clone().unwrap_or_default(),
        )
        .field(
            "referralDetails",
            referral.referral_details.clone().unwrap_or_default(),
        )
        .field(
            "referralDate",
            referral.referral_date.map(display_date).unwrap_or_default(),
        )
}
