//! Markdown summaries of respondents' ET3 responses.

use shared_types::{is_yes, CaseData, RespondentSumType};

use crate::dates::display_date;

/// Escape a value for a Markdown table cell. Line breaks become `<br>`.
pub fn escape_markdown_cell(value: &str) -> String {
    value
        .trim()
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape_markdown_cell(v),
        None => "-".to_string(),
    }
}

/// Two-column table of a respondent's contact and response details.
pub fn format_response_details(respondent: &RespondentSumType) -> String {
    let address = respondent
        .respondent_address
        .as_ref()
        .map(|a| a.single_line())
        .unwrap_or_default();
    let received = if is_yes(respondent.response_received.as_deref()) {
        "Yes"
    } else {
        "No"
    };
    let received_date = respondent
        .response_received_date
        .map(display_date)
        .unwrap_or_default();

    let rows = [
        ("Respondent name", cell(respondent.respondent_name.as_deref())),
        ("Email address", cell(respondent.respondent_email.as_deref())),
        ("Phone number", cell(respondent.respondent_phone1.as_deref())),
        ("Address", cell(Some(address.as_str()))),
        (
            "Contact preference",
            cell(respondent.respondent_contact_preference.as_deref()),
        ),
        ("Response received", received.to_string()),
        ("Date received", cell(Some(received_date.as_str()))),
        ("Response reference", cell(respondent.response_reference.as_deref())),
    ];

    let mut table = String::from("| Field | Value |\n|:------|:------|\n");
    for (label, value) in rows {
        table.push_str(&format!("| {label} | {value} |\n"));
    }
    table
}

/// A `### Respondent N` section per respondent, or `""` when none.
pub fn format_respondent_summaries(case: &CaseData) -> String {
    let sections = case
        .respondent_collection
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "### Respondent {}\n\n{}",
                index + 1,
                format_response_details(&item.value)
            )
        })
        .collect::<Vec<_>>();
    tracing::debug!(respondents = sections.len(), "formatted respondent summaries");
    sections.join("\n")
}
