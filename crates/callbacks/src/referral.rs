//! HTML fragments shown on the referral create, reply and close pages.

use chrono::{NaiveDate, NaiveDateTime};
use shared_types::{
    is_yes, CaseData, DynamicFixedListType, DynamicValueType, HearingType, ReferralType,
};

use crate::dates::display_date;
use crate::dynamic_list;

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn row(label: &str, value: &str) -> String {
    let value = value.trim();
    let value = if value.is_empty() { "-" } else { value };
    format!("<tr><th>{label}</th><td>{}</td></tr>", escape_html(value))
}

fn table(heading: &str, rows: &[String]) -> String {
    format!(
        "<h3>{}</h3><table>{}</table>",
        escape_html(heading),
        rows.concat()
    )
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Earliest active listing on or after `today`, with its hearing.
fn next_listing(case: &CaseData, today: NaiveDate) -> Option<(&HearingType, NaiveDateTime)> {
    case.hearing_collection
        .iter()
        .flat_map(|hearing| {
            hearing
                .value
                .hearing_date_collection
                .iter()
                .filter(|listing| listing.value.is_active())
                .filter_map(move |listing| listing.value.listed_date.map(|d| (&hearing.value, d)))
        })
        .filter(|(_, listed)| listed.date() >= today)
        .min_by_key(|(_, listed)| *listed)
}

/// Details of the next listed hearing, or `""` when nothing is listed.
pub fn format_hearing_details(case: &CaseData, today: NaiveDate) -> String {
    let Some((hearing, listed)) = next_listing(case, today) else {
        tracing::debug!("no upcoming hearing to show on referral");
        return String::new();
    };
    table(
        "Next hearing",
        &[
            row("Hearing", opt(&hearing.hearing_number)),
            row("Hearing type", opt(&hearing.hearing_type)),
            row("Venue", opt(&hearing.hearing_venue)),
            row("Date", &display_date(listed.date())),
        ],
    )
}

/// One table per legal representative, or `""` when there are none.
pub fn format_legal_rep_details(case: &CaseData) -> String {
    case.rep_collection
        .iter()
        .enumerate()
        .map(|(index, rep)| {
            let rep = &rep.value;
            let organisation = rep
                .name_of_organisation
                .as_deref()
                .or_else(|| {
                    rep.respondent_organisation
                        .as_ref()
                        .and_then(|org| org.organisation_name.as_deref())
                })
                .unwrap_or("");
            table(
                &format!("Legal representative {}", index + 1),
                &[
                    row("Name", opt(&rep.name_of_representative)),
                    row("Organisation", organisation),
                    row("Acting for", opt(&rep.resp_rep_name)),
                ],
            )
        })
        .collect()
}

/// The replies on a referral, numbered in the order they were sent.
pub fn format_referral_replies(referral: &ReferralType) -> String {
    referral
        .referral_reply_collection
        .iter()
        .enumerate()
        .map(|(index, reply)| {
            let reply = &reply.value;
            let date = reply.reply_date.map(display_date).unwrap_or_default();
            let urgent = if is_yes(reply.is_urgent_reply.as_deref()) {
                "Yes"
            } else {
                "No"
            };
            table(
                &format!("Reply {}", index + 1),
                &[
                    row("Reply by", opt(&reply.reply_by)),
                    row("Direction to", opt(&reply.direction_to)),
                    row("Reply date", &date),
                    row("Urgent", urgent),
                    row("Details", opt(&reply.direction_details)),
                    row("General notes", opt(&reply.reply_general_notes)),
                ],
            )
        })
        .collect()
}

/// Dropdown of referrals on the case, labelled `"<number> <subject>"`.
pub fn referral_subject_list(case: &CaseData) -> DynamicFixedListType {
    let values = case
        .referral_collection
        .iter()
        .filter_map(|item| {
            let number = item.value.referral_number.as_deref()?.trim();
            let subject = opt(&item.value.referral_subject).trim();
            Some(DynamicValueType::create(
                number,
                format!("{number} {subject}").trim_end(),
            ))
        })
        .collect();
    dynamic_list::from_values(values, None)
}
