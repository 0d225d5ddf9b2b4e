//! Date parsing, validation and display for tribunal forms.
//!
//! Case dates travel as ISO strings: `yyyy-mm-dd` for dates and
//! `yyyy-mm-ddThh:mm:ss[.fff]` for listings and timestamps.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::app_config;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse an ISO date, or the date part of an ISO timestamp.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, ISO_DATE)
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
}

/// Validate an optional start/end pair entered on a form.
///
/// The start date is required; the end date is optional but must not
/// precede the start. Returns one message per problem, empty when valid.
pub fn validate_date_range(
    start: Option<&str>,
    end: Option<&str>,
    start_field: &str,
    end_field: &str,
) -> Vec<String> {
    let mut errors = Vec::new();

    let start = match start.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            errors.push(format!("{start_field} is required"));
            None
        }
        Some(raw) => {
            let parsed = parse_iso_date(raw);
            if parsed.is_none() {
                errors.push(format!("{start_field} must be a valid date"));
            }
            parsed
        }
    };

    let end = match end.map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => {
            let parsed = parse_iso_date(raw);
            if parsed.is_none() {
                errors.push(format!("{end_field} must be a valid date"));
            }
            parsed
        }
    };

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.push(format!("{end_field} must not be before {start_field}"));
        }
    }

    errors
}

/// Error message when `date` is later than `today`. Absent or unparseable
/// dates are left to [`validate_date_range`].
pub fn validate_not_in_future(date: Option<&str>, today: NaiveDate, field: &str) -> Option<String> {
    let date = parse_iso_date(date?)?;
    (date > today).then(|| format!("{field} must not be in the future"))
}

/// Render an ISO date or timestamp with `format`. Unparseable input is
/// returned unchanged.
pub fn format_display_date_with(value: &str, format: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => render(date, format).unwrap_or_else(|| value.to_string()),
        None => {
            tracing::warn!(value, "unparseable date left unformatted");
            value.to_string()
        }
    }
}

/// `None` when chrono cannot render `format`.
fn render(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => Some(out),
        Err(_) => {
            tracing::warn!(format, "invalid date format");
            None
        }
    }
}

/// Render an ISO date or timestamp with the configured display format.
pub fn format_display_date(value: &str) -> String {
    format_display_date_with(value, &app_config().forms.display_date_format)
}

/// Render a date with the configured display format.
pub fn display_date(date: NaiveDate) -> String {
    render(date, &app_config().forms.display_date_format)
        .unwrap_or_else(|| date.format(ISO_DATE).to_string())
}
