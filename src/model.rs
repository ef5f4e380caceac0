//! Data model for patients, visit forms, summaries, and users.
//!
//! Everything here mirrors the JSON payloads of the documentation API. The viewer
//! never mutates these values; they are fetched fresh per command.

mod form;
mod patient;
mod summary;
mod user;

pub use form::{
    most_recent_form, AnsweredQuestion, FieldRecord, Form, FormQuery, FormType, SurveyData,
};
pub use patient::Patient;
pub use summary::{Summary, SummaryOrigin, SummaryOutcome};
pub use user::{Credentials, CurrentUser, HealthStatus, LoginResponse, UserType};

/// Patient identifier as issued by the API.
pub type PatientId = i64;

/// Form identifier as issued by the API.
pub type FormId = i64;

/// Parse an API date or date-time string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, and naive `YYYY-MM-DDTHH:MM:SS[.f]`.
pub fn parse_api_date(raw: &str) -> Option<chrono::NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
