//! CLI presentation: text and json formatters per command family.

mod account;
mod detail;
mod form;
mod patient;

use crate::error::ApiError;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

pub use account::{format_health_text, format_login_text, format_user_text};
pub use detail::{format_detail_text, format_summary_text};
pub use form::{format_form_list_text, format_form_text};
pub use patient::{format_patient_list_text, format_patient_text};

/// Pretty JSON for any view struct.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::InvalidInput(format!("Failed to serialize output: {}", e)))
}

/// Section heading, bold and underlined unless color is off.
pub(crate) fn section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub(crate) fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("N/A")
}
