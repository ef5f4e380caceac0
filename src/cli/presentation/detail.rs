//! Visit/review detail and standalone summary presentation.

use super::form::{answers_table, form_table};
use super::patient::patient_fields;
use super::{format_date, section_heading};
use crate::model::{SummaryOrigin, SummaryOutcome, UserType};
use crate::visit::{DetailView, SummaryPanel};

/// Text rendering of a detail view. With `expand`, every form's answered
/// questions follow the forms table.
pub fn format_detail_text(view: &DetailView, expand: bool, color: bool) -> String {
    let role = view.role;
    let mut out = format!("{}\n\n", section_heading(role.title(), color));

    out.push_str(&format!("{}\n", section_heading(&view.patient.name, color)));
    for (label, value) in patient_fields(&view.patient) {
        out.push_str(&format!("  {:<8} {}\n", format!("{}:", label), value));
    }

    match &view.summary {
        SummaryPanel::Omitted => {}
        SummaryPanel::Ready(outcome) => {
            out.push_str(&format!("\n{}\n", section_heading(role.summary_title(), color)));
            if let Some(form) = view.latest_form() {
                out.push_str(&format!(
                    "  {} on {}\n",
                    form.form_type.display_name(),
                    format_date(Some(form.form_date))
                ));
            }
            out.push_str(&format!("  Form ID: {}\n", outcome.summary.form_id));
            out.push_str(&format!(
                "  Written for: {}\n\n",
                UserType::from(outcome.summary.user_type.clone()).display_name()
            ));
            out.push_str(&summary_body(outcome));
        }
        SummaryPanel::Failed { message } => {
            out.push_str(&format!("\n{}\n", section_heading(role.summary_title(), color)));
            out.push_str(&format!("  Summary unavailable: {}\n", message));
        }
    }

    out.push_str(&format!("\n{}\n", section_heading(role.forms_title(), color)));
    if view.forms.is_empty() {
        out.push_str("  No forms found for this patient.\n");
    } else {
        out.push_str(&format!("{}\n", form_table(&view.forms)));
    }

    if expand {
        for form in &view.forms {
            let heading = format!(
                "Form {}: {} on {}",
                form.form_id,
                form.form_type.display_name(),
                format_date(Some(form.form_date))
            );
            out.push_str(&format!("\n{}\n", section_heading(&heading, color)));
            match answers_table(form) {
                Some(table) => out.push_str(&format!("{}\n", table)),
                None => out.push_str("  No answered questions.\n"),
            }
        }
    }
    out
}

pub fn format_summary_text(outcome: &SummaryOutcome, color: bool) -> String {
    let heading = format!("Summary for form {}", outcome.summary.form_id);
    format!("{}\n{}", section_heading(&heading, color), summary_body(outcome))
}

fn summary_body(outcome: &SummaryOutcome) -> String {
    let mut out = String::new();
    for paragraph in outcome.summary.paragraphs() {
        out.push_str(&format!("  {}\n", paragraph.trim_start()));
    }
    let origin = match outcome.origin {
        SummaryOrigin::Cached => "cached",
        SummaryOrigin::Generated => "newly generated",
    };
    out.push_str(&format!("  ({})\n", origin));
    out
}
