//! Form presentation: list and question/answer detail.

use super::{format_date, section_heading};
use crate::model::Form;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

pub fn format_form_list_text(forms: &[Form], color: bool) -> String {
    if forms.is_empty() {
        return "No forms found.".to_string();
    }
    format!(
        "{}\n\n{}\n\nTotal: {} form(s)",
        section_heading("Forms", color),
        form_table(forms),
        forms.len()
    )
}

/// Forms table shared with the detail view.
pub(crate) fn form_table(forms: &[Form]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Form ID", "Type", "Date", "Patient", "Answered"]);
    for f in forms {
        table.add_row(vec![
            f.form_id.to_string(),
            format!("{} ({})", f.form_type.display_name(), f.form_type.code()),
            format_date(Some(f.form_date)),
            f.patient_id.to_string(),
            f.survey_data.answered_count().to_string(),
        ]);
    }
    table
}

pub fn format_form_text(form: &Form, color: bool) -> String {
    let heading = format!(
        "Form {}: {} ({})",
        form.form_id,
        form.form_type.display_name(),
        form.form_type.code()
    );
    let mut out = format!("{}\n", section_heading(&heading, color));
    out.push_str(&format!("  Patient: {}\n", form.patient_id));
    out.push_str(&format!("  Date:    {}\n", format_date(Some(form.form_date))));

    out.push_str(&format!(
        "  Answered questions: {}\n",
        form.survey_data.answered_count()
    ));
    if let Some(table) = answers_table(form) {
        out.push_str(&format!("\n{}\n", table));
    }
    out
}

/// Question/answer table, or `None` when nothing was answered.
pub(crate) fn answers_table(form: &Form) -> Option<Table> {
    let answered = form.survey_data.answered_questions();
    if answered.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Question", "Answer"]);
    for qa in answered {
        table.add_row(vec![qa.question, qa.answer]);
    }
    Some(table)
}
