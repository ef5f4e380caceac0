//! Patient presentation: list and detail text.

use super::{format_date, or_na, section_heading};
use crate::model::Patient;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_patient_list_text(patients: &[Patient], show_xml: bool, color: bool) -> String {
    if patients.is_empty() {
        return "No patients found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "DOB", "Gender", "MRN", "Phone"]);
    for p in patients {
        table.add_row(vec![
            p.patient_id.to_string(),
            p.name.clone(),
            format_date(p.birth_date()),
            or_na(p.gender.as_deref()).to_string(),
            or_na(p.mrn.as_deref()).to_string(),
            or_na(p.phone.as_deref()).to_string(),
        ]);
    }
    let mut out = format!("{}\n\n{}\n", section_heading("Patients", color), table);
    if show_xml {
        for p in patients.iter().filter(|p| p.xml_data.is_some()) {
            out.push_str(&format!(
                "\n{}\n{}\n",
                section_heading(&format!("XML Data: {} ({})", p.name, p.patient_id), color),
                p.xml_data.as_deref().unwrap_or_default().trim_end()
            ));
        }
    }
    out.push_str(&format!("\nTotal: {} patient(s)", patients.len()));
    out
}

pub fn format_patient_text(patient: &Patient, color: bool) -> String {
    let mut out = format!("{}\n", section_heading(&patient.name, color));
    for (label, value) in patient_fields(patient) {
        out.push_str(&format!("  {:<8} {}\n", format!("{}:", label), value));
    }
    out
}

pub(crate) fn patient_fields(patient: &Patient) -> Vec<(&'static str, String)> {
    vec![
        ("ID", patient.patient_id.to_string()),
        ("DOB", format_date(patient.birth_date())),
        ("Gender", or_na(patient.gender.as_deref()).to_string()),
        ("MRN", or_na(patient.mrn.as_deref()).to_string()),
        ("Address", or_na(patient.address.as_deref()).to_string()),
        ("Phone", or_na(patient.phone.as_deref()).to_string()),
        ("Email", or_na(patient.email.as_deref()).to_string()),
    ]
}
