//! Visit forms and their nested survey data.

use super::{parse_api_date, FormId, PatientId};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Form type code. Unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormType {
    PhysicalTherapyVisit,
    PhysicalTherapyEvaluation,
    StartOfCare,
    RegisteredNurse,
    Discharge,
    Other(String),
}

impl FormType {
    /// Wire code (`PTVIS`, `SOC`, ...).
    pub fn code(&self) -> &str {
        match self {
            FormType::PhysicalTherapyVisit => "PTVIS",
            FormType::PhysicalTherapyEvaluation => "PTEVAL",
            FormType::StartOfCare => "SOC",
            FormType::RegisteredNurse => "RN",
            FormType::Discharge => "DC",
            FormType::Other(code) => code,
        }
    }

    /// Human-readable label; unknown codes display as the raw code.
    pub fn display_name(&self) -> &str {
        match self {
            FormType::PhysicalTherapyVisit => "Physical Therapy Visit",
            FormType::PhysicalTherapyEvaluation => "Physical Therapy Evaluation",
            FormType::StartOfCare => "Start of Care",
            FormType::RegisteredNurse => "Registered Nurse",
            FormType::Discharge => "Discharge",
            FormType::Other(code) => code,
        }
    }
}

impl From<String> for FormType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PTVIS" => FormType::PhysicalTherapyVisit,
            "PTEVAL" => FormType::PhysicalTherapyEvaluation,
            "SOC" => FormType::StartOfCare,
            "RN" => FormType::RegisteredNurse,
            "DC" => FormType::Discharge,
            _ => FormType::Other(code),
        }
    }
}

impl From<FormType> for String {
    fn from(form_type: FormType) -> Self {
        form_type.code().to_string()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One question/answer field inside a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_description: Option<String>,
}

impl FieldRecord {
    /// A field counts as answered unless its value is null or the empty string.
    pub fn is_answered(&self) -> bool {
        match &self.value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Answer as display text: strings unquoted, everything else as compact JSON.
    pub fn answer_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A question paired with its answer, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

/// `form type -> category -> field name -> field record`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyData(pub BTreeMap<String, BTreeMap<String, BTreeMap<String, FieldRecord>>>);

impl SurveyData {
    fn fields(&self) -> impl Iterator<Item = (&String, &FieldRecord)> {
        self.0
            .values()
            .flat_map(|categories| categories.values())
            .flat_map(|fields| fields.iter())
    }

    pub fn answered_questions(&self) -> Vec<AnsweredQuestion> {
        self.fields()
            .filter(|(_, record)| record.is_answered())
            .map(|(name, record)| AnsweredQuestion {
                question: record
                    .question_description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(name)
                    .to_string(),
                answer: record.answer_text(),
            })
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.fields().filter(|(_, record)| record.is_answered()).count()
    }

    /// Drop unanswered fields, keeping the form-type and category skeleton.
    pub fn without_unanswered(&self) -> SurveyData {
        let filtered = self
            .0
            .iter()
            .map(|(form_type, categories)| {
                let categories = categories
                    .iter()
                    .map(|(category, fields)| {
                        let fields = fields
                            .iter()
                            .filter(|(_, record)| record.is_answered())
                            .map(|(name, record)| (name.clone(), record.clone()))
                            .collect();
                        (category.clone(), fields)
                    })
                    .collect();
                (form_type.clone(), categories)
            })
            .collect();
        SurveyData(filtered)
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}

/// A structured clinical visit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub form_id: FormId,
    pub patient_id: PatientId,
    pub form_type: FormType,
    #[serde(deserialize_with = "deserialize_form_date")]
    pub form_date: NaiveDate,
    #[serde(default)]
    pub survey_data: SurveyData,
}

fn deserialize_form_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid form_date: {}", raw)))
}

/// The form the viewer treats as the latest visit.
///
/// This is the first element in API order. The list is not re-sorted here.
pub fn most_recent_form(forms: &[Form]) -> Option<&Form> {
    forms.first()
}

/// Filters for `GET /forms/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormQuery {
    pub patient_id: Option<PatientId>,
    pub form_type: Option<FormType>,
    pub exclude_null: bool,
}

impl FormQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(patient_id) = self.patient_id {
            params.push(("patient_id", patient_id.to_string()));
        }
        if let Some(form_type) = &self.form_type {
            params.push(("form_type", form_type.code().to_string()));
        }
        params.push(("exclude_null", self.exclude_null.to_string()));
        params
    }
}
