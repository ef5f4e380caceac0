use super::{parse_api_date, PatientId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient demographics. Read-only from the viewer's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: PatientId,
    pub name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub mrn: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Raw structured record; only sent to quality administrators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml_data: Option<String>,
}

impl Patient {
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.dob.as_deref().and_then(parse_api_date)
    }
}
