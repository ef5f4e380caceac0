//! Patient detail view shared by the Visit and Review commands.
//!
//! One loader, parameterized by [`DetailRole`]. The role only changes titles; both
//! roles fetch the same data and use the same summary policy.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::{most_recent_form, Form, Patient, PatientId, SummaryOutcome};
use crate::summary::{obtain_summary, refresh_summary, SummarySource};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Which page the detail view stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailRole {
    Visit,
    Review,
}

impl DetailRole {
    pub fn title(&self) -> &'static str {
        match self {
            DetailRole::Visit => "Visit Details",
            DetailRole::Review => "Documentation Review",
        }
    }

    pub fn summary_title(&self) -> &'static str {
        match self {
            DetailRole::Visit => "Visit Summary",
            DetailRole::Review => "Documentation Review Summary",
        }
    }

    pub fn forms_title(&self) -> &'static str {
        match self {
            DetailRole::Visit => "Forms",
            DetailRole::Review => "Previous Visits",
        }
    }
}

/// Whether to read through the summary cache or force regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    #[default]
    Obtain,
    Refresh,
}

/// State of the summary section of a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SummaryPanel {
    /// The patient has no forms; nothing was requested.
    Omitted,
    Ready(SummaryOutcome),
    /// Inline error; the rest of the view still renders.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub role: DetailRole,
    pub patient: Patient,
    pub forms: Vec<Form>,
    pub summary: SummaryPanel,
}

impl DetailView {
    /// Form the summary panel describes.
    pub fn latest_form(&self) -> Option<&Form> {
        most_recent_form(&self.forms)
    }
}

/// Data needed by the detail view.
#[async_trait]
pub trait DetailSource: SummarySource {
    async fn patient(&self, patient_id: PatientId) -> Result<Patient, ApiError>;
    async fn patient_forms(&self, patient_id: PatientId) -> Result<Vec<Form>, ApiError>;
}

#[async_trait]
impl DetailSource for ApiClient {
    async fn patient(&self, patient_id: PatientId) -> Result<Patient, ApiError> {
        self.get_patient(patient_id).await
    }

    async fn patient_forms(&self, patient_id: PatientId) -> Result<Vec<Form>, ApiError> {
        self.forms_for_patient(patient_id, true).await
    }
}

/// Load the patient, their forms, and the summary of the most recent form.
pub async fn load_detail(
    source: &dyn DetailSource,
    patient_id: PatientId,
    role: DetailRole,
    mode: SummaryMode,
) -> Result<DetailView, ApiError> {
    debug!(patient_id, role = ?role, "Loading detail view");
    let (patient, forms) = futures::try_join!(
        source.patient(patient_id),
        source.patient_forms(patient_id)
    )?;

    let summary = match most_recent_form(&forms) {
        None => {
            debug!(patient_id, "No forms; summary omitted");
            SummaryPanel::Omitted
        }
        Some(form) => {
            let result = match mode {
                SummaryMode::Obtain => obtain_summary(source, form.form_id).await,
                SummaryMode::Refresh => refresh_summary(source, form.form_id).await,
            };
            match result {
                Ok(outcome) => SummaryPanel::Ready(outcome),
                Err(e) if e.is_unauthorized() => return Err(e),
                Err(e) => {
                    warn!(patient_id, form_id = form.form_id, error = %e, "Summary unavailable");
                    SummaryPanel::Failed {
                        message: e.to_string(),
                    }
                }
            }
        }
    };

    Ok(DetailView {
        role,
        patient,
        forms,
        summary,
    })
}
