//! Documentation API client.
//!
//! Public API: typed requests and responses, no status code knowledge. All
//! HTTP/status mapping lives in `http.rs`.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{
    Credentials, CurrentUser, Form, FormId, FormQuery, HealthStatus, LoginResponse, Patient,
    PatientId, Summary,
};
use crate::session::Session;
use crate::summary::SummarySource;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("clinview/", env!("CARGO_PKG_VERSION"));

/// Client for the clinical documentation REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpBackend,
}

impl ApiClient {
    /// Build a client for `session`. The session's token, if any, is sent as a bearer token.
    pub fn new(config: &ApiConfig, session: &Session) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http: HttpBackend {
                client,
                base_url: session.base_url.clone(),
                token: session.token.clone().filter(|t| !t.is_empty()),
            },
        })
    }

    /// Same connection pool, different session.
    pub fn with_session(&self, session: &Session) -> Self {
        Self {
            http: HttpBackend {
                client: self.http.client.clone(),
                base_url: session.base_url.clone(),
                token: session.token.clone().filter(|t| !t.is_empty()),
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.http.token.is_some()
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        debug!(username = %credentials.username, "Logging in");
        self.http
            .request_json(Method::POST, "/auth/login", &[], Some(credentials))
            .await
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.http.get_json("/auth/me", &[]).await
    }

    /// `GET /patients`
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.http.get_json("/patients", &[]).await
    }

    /// `GET /patients/{id}`
    pub async fn get_patient(&self, patient_id: PatientId) -> Result<Patient, ApiError> {
        self.http
            .get_json(&format!("/patients/{}", patient_id), &[])
            .await
    }

    /// `GET /forms/` with optional filters
    pub async fn list_forms(&self, query: &FormQuery) -> Result<Vec<Form>, ApiError> {
        self.http.get_json("/forms/", &query.to_params()).await
    }

    /// `GET /forms/patient/{id}`; order is whatever the server returns
    pub async fn forms_for_patient(
        &self,
        patient_id: PatientId,
        exclude_null: bool,
    ) -> Result<Vec<Form>, ApiError> {
        self.http
            .get_json(
                &format!("/forms/patient/{}", patient_id),
                &[("exclude_null", exclude_null.to_string())],
            )
            .await
    }

    /// `GET /forms/{id}`
    pub async fn get_form(&self, form_id: FormId, exclude_null: bool) -> Result<Form, ApiError> {
        self.http
            .get_json(
                &format!("/forms/{}", form_id),
                &[("exclude_null", exclude_null.to_string())],
            )
            .await
    }

    /// `GET /forms/{id}/summary`; `ApiError::NotFound` when nothing is cached
    pub async fn cached_summary(&self, form_id: FormId) -> Result<Summary, ApiError> {
        self.http
            .get_json(&format!("/forms/{}/summary", form_id), &[])
            .await
    }

    /// `POST /forms/{id}/summarize`; the server caches the result
    pub async fn summarize_form(&self, form_id: FormId) -> Result<Summary, ApiError> {
        self.http
            .request_json::<Summary, ()>(
                Method::POST,
                &format!("/forms/{}/summarize", form_id),
                &[],
                None,
            )
            .await
    }

    /// `GET /status`
    pub async fn status(&self) -> Result<HealthStatus, ApiError> {
        self.http.get_json("/status", &[]).await
    }
}

#[async_trait]
impl SummarySource for ApiClient {
    async fn cached_summary(&self, form_id: FormId) -> Result<Summary, ApiError> {
        ApiClient::cached_summary(self, form_id).await
    }

    async fn generate_summary(&self, form_id: FormId) -> Result<Summary, ApiError> {
        self.summarize_form(form_id).await
    }
}
