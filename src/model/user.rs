use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Unknown roles are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    FieldClinician,
    QualityAdministrator,
    Other(String),
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            UserType::FieldClinician => "field_clinician",
            UserType::QualityAdministrator => "quality_administrator",
            UserType::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            UserType::FieldClinician => "Field Clinician",
            UserType::QualityAdministrator => "Quality Administrator",
            UserType::Other(raw) => raw,
        }
    }
}

impl From<String> for UserType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "field_clinician" => UserType::FieldClinician,
            "quality_administrator" => UserType::QualityAdministrator,
            _ => UserType::Other(raw),
        }
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        user_type.as_str().to_string()
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// `GET /auth/me` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub username: String,
    pub user_type: UserType,
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `POST /auth/login` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `GET /status` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
