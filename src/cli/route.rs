//! CLI route: single route table and run context. Dispatches to the client, the
//! summary policy, and presentation.

use crate::cli::help::{command_name, requires_session};
use crate::cli::parse::{Commands, FormCommands, PatientCommands};
use crate::cli::presentation::{
    format_detail_text, format_form_list_text, format_form_text, format_health_text, format_json,
    format_login_text, format_patient_list_text, format_patient_text, format_summary_text,
    format_user_text,
};
use crate::client::ApiClient;
use crate::config::ClinviewConfig;
use crate::error::ApiError;
use crate::model::{Credentials, FormQuery, FormType};
use crate::session::{FileSessionStore, Session, SessionStore};
use crate::summary::{obtain_summary, refresh_summary};
use crate::visit::{load_detail, DetailRole, SummaryMode};
use serde::Serialize;
use std::io::IsTerminal;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: resolved config and the session store.
pub struct RunContext {
    config: ClinviewConfig,
    store: Box<dyn SessionStore>,
    color: bool,
}

impl RunContext {
    /// Context backed by the session file from config (or the data dir default).
    pub fn new(config: ClinviewConfig) -> Result<Self, ApiError> {
        let store = FileSessionStore::from_config(config.session.path.as_deref())?;
        debug!(path = %store.path().display(), "Using session file");
        Ok(Self::with_store(config, Box::new(store)))
    }

    pub fn with_store(config: ClinviewConfig, store: Box<dyn SessionStore>) -> Self {
        let color = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self {
            config,
            store,
            color,
        }
    }

    /// Force headings on or off (`--no-color`).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &ClinviewConfig {
        &self.config
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Execute a CLI command via the single route table.
    ///
    /// An `Unauthorized` answer from the API clears the stored session before the
    /// error is returned.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let started = Instant::now();

        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            ApiError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create runtime: {}", e),
            ))
        })?;
        let result = runtime.block_on(self.execute_inner(command));

        if let Err(e) = &result {
            if e.is_unauthorized() {
                warn!(command = %name, "API rejected the session; clearing it");
                // The 401 is what the user needs to see, even if the clear fails
                if let Err(clear_err) = self.store.clear() {
                    warn!(command = %name, error = %clear_err, "Failed to clear session");
                }
            }
        }
        info!(
            command = %name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        if let Commands::Login { username, password } = command {
            return self.login(username.as_deref(), password.as_deref()).await;
        }
        if let Commands::Logout = command {
            self.store.clear()?;
            return Ok("Logged out.".to_string());
        }
        if let Commands::Status { format } = command {
            let client = self.anonymous_client()?;
            let health = client.status().await?;
            return render(format, &health, |h| format_health_text(h, client.base_url()));
        }

        debug_assert!(requires_session(command));
        let client = self.session_client()?;

        match command {
            Commands::Whoami { format } => {
                let user = client.current_user().await?;
                render(format, &user, |u| {
                    format_user_text(u, client.base_url(), self.color)
                })
            }
            Commands::Patients { command } => self.handle_patients(&client, command).await,
            Commands::Forms { command } => self.handle_forms(&client, command).await,
            Commands::Visit {
                patient_id,
                refresh,
                expand,
                format,
            } => {
                let view =
                    load_detail(&client, *patient_id, DetailRole::Visit, summary_mode(*refresh))
                        .await?;
                render(format, &view, |v| format_detail_text(v, *expand, self.color))
            }
            Commands::Review {
                patient_id,
                refresh,
                expand,
                format,
            } => {
                let view =
                    load_detail(&client, *patient_id, DetailRole::Review, summary_mode(*refresh))
                        .await?;
                render(format, &view, |v| format_detail_text(v, *expand, self.color))
            }
            Commands::Summary {
                form_id,
                refresh,
                format,
            } => {
                let outcome = if *refresh {
                    refresh_summary(&client, *form_id).await?
                } else {
                    obtain_summary(&client, *form_id).await?
                };
                render(format, &outcome, |o| format_summary_text(o, self.color))
            }
            Commands::Login { .. } | Commands::Logout | Commands::Status { .. } => {
                Err(ApiError::InvalidInput(format!("Unroutable command: {}", command_name(command))))
            }
        }
    }

    async fn handle_patients(
        &self,
        client: &ApiClient,
        command: &PatientCommands,
    ) -> Result<String, ApiError> {
        match command {
            PatientCommands::List { xml, format } => {
                let mut patients = client.list_patients().await?;
                if !*xml && format == "json" {
                    for p in &mut patients {
                        p.xml_data = None;
                    }
                }
                render(format, &patients, |p| {
                    format_patient_list_text(p, *xml, self.color)
                })
            }
            PatientCommands::Show { id, format } => {
                let patient = client.get_patient(*id).await?;
                render(format, &patient, |p| format_patient_text(p, self.color))
            }
        }
    }

    async fn handle_forms(
        &self,
        client: &ApiClient,
        command: &FormCommands,
    ) -> Result<String, ApiError> {
        match command {
            FormCommands::List {
                patient,
                form_type,
                include_null,
                format,
            } => {
                let query = FormQuery {
                    patient_id: *patient,
                    form_type: form_type
                        .as_deref()
                        .map(|t| FormType::from(t.trim().to_uppercase())),
                    exclude_null: !*include_null,
                };
                let forms = client.list_forms(&query).await?;
                render(format, &forms, |f| format_form_list_text(f, self.color))
            }
            FormCommands::Show {
                id,
                include_null,
                format,
            } => {
                let form = client.get_form(*id, !*include_null).await?;
                render(format, &form, |f| format_form_text(f, self.color))
            }
        }
    }

    async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ApiError> {
        let username = match username {
            Some(u) => u.to_string(),
            None => prompt_username()?,
        };
        let password = match password {
            Some(p) => p.to_string(),
            None => prompt_password()?,
        };
        if username.trim().is_empty() {
            return Err(ApiError::InvalidInput("Username cannot be empty".to_string()));
        }

        let client = self.anonymous_client()?;
        let response = client
            .login(&Credentials {
                username: username.clone(),
                password,
            })
            .await?;
        let session = Session::authenticated(client.base_url(), response.access_token, username);
        self.store.save(&session)?;
        info!(username = ?session.username, "Logged in");
        Ok(format_login_text(&session))
    }

    fn anonymous_client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::new(&self.config.api, &Session::anonymous(&self.config.api.base_url))
    }

    fn session_client(&self) -> Result<ApiClient, ApiError> {
        let session = self
            .store
            .load_for(&self.config.api.base_url)?
            .ok_or(ApiError::NotLoggedIn)?;
        ApiClient::new(&self.config.api, &session)
    }
}

fn summary_mode(refresh: bool) -> SummaryMode {
    if refresh {
        SummaryMode::Refresh
    } else {
        SummaryMode::Obtain
    }
}

/// Render `value` as pretty JSON or with the given text formatter.
fn render<T, F>(format: &str, value: &T, text: F) -> Result<String, ApiError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        "json" => format_json(value),
        "text" => Ok(text(value)),
        other => Err(ApiError::InvalidInput(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

fn prompt_username() -> Result<String, ApiError> {
    dialoguer::Input::<String>::new()
        .with_prompt("Username")
        .interact_text()
        .map_err(|e| ApiError::InvalidInput(format!("Failed to read username: {}", e)))
}

fn prompt_password() -> Result<String, ApiError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| ApiError::InvalidInput(format!("Failed to read password: {}", e)))
}
