//! Login session context.
//!
//! The bearer token lives in an explicit [`Session`] value handed to the API client.
//! Persistence is behind [`SessionStore`]; the CLI uses [`FileSessionStore`].

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const SESSION_FILE_NAME: &str = "session.toml";

/// Authenticated (or anonymous) context for API requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Session without credentials, used for login and health checks.
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            token: None,
            username: None,
            created_at: None,
        }
    }

    pub fn authenticated(
        base_url: impl Into<String>,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            token: Some(token.into()),
            username: Some(username.into()),
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map(|t| !t.is_empty()).unwrap_or(false)
    }

    /// True when this session was issued by the API at `base_url`.
    pub fn matches_base_url(&self, base_url: &str) -> bool {
        self.base_url == normalize_base_url(base_url)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("created_at", &self.created_at)
            .finish()
    }
}

pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Persistence for the login session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, ApiError>;
    fn save(&self, session: &Session) -> Result<(), ApiError>;
    /// Remove the stored session. Clearing an absent session is not an error.
    fn clear(&self) -> Result<(), ApiError>;

    /// Stored session for `base_url`, if it carries a token.
    fn load_for(&self, base_url: &str) -> Result<Option<Session>, ApiError> {
        match self.load()? {
            Some(session) if session.is_authenticated() && session.matches_base_url(base_url) => {
                Ok(Some(session))
            }
            Some(session) => {
                debug!(
                    stored_base_url = %session.base_url,
                    requested_base_url = %base_url,
                    "Ignoring stored session for a different API"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// TOML file session store.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the configured path, or `session.toml` in the platform data dir.
    pub fn from_config(path: Option<&Path>) -> Result<Self, ApiError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => crate::config::data_dir()?.join(SESSION_FILE_NAME),
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ApiError::SessionError(format!(
                "Failed to read session file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        match toml::from_str::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable session file"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::SessionError(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let content = toml::to_string_pretty(session)
            .map_err(|e| ApiError::SessionError(format!("Failed to serialize session: {}", e)))?;
        write_private(&self.path, &content).map_err(|e| {
            ApiError::SessionError(format!(
                "Failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::SessionError(format!(
                "Failed to remove session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// In-process session store.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, ApiError> {
        Ok(self
            .session
            .lock()
            .map_err(|_| ApiError::SessionError("Session lock poisoned".to_string()))?
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        *self
            .session
            .lock()
            .map_err(|_| ApiError::SessionError("Session lock poisoned".to_string()))? =
            Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self
            .session
            .lock()
            .map_err(|_| ApiError::SessionError("Session lock poisoned".to_string()))? = None;
        Ok(())
    }
}
