//! Account and health presentation.

use super::section_heading;
use crate::model::{CurrentUser, HealthStatus};
use crate::session::Session;

pub fn format_login_text(session: &Session) -> String {
    format!(
        "Logged in as {} at {}",
        session.username.as_deref().unwrap_or("unknown"),
        session.base_url
    )
}

pub fn format_user_text(user: &CurrentUser, base_url: &str, color: bool) -> String {
    let mut out = format!("{}\n", section_heading("Account", color));
    out.push_str(&format!("  Username: {}\n", user.username));
    out.push_str(&format!("  Role:     {}\n", user.user_type.display_name()));
    out.push_str(&format!("  API:      {}\n", base_url));
    out
}

pub fn format_health_text(health: &HealthStatus, base_url: &str) -> String {
    let state = if health.is_healthy() { "healthy" } else { "unhealthy" };
    match health.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => format!("API {} is {}: {}", base_url, state, message),
        None => format!("API {} is {} ({})", base_url, state, health.status),
    }
}
