//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Unauthorized(_) => {
            "Session expired or invalid; run `clinview login`.".to_string()
        }
        ApiError::Transport(msg) => format!("Could not reach the API: {}", msg),
        _ => e.to_string(),
    }
}
