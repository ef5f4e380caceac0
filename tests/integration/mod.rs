//! Integration tests for the clinview client and CLI routes

mod config_integration;
mod session_flow;
mod test_utils;

pub use test_utils::{api_fixtures, runtime, with_xdg_env};
