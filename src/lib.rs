//! Clinview: terminal viewer for clinical visit forms and visit summaries.
//!
//! A client for the clinical documentation REST API. Patients and forms are read
//! as-is; visit summaries follow a cache-or-generate policy (see [`summary`]).

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod session;
pub mod summary;
pub mod visit;
