//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, requires_session};
pub use output::map_error;
pub use parse::{Cli, Commands, FormCommands, PatientCommands};
pub use presentation::{
    format_detail_text, format_form_list_text, format_form_text, format_health_text,
    format_json, format_login_text, format_patient_list_text, format_patient_text,
    format_summary_text, format_user_text,
};
pub use route::RunContext;
