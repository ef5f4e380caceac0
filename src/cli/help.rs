//! CLI command-name contract for log fields and routing.

use crate::cli::parse::{Commands, FormCommands, PatientCommands};

/// Command name string for log fields (e.g. "patients.list", "visit").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Login { .. } => "login".to_string(),
        Commands::Logout => "logout".to_string(),
        Commands::Whoami { .. } => "whoami".to_string(),
        Commands::Status { .. } => "status".to_string(),
        Commands::Patients { command } => format!("patients.{}", patient_command_name(command)),
        Commands::Forms { command } => format!("forms.{}", form_command_name(command)),
        Commands::Visit { .. } => "visit".to_string(),
        Commands::Review { .. } => "review".to_string(),
        Commands::Summary { .. } => "summary".to_string(),
    }
}

pub fn patient_command_name(command: &PatientCommands) -> &'static str {
    match command {
        PatientCommands::List { .. } => "list",
        PatientCommands::Show { .. } => "show",
    }
}

pub fn form_command_name(command: &FormCommands) -> &'static str {
    match command {
        FormCommands::List { .. } => "list",
        FormCommands::Show { .. } => "show",
    }
}

/// Commands that need a stored session before any request is made.
pub fn requires_session(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Login { .. } | Commands::Logout | Commands::Status { .. }
    )
}
