//! CLI parse: clap types for clinview. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clinview CLI - clinical visit forms and visit summaries in the terminal
#[derive(Parser)]
#[command(name = "clinview")]
#[command(version)]
#[command(about = "View patients, visit forms, and AI-generated visit summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config and CLINVIEW_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(long, short = 'v', default_value = "false")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, short = 'q', default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored headings
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check API health
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Patient records
    Patients {
        #[command(subcommand)]
        command: PatientCommands,
    },
    /// Visit forms
    Forms {
        #[command(subcommand)]
        command: FormCommands,
    },
    /// Patient visit details with a summary of the most recent form
    Visit {
        /// Patient ID
        patient_id: i64,
        /// Regenerate the summary instead of using the cached one
        #[arg(long)]
        refresh: bool,
        /// List each form's answered questions (text output)
        #[arg(long)]
        expand: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Documentation review for a patient
    Review {
        /// Patient ID
        patient_id: i64,
        /// Regenerate the summary instead of using the cached one
        #[arg(long)]
        refresh: bool,
        /// List each form's answered questions (text output)
        #[arg(long)]
        expand: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Summary of a single form
    Summary {
        /// Form ID
        form_id: i64,
        /// Regenerate the summary instead of using the cached one
        #[arg(long)]
        refresh: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum PatientCommands {
    /// List all patients
    List {
        /// Include the raw structured record of each patient
        #[arg(long)]
        xml: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one patient
    Show {
        /// Patient ID
        id: i64,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum FormCommands {
    /// List forms, optionally filtered
    List {
        /// Only forms of this patient
        #[arg(long)]
        patient: Option<i64>,
        /// Only forms of this type (PTVIS, PTEVAL, SOC, RN, DC)
        #[arg(long)]
        form_type: Option<String>,
        /// Keep unanswered questions in survey data
        #[arg(long)]
        include_null: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one form with its answered questions
    Show {
        /// Form ID
        id: i64,
        /// Keep unanswered questions in survey data
        #[arg(long)]
        include_null: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
