//! Shared test utilities for integration tests
//!
//! Isolated XDG directories, a runtime for driving the mock API, and JSON fixtures.

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize XDG and CLINVIEW_* environment access across tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_STATE_HOME",
    "CLINVIEW_API_URL",
    "CLINVIEW_API__BASE_URL",
    "CLINVIEW_API__REQUEST_TIMEOUT_SECS",
];

/// Environment variable state to restore after test
struct EnvState(Vec<(&'static str, Option<String>)>);

impl EnvState {
    fn capture() -> Self {
        Self(
            ISOLATED_VARS
                .iter()
                .map(|k| (*k, std::env::var(k).ok()))
                .collect(),
        )
    }

    fn restore(self) {
        for (key, value) in self.0 {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Run `f` with HOME and the XDG directories pointed into `test_dir`.
///
/// `CLINVIEW_*` overrides are cleared for the duration; `f` may set its own.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_data_home = test_dir.path().join("data");
    let test_state_home = test_dir.path().join("state");
    let test_home = test_dir.path().join("home");
    for dir in [&test_config_home, &test_data_home, &test_state_home, &test_home] {
        std::fs::create_dir_all(dir).unwrap();
    }

    for key in ISOLATED_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);
    std::env::set_var("XDG_DATA_HOME", &test_data_home);
    std::env::set_var("XDG_STATE_HOME", &test_state_home);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    env_state.restore();

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Runtime that hosts mock servers while the CLI runs its own runtime on the test thread.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

/// JSON payloads as the documentation API returns them.
pub mod api_fixtures {
    use serde_json::{json, Value};

    pub fn patient(patient_id: i64, name: &str) -> Value {
        json!({
            "patient_id": patient_id,
            "name": name,
            "dob": "1948-11-30",
            "gender": "F",
            "mrn": format!("MRN-{:04}", patient_id),
            "address": "12 Elm Street",
            "phone": "555-0100",
            "email": null,
            "xml_data": "<patient/>"
        })
    }

    pub fn form(form_id: i64, patient_id: i64, form_type: &str, date: &str) -> Value {
        json!({
            "form_id": form_id,
            "patient_id": patient_id,
            "form_type": form_type,
            "form_date": date,
            "survey_data": {
                form_type: {
                    "Mobility": {
                        "M1800": { "value": "Able to groom self", "question_description": "Grooming" },
                        "M1810": { "value": "", "question_description": "Dress upper body" }
                    }
                }
            }
        })
    }

    pub fn summary(form_id: i64, text: &str) -> Value {
        json!({
            "summary": text,
            "user_type": "field_clinician",
            "form_id": form_id
        })
    }

    pub fn unauthorized() -> Value {
        json!({ "detail": "Could not validate credentials" })
    }
}
