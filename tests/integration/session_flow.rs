//! Login session persisted in a session file across command runs

use clap::Parser;
use clinview::cli::{Cli, RunContext};
use clinview::config::ClinviewConfig;
use clinview::session::{FileSessionStore, SessionStore};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::{api_fixtures, runtime, with_xdg_env};

fn run(ctx: &RunContext, args: &[&str]) -> Result<String, clinview::error::ApiError> {
    let mut full = vec!["clinview"];
    full.extend_from_slice(args);
    ctx.execute(&Cli::try_parse_from(full).unwrap().command)
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": token,
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
}

#[test]
fn test_session_file_survives_between_contexts() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        mount_login(&server, "jwt-1").await;
        Mock::given(method("GET"))
            .and(path("/patients/4"))
            .and(header("authorization", "Bearer jwt-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(api_fixtures::patient(4, "Kept Session")),
            )
            .expect(1)
            .mount(&server)
            .await;
    });

    let temp = TempDir::new().unwrap();
    let session_path = temp.path().join("session.toml");
    let mut config = ClinviewConfig::default();
    config.api.base_url = server.uri();
    config.session.path = Some(session_path.clone());

    let first = RunContext::new(config.clone()).unwrap().with_color(false);
    run(&first, &["login", "-u", "nurse", "-p", "pw"]).unwrap();
    assert!(session_path.exists());

    // Fresh context reads the token back from disk
    let second = RunContext::new(config).unwrap().with_color(false);
    let output = run(&second, &["patients", "show", "4"]).unwrap();
    assert!(output.starts_with("Kept Session\n"));
}

#[test]
fn test_expired_token_removes_session_file() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        mount_login(&server, "jwt-expired").await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(api_fixtures::unauthorized()))
            .mount(&server)
            .await;
    });

    let temp = TempDir::new().unwrap();
    let session_path = temp.path().join("session.toml");
    let mut config = ClinviewConfig::default();
    config.api.base_url = server.uri();
    config.session.path = Some(session_path.clone());

    let ctx = RunContext::new(config).unwrap();
    run(&ctx, &["login", "-u", "nurse", "-p", "pw"]).unwrap();
    assert!(session_path.exists());

    let err = run(&ctx, &["whoami"]).unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!session_path.exists());
    assert!(FileSessionStore::new(session_path).load().unwrap().is_none());
}

#[test]
fn test_default_session_file_lives_in_data_dir() {
    let rt = runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(mount_login(&server, "jwt-xdg"));

    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let mut config = ClinviewConfig::default();
        config.api.base_url = server.uri();

        let ctx = RunContext::new(config).unwrap();
        run(&ctx, &["login", "-u", "nurse", "-p", "pw"]).unwrap();

        let expected = test_dir
            .path()
            .join("data")
            .join("clinview")
            .join("session.toml");
        assert!(expected.exists());

        run(&ctx, &["logout"]).unwrap();
        assert!(!expected.exists());
    });
}
