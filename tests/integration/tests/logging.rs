//! Logging integration tests.
//!
//! These tests install a `tracing_subscriber` fmt layer that writes into an
//! in-memory buffer and verify that secrets recorded as event fields, and
//! the codec helpers' own diagnostics, never carry the plaintext.

use secretbox::codec::{from_json, load_json};
use secretbox::{SecretBox, SecretString};
use secretbox_integration_tests::{AppConfig, LogCapture, SAMPLE_JSON};
use std::fs;
use tempfile::TempDir;
use tracing::Level;

fn with_text_logs(f: impl FnOnce()) -> String {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn test_event_fields_are_masked() {
    let token: SecretString = SecretBox::from("ghp_live_token");
    let config = AppConfig::sample();

    let logs = with_text_logs(|| {
        tracing::info!(token = %token, "display field");
        tracing::info!(token = ?token, "debug field");
        tracing::info!(?config, "whole config");
    });

    assert!(logs.contains("token=******"));
    assert!(logs.contains("token=SecretBox{******}"));
    assert!(logs.contains("whole config"));
    assert!(!logs.contains("ghp_live_token"));
    assert!(!logs.contains("secret-password"));
    assert!(!logs.contains("db-password"));
}

#[test]
fn test_json_logs_are_masked() {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(capture.clone())
        .with_max_level(Level::INFO)
        .finish();

    let password: SecretString = SecretBox::from("hunter2");
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(user = "lex", password = %password, "login");
    });

    let logs = capture.contents();
    let line = logs.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["fields"]["password"], "******");
    assert!(!logs.contains("hunter2"));
}

#[test]
fn test_load_logs_omit_payload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, SAMPLE_JSON).unwrap();

    let logs = with_text_logs(|| {
        let config: AppConfig = load_json(&path).unwrap();
        assert_eq!(config.password.expose_secret(), "secret-password");
    });

    assert!(logs.contains("loading json"));
    assert!(!logs.contains("secret-password"));
}

#[test]
fn test_decode_failure_logs_omit_input() {
    let logs = with_text_logs(|| {
        let result = from_json::<SecretBox<bool>>(r#""leaky-value""#);
        assert!(result.is_err());
    });

    assert!(logs.contains("json decode failed"));
    assert!(!logs.contains("leaky-value"));
}
