//! Configuration loading tests.

use std::fs;

use encodeflow::config::{load_config, load_config_or_default};
use serial_test::serial;
use tempfile::tempdir;

const ENV_VARS: &[&str] = &[
    "ELEMENTALCONDUCTOR_HOST",
    "ELEMENTALCONDUCTOR_USER_LOGIN",
    "ELEMENTALCONDUCTOR_API_KEY",
    "ELEMENTALCONDUCTOR_AUTH_EXPIRES",
    "ELEMENTALCONDUCTOR_AWS_ACCESS_KEY_ID",
    "ELEMENTALCONDUCTOR_AWS_SECRET_ACCESS_KEY",
    "ELEMENTALCONDUCTOR_DESTINATION",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn load_full_section_from_file() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("encodeflow.toml");
    fs::write(
        &path,
        r#"
[elementalconductor]
host = "elemental-server"
user_login = "myuser"
api_key = "secret-key"
auth_expires = 30
access_key_id = "aws-access-key"
secret_access_key = "aws-secret-key"
destination = "s3://destination"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    let section = config.elementalconductor.unwrap();
    assert_eq!(section.host, "elemental-server");
    assert_eq!(section.user_login, "myuser");
    assert_eq!(section.api_key, "secret-key");
    assert_eq!(section.auth_expires, 30);
    assert_eq!(section.destination, "s3://destination");
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("encodeflow.toml");
    fs::write(
        &path,
        "[elementalconductor]\nhost = \"file-host\"\nauth_expires = 30\n",
    )
    .unwrap();

    std::env::set_var("ELEMENTALCONDUCTOR_HOST", "env-host");
    std::env::set_var("ELEMENTALCONDUCTOR_AUTH_EXPIRES", "60");
    let config = load_config(&path);
    clear_env();

    let section = config.unwrap().elementalconductor.unwrap();
    assert_eq!(section.host, "env-host");
    assert_eq!(section.auth_expires, 60);
}

#[test]
#[serial]
fn empty_file_has_no_provider_section() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let config = load_config_or_default(Some(&path)).unwrap();
    assert!(config.elementalconductor.is_none());
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    clear_env();
    let dir = tempdir().unwrap();
    let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[elementalconductor\nhost = 1").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
