mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

const ENV_PREFIX: &str = "ELEMENTALCONDUCTOR_";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./encodeflow.toml",
        "~/.config/encodeflow/config.toml",
        "/etc/encodeflow/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Overlay `ELEMENTALCONDUCTOR_*` variables on top of the file settings.
///
/// A section is created on demand when any variable is set.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.is_empty());

    let host = var("HOST");
    let user_login = var("USER_LOGIN");
    let api_key = var("API_KEY");
    let auth_expires = var("AUTH_EXPIRES");
    let access_key_id = var("AWS_ACCESS_KEY_ID");
    let secret_access_key = var("AWS_SECRET_ACCESS_KEY");
    let destination = var("DESTINATION");

    let any_set = [
        &host,
        &user_login,
        &api_key,
        &auth_expires,
        &access_key_id,
        &secret_access_key,
        &destination,
    ]
    .iter()
    .any(|v| v.is_some());
    if !any_set {
        return Ok(());
    }

    let section = config.elementalconductor.get_or_insert_with(Default::default);
    if let Some(v) = host {
        section.host = v;
    }
    if let Some(v) = user_login {
        section.user_login = v;
    }
    if let Some(v) = api_key {
        section.api_key = v;
    }
    if let Some(v) = auth_expires {
        section.auth_expires = v
            .parse()
            .with_context(|| format!("Invalid {ENV_PREFIX}AUTH_EXPIRES: {v:?}"))?;
    }
    if let Some(v) = access_key_id {
        section.access_key_id = v;
    }
    if let Some(v) = secret_access_key {
        section.secret_access_key = v;
    }
    if let Some(v) = destination {
        section.destination = v;
    }

    tracing::debug!("Applied {}* environment overrides", ENV_PREFIX);
    Ok(())
}
