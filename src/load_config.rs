//! Merges CLI arguments and environment variables into a validated config.

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::api::DEFAULT_API_URL;
use crate::bind::BindRequest;
use crate::config::BinderConfig;
use crate::error::{Error, Result};

/// Environment variable holding the authorization key when `--auth-key` is
/// not passed. Loaded from `.env` by the binary via dotenvy.
pub const AUTH_KEY_ENV: &str = "BINDER_AUTH_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "BINDER_API_URL";

/// Raw inputs as they arrive from the CLI, before validation.
#[derive(Debug)]
pub struct BindArgs {
    pub unit: String,
    pub auth_key: Option<String>,
    pub output: String,
    pub output_dir: PathBuf,
    pub api_url: Option<String>,
}

/// Resolve flags and environment into a [`BinderConfig`].
///
/// Fails before any HTTP request when the authorization key or the unit id
/// is missing or empty.
pub fn load_config(args: BindArgs) -> Result<BinderConfig> {
    let auth_key = args
        .auth_key
        .or_else(|| env::var(AUTH_KEY_ENV).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(Error::MissingAuthKey)?;

    if args.unit.trim().is_empty() {
        return Err(Error::MissingUnitId);
    }

    let api_url = args
        .api_url
        .or_else(|| env::var(API_URL_ENV).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    info!(unit_id = %args.unit, "config inputs validated");

    Ok(BinderConfig {
        api_url,
        auth_key,
        request: BindRequest {
            unit_id: args.unit,
            output_dir: args.output_dir,
            output_name: args.output,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn args(unit: &str, auth_key: Option<&str>) -> BindArgs {
        BindArgs {
            unit: unit.to_string(),
            auth_key: auth_key.map(str::to_string),
            output: "Merged_Document.pdf".to_string(),
            output_dir: PathBuf::from("pdfs"),
            api_url: None,
        }
    }

    #[test]
    #[serial]
    fn missing_auth_key_is_rejected() {
        env::remove_var(AUTH_KEY_ENV);
        assert!(matches!(
            load_config(args("42", None)),
            Err(Error::MissingAuthKey)
        ));
        assert!(matches!(
            load_config(args("42", Some(""))),
            Err(Error::MissingAuthKey)
        ));
    }

    #[test]
    #[serial]
    fn empty_unit_id_is_rejected() {
        assert!(matches!(
            load_config(args("  ", Some("key"))),
            Err(Error::MissingUnitId)
        ));
    }

    #[test]
    #[serial]
    fn auth_key_falls_back_to_environment() {
        env::set_var(AUTH_KEY_ENV, "env-key");
        env::remove_var(API_URL_ENV);
        let config = load_config(args("42", None)).expect("config should load");
        assert_eq!(config.auth_key, "env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request.unit_id, "42");
        env::remove_var(AUTH_KEY_ENV);
    }

    #[test]
    #[serial]
    fn api_url_env_overrides_default() {
        env::set_var(API_URL_ENV, "http://127.0.0.1:9000");
        let config = load_config(args("42", Some("key"))).expect("config should load");
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn explicit_flag_beats_environment() {
        env::set_var(AUTH_KEY_ENV, "env-key");
        let config = load_config(args("42", Some("flag-key"))).expect("config should load");
        assert_eq!(config.auth_key, "flag-key");
        env::remove_var(AUTH_KEY_ENV);
    }
}
