//! CLI configuration: thin wrapper around `stockroom_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--url, --insecure, --timeout).

use std::time::Duration;

use stockroom_core::{ApiConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use stockroom_config::{
    Config, DEFAULT_URL, Defaults, Profile, config_path, load_config_or_default, parse_url,
    save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config
        .active_profile_name(global.profile.as_deref())
        .to_owned()
}

/// Build an `ApiConfig` from config file, profile, and CLI overrides.
///
/// Priority per field: flag (or its env var) > profile > `[defaults]`.
/// With no profile at all the API is expected at [`DEFAULT_URL`].
pub fn resolve_api_config(global: &GlobalOpts, cfg: &Config) -> Result<ApiConfig, CliError> {
    let profile = match cfg.resolve_profile(global.profile.as_deref()) {
        Ok(found) => found.map(|(_, p)| p),
        Err(_) => {
            return Err(CliError::ProfileNotFound {
                name: active_profile_name(global, cfg),
                available: available_profiles(cfg),
            });
        }
    };

    // 1. URL
    let url_str = global
        .url
        .as_deref()
        .or(profile.map(|p| p.url.as_str()))
        .unwrap_or(DEFAULT_URL);
    let url = parse_url(url_str)?;

    // 2. TLS verification
    let profile_insecure = profile.and_then(|p| p.insecure);
    let tls = if global.insecure || profile_insecure.unwrap_or(cfg.defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ca_path) = profile.and_then(|p| p.ca_cert.clone()) {
        TlsVerification::CustomCa(ca_path)
    } else {
        TlsVerification::SystemDefaults
    };

    // 3. Timeout
    let secs = global
        .timeout
        .or(profile.and_then(|p| p.timeout))
        .unwrap_or(cfg.defaults.timeout);

    Ok(ApiConfig {
        url,
        tls,
        timeout: Duration::from_secs(secs),
    })
}

/// Comma-separated profile names, for error help text.
pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
