//! CLI configuration: thin wrapper around `fmcauto_config` shared types.
//!
//! Adds the flag-aware resolution that turns `ConnectionOpts` plus the
//! optional config profile into a `SessionConfig`.

use std::io::IsTerminal;
use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use fmcauto_core::{SessionConfig, TlsVerification};

use crate::cli::ConnectionOpts;
use crate::error::CliError;

pub use fmcauto_config::{Config, Profile, config_path, load_config};

/// Resolve the session from flags, env, the config file and, as a last
/// resort, an interactive password prompt.
pub fn resolve_session(conn: &ConnectionOpts, cfg: &Config) -> Result<SessionConfig, CliError> {
    resolve_session_with(conn, cfg, prompt_password)
}

/// Flag values win over the profile, the profile over config defaults.
pub fn resolve_session_with(
    conn: &ConnectionOpts,
    cfg: &Config,
    prompt: impl FnOnce(&str, &str) -> Result<Option<SecretString>, CliError>,
) -> Result<SessionConfig, CliError> {
    let selected = cfg.profile(conn.profile.as_deref()).map_err(|err| match err {
        fmcauto_config::ConfigError::UnknownProfile { profile } => {
            let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            CliError::ProfileNotFound {
                name: profile,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            }
        }
        other => other.into(),
    })?;
    let profile_name = selected.map_or("(none)", |(name, _)| name);
    let profile = selected.map(|(_, p)| p);
    debug!(profile = profile_name, "resolving session");

    // 1. Host (flag > env > profile)
    let host = conn
        .fmchost
        .clone()
        .or_else(|| profile.and_then(|p| p.host.clone()))
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| CliError::MissingHost {
            path: config_path().display().to_string(),
        })?;

    // 2. Username (flag > env > profile)
    let username = conn
        .username
        .clone()
        .or_else(|| profile.and_then(|p| p.username.clone()))
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    // 3. Password (flag > env > profile chain > prompt)
    let password = match conn.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => {
            let from_profile = profile
                .and_then(|p| fmcauto_config::resolve_password(p, profile_name).ok());
            match from_profile {
                Some(pw) => pw,
                None => prompt(&username, &host)?.ok_or_else(|| CliError::NoCredentials {
                    profile: profile_name.into(),
                })?,
            }
        }
    };

    // 4. Domain, TLS, timeout
    let domain = conn
        .domain
        .clone()
        .or_else(|| profile.and_then(|p| p.domain.clone()))
        .unwrap_or_else(|| cfg.defaults.domain.clone());

    let tls = match conn.sslverify {
        Some(ref ca) => TlsVerification::CustomCa(ca.clone()),
        None => profile.map_or(TlsVerification::DangerAcceptInvalid, Profile::tls),
    };

    let timeout = conn
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(cfg.defaults.timeout);

    Ok(SessionConfig {
        host,
        username,
        password,
        domain,
        tls,
        timeout: Duration::from_secs(timeout),
    })
}

/// Ask on the terminal; `None` when stdin isn't interactive.
fn prompt_password(username: &str, host: &str) -> Result<Option<SecretString>, CliError> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let pass = rpassword::prompt_password(format!("Password for {username}@{host}: "))?;
    Ok(Some(SecretString::from(pass)))
}
