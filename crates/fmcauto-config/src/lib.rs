//! Shared configuration for the fmcauto front ends.
//!
//! TOML profiles and credential resolution (env, keyring, plaintext).
//! The CLI layers its flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use fmcauto_core::TlsVerification;

/// Keyring service name; entries are keyed `{profile}/password`.
pub const KEYRING_SERVICE: &str = "fmcauto";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("profile '{profile}' not found in config")]
    UnknownProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// The named profile, or the default one when `name` is `None`.
    ///
    /// A missing default profile is not an error; an explicitly named
    /// profile that doesn't exist is.
    pub fn profile(&self, name: Option<&str>) -> Result<Option<(&str, &Profile)>, ConfigError> {
        match name {
            Some(name) => self
                .profiles
                .get_key_value(name)
                .map(|(k, p)| Some((k.as_str(), p)))
                .ok_or_else(|| ConfigError::UnknownProfile {
                    profile: name.into(),
                }),
            None => Ok(self.default_profile.as_deref().and_then(|name| {
                self.profiles
                    .get_key_value(name)
                    .map(|(k, p)| (k.as_str(), p))
            })),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Log destination; the CLI falls back to its own default when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            timeout: default_timeout(),
            log_file: None,
        }
    }
}

fn default_domain() -> String {
    "Global".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named FMC profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Controller host or base URL (e.g. "fmc.example.com").
    pub host: Option<String>,

    pub username: Option<String>,

    /// Plaintext password; prefer `password_env` or the keyring.
    pub password: Option<String>,

    /// Environment variable name holding the password.
    pub password_env: Option<String>,

    /// Domain override (e.g. "Global/Lab").
    pub domain: Option<String>,

    /// CA bundle used to verify the controller certificate.
    pub ca_cert: Option<PathBuf>,

    /// Skip certificate verification even when `ca_cert` is set.
    pub insecure: Option<bool>,

    /// Timeout override, in seconds.
    pub timeout: Option<u64>,
}

impl Profile {
    /// TLS mode implied by `insecure` and `ca_cert`.
    ///
    /// With neither set, verification is off: FMC appliances ship with a
    /// self-signed certificate.
    pub fn tls(&self) -> TlsVerification {
        if self.insecure.unwrap_or(false) {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::DangerAcceptInvalid
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "fmcauto", "fmcauto").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fmcauto");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file; `FMC_*` environment variables still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FMC_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve a profile's password.
///
/// Order: the variable named by `password_env`, then the system keyring,
/// then plaintext in the config file.
pub fn resolve_password(
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}
