//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fmcauto_config::ConfigError;
use fmcauto_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to FMC at {url}")]
    #[diagnostic(
        code(fmcauto::connection_failed),
        help(
            "Check that the controller is reachable and --fmchost is correct.\n\
             A bare host implies HTTPS; pass a full URL for anything else."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No FMC host given")]
    #[diagnostic(
        code(fmcauto::no_host),
        help(
            "Pass --fmchost, set FMC_HOST, or add a profile to {path}"
        )
    )]
    MissingHost { path: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(fmcauto::auth_failed),
        help("Verify the username and password, and that the account has API access.")
    )]
    AuthFailed { message: String },

    #[error("Domain '{requested}' not found")]
    #[diagnostic(
        code(fmcauto::domain_not_found),
        help("Domains available to this user: {available}")
    )]
    DomainNotFound { requested: String, available: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(fmcauto::no_credentials),
        help(
            "Pass --username/--password, set FMC_USERNAME and FMC_PASSWORD,\n\
             or store the password with the OS keyring under service 'fmcauto'."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(fmcauto::not_found), help("{hint}"))]
    NotFound {
        resource_type: String,
        identifier: String,
        hint: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({status}): {message}")]
    #[diagnostic(code(fmcauto::api_error))]
    ApiError { status: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fmcauto::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fmcauto::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(fmcauto::config))]
    Config { message: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(fmcauto::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { url: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(
        code(fmcauto::json),
        help("Run: avi-nat --show-example to see a complete rule draft.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(fmcauto::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::DomainNotFound { .. } | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::MissingHost { .. } | Self::Json(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout { url } => CliError::Timeout { url },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::TokenMissing => CliError::AuthFailed {
                message: "no access token in the controller's response".into(),
            },

            CoreError::DomainNotResolved {
                requested,
                available,
            } => CliError::DomainNotFound {
                requested,
                available: available.join(", "),
            },

            CoreError::CollectionEmpty { collection } => CliError::NotFound {
                hint: format!("The '{collection}' collection has no objects to resolve names against."),
                resource_type: "objects in collection".into(),
                identifier: collection,
            },

            CoreError::NotFound { entity_type, name } => CliError::NotFound {
                hint: not_found_hint(&entity_type),
                resource_type: entity_type,
                identifier: name,
            },

            CoreError::UnsupportedObjectType { value, allowed } => CliError::Validation {
                field: "object type".into(),
                reason: format!("'{value}' is not one of: {allowed}"),
            },

            CoreError::Api { message, status } => CliError::ApiError {
                status: status.map_or_else(|| "-".into(), |s| s.to_string()),
                message,
            },

            CoreError::Config { message } => CliError::Config { message },

            CoreError::Internal(message) => CliError::ApiError {
                status: "internal".into(),
                message,
            },
        }
    }
}

fn not_found_hint(entity_type: &str) -> String {
    if entity_type.eq_ignore_ascii_case("NAT policy") {
        "Run: avi-nat --get-ftdnatpolicies to see available policies".into()
    } else {
        format!("Check the {entity_type} name; names are matched exactly.")
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: String::new(),
            },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
