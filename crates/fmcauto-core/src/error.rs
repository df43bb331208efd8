// ── Core error types ──
//
// User-facing errors from fmcauto-core. Consumers never see reqwest or
// JSON parse failures directly: the `From<fmcauto_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    // ── Authentication errors ────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Token not found in authentication response")]
    TokenMissing,

    #[error("Domain '{requested}' not found (available: {})", available.join(", "))]
    DomainNotResolved {
        requested: String,
        available: Vec<String>,
    },

    // ── Resolution errors ────────────────────────────────────────────
    #[error("Could not retrieve objects: collection '{collection}' is empty")]
    CollectionEmpty { collection: String },

    #[error("{entity_type} '{name}' not found")]
    NotFound { entity_type: String, name: String },

    // ── Validation errors ────────────────────────────────────────────
    #[error("{value} is not supported object type (allowed: {allowed})")]
    UnsupportedObjectType { value: String, allowed: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// A referenced name or collection could not be resolved upstream.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::CollectionEmpty { .. } | Self::NotFound { .. })
    }

    /// The session could not be established.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. } | Self::TokenMissing | Self::DomainNotResolved { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fmcauto_api::Error> for CoreError {
    fn from(err: fmcauto_api::Error) -> Self {
        match err {
            fmcauto_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            fmcauto_api::Error::TokenMissing => CoreError::TokenMissing,
            fmcauto_api::Error::DomainNotResolved {
                requested,
                available,
            } => CoreError::DomainNotResolved {
                requested,
                available,
            },
            fmcauto_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if e.is_timeout() {
                    CoreError::Timeout { url }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fmcauto_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fmcauto_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            fmcauto_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            fmcauto_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
