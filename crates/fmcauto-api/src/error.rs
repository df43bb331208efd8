use thiserror::Error;

/// Top-level error type for the `fmcauto-api` crate.
///
/// Covers the token exchange, transport, and FMC REST failures.
/// `fmcauto-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token exchange rejected or returned something unusable.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The token endpoint answered without an `X-auth-access-token` header.
    #[error("Token not found in authentication response")]
    TokenMissing,

    /// Several domains are visible and none carries the requested name.
    #[error("Domain '{requested}' not found (available: {})", available.join(", "))]
    DomainNotResolved {
        requested: String,
        available: Vec<String>,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── FMC REST ────────────────────────────────────────────────────
    /// Non-success status on a read endpoint.
    #[error("FMC API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}

/// First 200 characters of a response body, for error messages.
pub(crate) fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
