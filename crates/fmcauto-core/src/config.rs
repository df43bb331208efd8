// ── Runtime session configuration ──
//
// These types describe *how* to reach a controller. They carry credential
// data and connection tuning, but never touch disk. The CLI constructs a
// `SessionConfig` and hands it to `Session::establish`.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use fmcauto_api::{TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. Default: FMC ships with a self-signed certificate.
    #[default]
    DangerAcceptInvalid,
}

/// Everything needed to open one authenticated session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Controller host or base URL (`fmc.example.com`, `https://10.0.0.5`).
    pub host: String,
    pub username: String,
    pub password: SecretString,
    /// Domain name to operate in (e.g. `Global`).
    pub domain: String,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}
