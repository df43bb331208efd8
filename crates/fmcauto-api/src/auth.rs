// FMC token exchange
//
// `POST /api/fmc_platform/v1/auth/generatetoken` with basic auth. The
// controller answers with an empty body; everything useful travels in
// response headers: the access token and a JSON list of domains.

use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::client::endpoint;
use crate::error::{Error, preview};

/// Header carrying the access token on the token response and on every
/// authenticated request afterwards (`X-auth-access-token` on the wire;
/// header names are case-insensitive and `http` stores them lowercased).
pub const TOKEN_HEADER: &str = "x-auth-access-token";

/// Header carrying the JSON-encoded list of domains visible to the user.
pub const DOMAINS_HEADER: &str = "domains";

pub(crate) const TOKEN_PATH: &str = "/api/fmc_platform/v1/auth/generatetoken";

/// A tenancy partition on the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub uuid: String,
}

/// What a successful token exchange hands back.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    pub token: SecretString,
    pub domains: Vec<Domain>,
}

impl TokenGrant {
    /// Pull the token and domain list out of the response headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        let token = headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or(Error::TokenMissing)?;

        // Domain names may carry UTF-8, which `to_str()` refuses.
        let raw = headers
            .get(DOMAINS_HEADER)
            .ok_or_else(|| Error::Authentication {
                message: format!("{DOMAINS_HEADER} header missing from token response"),
            })?;

        let domains: Vec<Domain> =
            serde_json::from_slice(raw.as_bytes()).map_err(|e| Error::Authentication {
                message: format!("malformed {DOMAINS_HEADER} header: {e}"),
            })?;

        Ok(Self {
            token: SecretString::from(token.to_owned()),
            domains,
        })
    }

    /// Pick the domain the session operates in.
    pub fn select_domain(&self, requested: &str) -> Result<&Domain, Error> {
        select_domain(&self.domains, requested)
    }
}

/// Choose a domain from the controller's list.
///
/// A single visible domain is used regardless of its name. With several,
/// the one named `requested` wins; no match is an error rather than an
/// arbitrary pick.
pub fn select_domain<'a>(domains: &'a [Domain], requested: &str) -> Result<&'a Domain, Error> {
    match domains {
        [only] => {
            if only.name != requested {
                debug!(
                    requested,
                    using = %only.name,
                    "single domain available, ignoring requested name"
                );
            }
            Ok(only)
        }
        _ => domains
            .iter()
            .find(|d| d.name == requested)
            .ok_or_else(|| Error::DomainNotResolved {
                requested: requested.to_owned(),
                available: domains.iter().map(|d| d.name.clone()).collect(),
            }),
    }
}

/// Run the token exchange against `base_url`.
pub(crate) async fn generate_token(
    http: &reqwest::Client,
    base_url: &Url,
    username: &str,
    password: &SecretString,
) -> Result<TokenGrant, Error> {
    let url = endpoint(base_url, TOKEN_PATH)?;
    debug!("requesting token at {}", url);

    let resp = http
        .post(url)
        .basic_auth(username, Some(password.expose_secret()))
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Authentication {
            message: format!("token request failed (HTTP {status}): {}", preview(&body)),
        });
    }

    let grant = TokenGrant::from_headers(resp.headers())?;
    debug!(domains = grant.domains.len(), "token acquired");
    Ok(grant)
}
