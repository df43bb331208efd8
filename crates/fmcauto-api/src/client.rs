// FMC HTTP client
//
// Wraps `reqwest::Client` with the session token, domain-scoped URL
// construction, and response handling. Endpoint groups (objects, NAT,
// system) are implemented as inherent methods in separate files to keep
// this module focused on transport mechanics.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{self, Domain, TOKEN_HEADER};
use crate::error::{Error, preview};
use crate::models::ApiResponse;
use crate::transport::TransportConfig;

const PLATFORM_PREFIX: &str = "/api/fmc_platform/v1";
const CONFIG_PREFIX: &str = "/api/fmc_config/v1/domain";

/// Authenticated client for one FMC domain.
///
/// Built by [`FmcClient::connect`], which performs the token exchange once.
/// The token rides along as a default header on every request afterwards.
#[derive(Debug)]
pub struct FmcClient {
    http: reqwest::Client,
    base_url: Url,
    domain: Domain,
}

impl FmcClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Exchange credentials for a token and pick the working domain.
    ///
    /// `host` is either a bare hostname (HTTPS implied) or a full base URL.
    pub async fn connect(
        host: &str,
        username: &str,
        password: &SecretString,
        domain: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = normalize_base_url(host)?;
        let auth_http = transport.build_client(HeaderMap::new())?;

        let grant = auth::generate_token(&auth_http, &base_url, username, password).await?;
        let domain = grant.select_domain(domain)?.clone();
        debug!(domain = %domain.name, uuid = %domain.uuid, "session established");

        Self::with_token(base_url, &grant.token, domain, transport)
    }

    /// Build a client around an already-issued token.
    pub fn with_token(
        base_url: Url,
        token: &SecretString,
        domain: Domain,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut value =
            HeaderValue::from_str(token.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(TOKEN_HEADER), value);

        let http = transport.build_client(headers)?;
        Ok(Self {
            http,
            base_url,
            domain,
        })
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The domain every config request is scoped to.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/api/fmc_platform/v1/{path}`
    pub(crate) fn platform_url(&self, path: &str) -> Result<Url, Error> {
        endpoint(&self.base_url, &format!("{PLATFORM_PREFIX}/{path}"))
    }

    /// `{base}/api/fmc_config/v1/domain/{uuid}/{path}`
    pub(crate) fn config_url(&self, path: &str) -> Result<Url, Error> {
        endpoint(
            &self.base_url,
            &format!("{CONFIG_PREFIX}/{}/{path}", self.domain.uuid),
        )
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET and decode a JSON body; non-2xx becomes [`Error::Api`].
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let mut builder = self.http.get(url);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        let resp = builder.send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    preview(&body)
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    /// POST a JSON body and hand back status + body whatever the status.
    pub(crate) async fn post(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<ApiResponse, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        let response = ApiResponse::read(resp).await?;
        debug!(status = response.status, "POST complete");
        Ok(response)
    }
}

/// Accept `fmc.example.com`, `fmc.example.com:8443` or a full URL.
///
/// Any path on the input is dropped; FMC serves its API from the root.
pub fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let raw = raw.trim();
    let mut url = if raw.contains("://") {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("https://{raw}"))?
    };
    url.set_path("");
    url.set_query(None);
    Ok(url)
}

/// Append an absolute API path to the base URL.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, Error> {
    let base = base.as_str().trim_end_matches('/');
    Ok(Url::parse(&format!("{base}{path}"))?)
}
