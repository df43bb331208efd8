// FMC REST wire types
//
// Listings come back as `{ items: [...], paging: {...} }`. Collections with
// nothing in them omit `items` entirely, so it defaults to empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paging block attached to every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    /// Total number of items in the collection, across all pages.
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
}

/// One page of a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub paging: Paging,
}

/// Minimal shape shared by every FMC object in an unexpanded listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// `GET /api/fmc_platform/v1/info/serverversion` item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerVersion {
    pub server_version: String,
    #[serde(default)]
    pub geo_version: Option<String>,
    #[serde(default)]
    pub vdb_version: Option<String>,
    #[serde(default)]
    pub sru_version: Option<String>,
}

/// Outcome of a write: the status code and whatever the controller said.
///
/// Writes never turn a non-2xx status into an error; callers report the
/// pair as-is. Bodies that aren't JSON are kept as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Value>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consume a `reqwest::Response`, parsing the body as JSON when possible.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, crate::Error> {
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(Self { status, body })
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Value::String(s) => write!(f, "{}: {s}", self.status),
            other => write!(f, "{}: {other}", self.status),
        }
    }
}
