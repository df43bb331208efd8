// Object endpoints
//
// `GET|POST /api/fmc_config/v1/domain/{domain}/object/{type}` where
// `{type}` is a collection such as `hosts`, `networks` or `interfaceobjects`.

use serde::Serialize;
use tracing::debug;

use crate::client::FmcClient;
use crate::error::Error;
use crate::models::{ApiResponse, ObjectSummary, Page};

impl FmcClient {
    /// One page of an object collection, `limit` items long.
    ///
    /// `GET .../object/{collection}?limit={limit}`
    pub async fn list_objects(
        &self,
        collection: &str,
        limit: u64,
    ) -> Result<Page<ObjectSummary>, Error> {
        let url = self.config_url(&format!("object/{collection}"))?;
        debug!(collection, limit, "listing objects");
        self.get(url, &[("limit", limit.to_string())]).await
    }

    /// Create an object in `collection`.
    ///
    /// `POST .../object/{collection}`
    pub async fn create_object(
        &self,
        collection: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<ApiResponse, Error> {
        let url = self.config_url(&format!("object/{collection}"))?;
        self.post(url, body).await
    }
}
