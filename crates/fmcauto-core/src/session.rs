// ── Session ──
//
// One authenticated conversation with a controller: the token exchange
// happens in `establish`, and the session then owns the client and the
// name→id cache for the rest of the invocation.

use std::sync::Arc;

use tracing::{debug, info};

use fmcauto_api::{Domain, FmcClient};

use crate::config::SessionConfig;
use crate::error::CoreError;
use crate::model::{CollectionType, NameIndex};
use crate::resolver;
use crate::store::ObjectCache;

/// An authenticated FMC session scoped to one domain.
#[derive(Debug)]
pub struct Session {
    client: FmcClient,
    cache: ObjectCache,
}

impl Session {
    /// Exchange credentials for a token and select the working domain.
    ///
    /// The token is fetched exactly once and is assumed valid for the
    /// lifetime of the session.
    pub async fn establish(config: &SessionConfig) -> Result<Self, CoreError> {
        debug!(host = %config.host, user = %config.username, "authenticating");
        let client = FmcClient::connect(
            &config.host,
            &config.username,
            &config.password,
            &config.domain,
            &config.transport(),
        )
        .await?;
        info!(domain = %client.domain().name, "authenticated");
        Ok(Self::from_client(client))
    }

    /// Wrap a client that is already authenticated.
    pub fn from_client(client: FmcClient) -> Self {
        Self {
            client,
            cache: ObjectCache::new(),
        }
    }

    pub fn client(&self) -> &FmcClient {
        &self.client
    }

    pub fn domain(&self) -> &Domain {
        self.client.domain()
    }

    /// Collections resolved so far in this session.
    pub fn cache(&self) -> &ObjectCache {
        &self.cache
    }

    // ── Resolution ───────────────────────────────────────────────────

    /// Name index for `collection`, fetched once per session.
    pub async fn collection(
        &mut self,
        collection: CollectionType,
    ) -> Result<Arc<NameIndex>, CoreError> {
        if let Some(index) = self.cache.get(collection) {
            debug!(%collection, "using cached index");
            return Ok(index);
        }
        let index = resolver::resolve_collection(&self.client, collection).await?;
        debug!(%collection, entries = index.len(), "resolved collection");
        Ok(self.cache.insert(collection, index))
    }

    /// Id of the object named `name` in `collection`.
    ///
    /// A missing name or an empty collection is an error; callers that
    /// want to recover must match on [`CoreError::is_resolution`].
    pub async fn object_id(
        &mut self,
        collection: CollectionType,
        name: &str,
    ) -> Result<String, CoreError> {
        let index = self.collection(collection).await?;
        index
            .get(name)
            .map(str::to_owned)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: collection.entity_label().into(),
                name: name.to_owned(),
            })
    }

    /// Id of the NAT policy named `name`.
    pub async fn policy_id(&self, name: &str) -> Result<String, CoreError> {
        resolver::resolve_policy(&self.client, name).await
    }
}
