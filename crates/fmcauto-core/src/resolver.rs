// ── Identifier resolution ──
//
// Turns names into server-assigned ids. Stateless: every call goes to the
// controller. The session layers its `ObjectCache` on top.

use tracing::debug;

use fmcauto_api::FmcClient;

use crate::error::CoreError;
use crate::model::{CollectionType, NameIndex};

/// Fetch a whole collection and index it by name.
///
/// Reads the total from a one-item page, then asks for that many items in
/// a single request. Collections are assumed small enough for one page;
/// an empty collection is an error, never an empty index.
pub async fn resolve_collection(
    client: &FmcClient,
    collection: CollectionType,
) -> Result<NameIndex, CoreError> {
    let probe = client.list_objects(collection.as_ref(), 1).await?;
    let count = probe.paging.count;
    debug!(%collection, count, "collection size");

    if count == 0 {
        return Err(CoreError::CollectionEmpty {
            collection: collection.to_string(),
        });
    }

    let page = client.list_objects(collection.as_ref(), count).await?;
    if page.items.is_empty() {
        return Err(CoreError::CollectionEmpty {
            collection: collection.to_string(),
        });
    }

    Ok(NameIndex::from_objects(collection, page.items))
}

/// Find a NAT policy id by name. The first match in listing order wins.
pub async fn resolve_policy(client: &FmcClient, policy_name: &str) -> Result<String, CoreError> {
    client
        .list_nat_policy_summaries()
        .await?
        .into_iter()
        .find(|p| p.name == policy_name)
        .map(|p| p.id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "NAT policy".into(),
            name: policy_name.to_owned(),
        })
}
