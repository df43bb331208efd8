// ── Per-session object cache ──
//
// One resolved `NameIndex` per collection type, filled on first use and
// kept until the session is dropped. Owned by the session, so separate
// sessions never see each other's mappings.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{CollectionType, NameIndex};

#[derive(Debug, Default)]
pub struct ObjectCache {
    indexes: HashMap<CollectionType, Arc<NameIndex>>,
}

impl ObjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached index for `collection`, if it was resolved already.
    pub fn get(&self, collection: CollectionType) -> Option<Arc<NameIndex>> {
        self.indexes.get(&collection).map(Arc::clone)
    }

    /// Store a freshly resolved index and hand back a shared handle to it.
    pub fn insert(&mut self, collection: CollectionType, index: NameIndex) -> Arc<NameIndex> {
        let index = Arc::new(index);
        self.indexes.insert(collection, Arc::clone(&index));
        index
    }

    pub fn contains(&self, collection: CollectionType) -> bool {
        self.indexes.contains_key(&collection)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}
