// ── Object collections and name indexes ──

use std::collections::HashMap;

use serde::Serialize;
use strum::{AsRefStr, Display};
use tracing::warn;

use fmcauto_api::ObjectSummary;

/// Object collections that names can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionType {
    Hosts,
    Networks,
    InterfaceObjects,
}

impl CollectionType {
    /// Human label used in "not found" messages.
    pub fn entity_label(self) -> &'static str {
        match self {
            Self::Hosts => "host",
            Self::Networks => "network",
            Self::InterfaceObjects => "interface object",
        }
    }
}

/// Name → identifier mapping for one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameIndex {
    ids: HashMap<String, String>,
}

impl NameIndex {
    /// Index a full listing. Duplicate names keep the last id seen.
    pub fn from_objects(
        collection: CollectionType,
        objects: impl IntoIterator<Item = ObjectSummary>,
    ) -> Self {
        let mut ids = HashMap::new();
        for ObjectSummary { id, name, .. } in objects {
            if let Some(previous) = ids.insert(name.clone(), id) {
                warn!(
                    %collection,
                    %name,
                    %previous,
                    "duplicate object name upstream, keeping the last id"
                );
            }
        }
        Self { ids }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
