//! Process-local implementation of the link registry.

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory registry guarded by a many-readers/single-writer lock.
///
/// Entries live for the lifetime of the process. Lock guards are never held
/// across an `.await`, so each critical section is a single map operation.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    entries: RwLock<HashMap<String, LinkEntry>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn get(&self, id: &str) -> Option<LinkEntry> {
        self.entries.read().get(id).cloned()
    }

    async fn put(&self, id: &str, entry: LinkEntry) {
        self.entries.write().insert(id.to_owned(), entry);
    }
}
