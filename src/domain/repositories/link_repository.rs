//! Repository trait for the identifier-to-link registry.

use crate::domain::entities::LinkEntry;
use async_trait::async_trait;

/// Registry interface mapping opaque identifiers to [`LinkEntry`] values.
///
/// Implementations must allow many concurrent readers and give writers
/// exclusive access. An entry is always observed either fully before or
/// fully after a concurrent [`put`](LinkRepository::put).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns a copy of the entry stored under `id`, if any.
    async fn get(&self, id: &str) -> Option<LinkEntry>;

    /// Stores `entry` under `id`, replacing any previous entry entirely.
    async fn put(&self, id: &str, entry: LinkEntry);
}
