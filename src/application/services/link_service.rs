//! Identifier resolution and link update service.

use std::sync::Arc;

use crate::domain::classifier::{Visitor, classify, matched_signature};
use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkRepository;
use crate::domain::resolution::Resolution;
use crate::error::AppError;
use tracing::{debug, info};

/// Service resolving identifiers to redirect decisions and storing updates.
///
/// Holds no per-client state: the probe round-trip relies entirely on the
/// client repeating the request with the marker set.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Decides what to serve for `id`.
    ///
    /// # Request Flow
    ///
    /// 1. Look up the entry; a missing entry is [`AppError::NotFound`]
    /// 2. Classify the User-Agent; bots are sent to `bot` whatever the marker
    /// 3. Humans without the probe marker get [`Resolution::ServeProbe`]
    /// 4. Humans with the marker are sent to `real`
    ///
    /// A missing User-Agent is classified the same as an empty one.
    pub async fn resolve(
        &self,
        id: &str,
        user_agent: Option<&str>,
        probe_completed: bool,
    ) -> Result<Resolution, AppError> {
        let entry = self
            .link_repository
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(id))?;

        let user_agent = user_agent.unwrap_or_default();

        match classify(user_agent) {
            Visitor::Bot => {
                debug!(
                    %id,
                    signature = matched_signature(user_agent).unwrap_or_default(),
                    "Bot visitor"
                );
                Ok(Resolution::RedirectTo(entry.bot))
            }
            Visitor::Human if !probe_completed => {
                debug!(%id, "Human visitor, serving probe");
                Ok(Resolution::ServeProbe)
            }
            Visitor::Human => {
                debug!(%id, "Human visitor passed probe");
                Ok(Resolution::RedirectTo(entry.real))
            }
        }
    }

    /// Registers or fully replaces the entry stored under `id`.
    pub async fn update(&self, id: &str, entry: LinkEntry) -> Result<(), AppError> {
        self.link_repository.put(id, entry).await;
        info!(%id, "Links updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use mockall::predicate::*;

    const BOT_UA: &str = "Mozilla/5.0 (compatible; Googlebot/2.1)";
    const HUMAN_UA: &str = "Mozilla/5.0 (Macintosh) AppleWebKit Safari";

    fn registered_entry() -> LinkEntry {
        LinkEntry::new("https://a.example", "https://b.example")
    }

    fn service_with_entry() -> LinkService<MockLinkRepository> {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_get()
            .with(eq("x1"))
            .returning(|_| Some(registered_entry()));
        LinkService::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_get().returning(|_| None);
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve("missing", Some(HUMAN_UA), true).await;

        assert!(matches!(result, Err(AppError::NotFound { id }) if id == "missing"));
    }

    #[tokio::test]
    async fn test_resolve_bot_gets_bot_target() {
        let service = service_with_entry();

        let result = service.resolve("x1", Some(BOT_UA), false).await.unwrap();

        assert_eq!(result, Resolution::RedirectTo("https://b.example".into()));
    }

    #[tokio::test]
    async fn test_resolve_bot_with_marker_still_gets_bot_target() {
        let service = service_with_entry();

        let result = service.resolve("x1", Some(BOT_UA), true).await.unwrap();

        assert_eq!(result, Resolution::RedirectTo("https://b.example".into()));
    }

    #[tokio::test]
    async fn test_resolve_human_without_marker_gets_probe() {
        let service = service_with_entry();

        let result = service.resolve("x1", Some(HUMAN_UA), false).await.unwrap();

        assert_eq!(result, Resolution::ServeProbe);
    }

    #[tokio::test]
    async fn test_resolve_human_with_marker_gets_real_target() {
        let service = service_with_entry();

        let result = service.resolve("x1", Some(HUMAN_UA), true).await.unwrap();

        assert_eq!(result, Resolution::RedirectTo("https://a.example".into()));
    }

    #[tokio::test]
    async fn test_resolve_missing_user_agent_is_human() {
        let service = service_with_entry();

        assert_eq!(
            service.resolve("x1", None, false).await.unwrap(),
            Resolution::ServeProbe
        );
        assert_eq!(
            service.resolve("x1", None, true).await.unwrap(),
            Resolution::RedirectTo("https://a.example".into())
        );
    }

    #[tokio::test]
    async fn test_update_writes_full_entry() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_put()
            .with(eq("x1"), eq(registered_entry()))
            .times(1)
            .returning(|_, _| ());
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.update("x1", registered_entry()).await;

        assert!(result.is_ok());
    }
}
