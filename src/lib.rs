//! # Link Cloaker
//!
//! A crawler-aware redirector built with Axum. Each identifier maps to a
//! pair of destinations: crawlers, link-preview fetchers and HTTP libraries
//! are sent to the *bot* URL, while browsers first receive a JavaScript
//! probe page and are then sent to the *real* URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entries, registry trait, classifier
//! - **Application Layer** ([`application`]) - Resolution and update logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST localhost:8080/update/x1 \
//!     -d '{"real": "https://a.example", "bot": "https://b.example"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! The link registry is process-local and is lost on restart.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::classifier::{Visitor, classify};
    pub use crate::domain::entities::LinkEntry;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::domain::resolution::Resolution;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
