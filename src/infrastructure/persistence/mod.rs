//! Registry implementations.
//!
//! - [`InMemoryLinkRepository`] - Process-local link registry

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
