//! Domain layer containing business entities and decision logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`classifier`] - User-Agent based bot detection
//! - [`resolution`] - Per-request resolution outcomes
//!
//! # Request Flow
//!
//! 1. HTTP handler receives `GET /{id}`
//! 2. [`crate::application::services::LinkService::resolve`] looks up the entry
//! 3. [`classifier::classify`] decides between bot and human
//! 4. Humans without the probe marker get the probe page first

pub mod classifier;
pub mod entities;
pub mod repositories;
pub mod resolution;
