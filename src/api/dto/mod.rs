//! Data Transfer Objects for API requests.
//!
//! DTOs use Serde for JSON deserialization and convert into domain entities.

pub mod update_link;
