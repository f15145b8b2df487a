//! HTTP layer translating requests into registry operations.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request deserialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
