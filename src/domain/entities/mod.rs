//! Core domain entities.
//!
//! - [`LinkEntry`] - The real/bot destination pair stored per identifier

pub mod link;

pub use link::LinkEntry;
