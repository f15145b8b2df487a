//! Utility functions used across the application.
//!
//! - [`probe`] - JavaScript probe marker detection and target encoding

pub mod probe;
