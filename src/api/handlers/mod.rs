//! HTTP request handlers for the public endpoints.

pub mod links;
pub mod redirect;

pub use links::update_link_handler;
pub use redirect::redirect_handler;
