//! Authenticated access to the remote catalog REST API
//!
//! - [`endpoints`] -- URL construction from a configurable base
//! - [`client`]    -- [`ApiClient`], which attaches the bearer token of the
//!   shared session to every request

pub mod client;
pub mod endpoints;

pub use client::{build_http_client, ApiClient};
pub use endpoints::Endpoints;
