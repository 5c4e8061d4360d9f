//! catalog-admin - admin client library for an e-commerce product catalog
//!
//! This library talks to a catalog REST API on behalf of an administrator:
//! it logs in and keeps the session across runs, lists and edits products,
//! and assigns each product category a stable badge color.
//!
//! # Architecture
//!
//! - `session`: login/logout and session persistence
//! - `api`: endpoint URLs and the bearer-authenticated HTTP client
//! - `catalog`: product and category stores, badge colors, paging
//! - `storage`: key-value store trait with sled and in-memory backends
//! - `context`: the application context that owns all of the above
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use catalog_admin::{AppContext, Config};
//! use catalog_admin::catalog::ProductQuery;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let ctx = AppContext::open(config)?;
//!     if !ctx.session().is_authenticated() {
//!         ctx.session().login("emilys", "emilyspass").await?;
//!     }
//!
//!     let mut products = ctx.product_store();
//!     products.fetch_products(&ProductQuery::default()).await?;
//!     println!("{} products", products.total());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use context::AppContext;
pub use error::{CatalogError, Result};
pub use session::{Session, SessionManager, User};
