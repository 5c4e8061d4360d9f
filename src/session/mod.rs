//! Session management
//!
//! - [`types`]   -- [`User`], [`Session`] and the [`SharedSession`] handle
//! - [`manager`] -- [`SessionManager`]: login, logout, restore and persist

pub mod manager;
pub mod types;

pub use manager::SessionManager;
pub use types::{Session, SharedSession, User};
