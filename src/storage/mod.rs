//! Persistent key-value storage
//!
//! Session and category-color state is persisted as opaque JSON text under a
//! small set of fixed keys. The [`KeyValueStore`] trait is the seam between
//! that state and the backing medium:
//!
//! - [`SledStore`] -- durable store backed by an embedded `sled` database.
//! - [`MemoryStore`] -- in-process store for tests and ephemeral runs.

use crate::error::Result;

pub mod memory;
pub mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Key under which the serialized session blob is stored.
pub const AUTH_KEY: &str = "auth";

/// Key under which the serialized category-color map is stored.
pub const CATEGORY_COLORS_KEY: &str = "category-colors";

/// Synchronous string-keyed storage.
///
/// Every write replaces the whole value for the key; implementations must
/// never expose a partially written value.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
