use crate::error::{CatalogError, Result};
use crate::storage::KeyValueStore;
use directories::ProjectDirs;
use sled::Db;
use std::path::{Path, PathBuf};

/// Durable key-value store backed by an embedded `sled` database
///
/// # Examples
///
/// ```
/// use catalog_admin::storage::{KeyValueStore, SledStore};
///
/// # fn main() -> catalog_admin::error::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let store = SledStore::open(dir.path().join("store"))?;
/// store.set("auth", "{}")?;
/// assert_eq!(store.get("auth")?.as_deref(), Some("{}"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SledStore {
    db: Db,
    path: PathBuf,
}

impl SledStore {
    /// Open or create a store at `path`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Persistence` if the database cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CatalogError::Persistence(format!("Failed to create store directory: {}", e))
            })?;
        }

        let db = sled::open(&path)
            .map_err(|e| CatalogError::Persistence(format!("Failed to open store: {}", e)))?;
        tracing::debug!(path = %path.display(), "Opened key-value store");

        Ok(Self { db, path })
    }

    /// Open the store in the platform data directory
    pub fn open_default() -> Result<Self> {
        Self::open(default_store_path()?)
    }

    /// Location of the database on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default on-disk location: `<data dir>/catalog-admin/store`
pub fn default_store_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "catalog-admin", "catalog-admin").ok_or_else(|| {
        CatalogError::Persistence("Could not determine data directory".to_string())
    })?;
    Ok(proj_dirs.data_dir().join("store"))
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self
            .db
            .get(key.as_bytes())
            .map_err(|e| CatalogError::Persistence(format!("Get failed: {}", e)))?
        {
            Some(bytes) => {
                let value = String::from_utf8(bytes.to_vec()).map_err(|e| {
                    CatalogError::Persistence(format!("Stored value is not UTF-8: {}", e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| CatalogError::Persistence(format!("Insert failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| CatalogError::Persistence(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db
            .remove(key.as_bytes())
            .map_err(|e| CatalogError::Persistence(format!("Remove failed: {}", e)))?;

        self.db
            .flush()
            .map_err(|e| CatalogError::Persistence(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}
