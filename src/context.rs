//! Application context
//!
//! [`AppContext`] is built once at startup and owns every piece of
//! process-wide state over one key-value store: the shared session, the
//! category color map and the HTTP client. Stores that need those are handed
//! out from here rather than reached through globals.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{build_http_client, ApiClient, Endpoints};
use crate::catalog::{CategoryColors, CategoryStore, ProductStore};
use crate::config::Config;
use crate::error::Result;
use crate::session::{SessionManager, SharedSession};
use crate::storage::{KeyValueStore, SledStore};

/// Owned handles to the session, color map and API client
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Config,
    endpoints: Endpoints,
    api: ApiClient,
    session: SessionManager,
    colors: CategoryColors,
}

impl AppContext {
    /// Build a context over `store` and restore any persisted session
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let http = build_http_client(Duration::from_secs(config.api.timeout_seconds))?;
        let endpoints = Endpoints::new(config.api.base_url.clone());
        let shared = SharedSession::new();

        let api = ApiClient::new(http.clone(), shared.clone());
        let session = SessionManager::new(http, endpoints.clone(), Arc::clone(&store), shared);
        session.restore_session();
        let colors = CategoryColors::new(Arc::clone(&store));

        Ok(Self {
            config,
            endpoints,
            api,
            session,
            colors,
        })
    }

    /// Build a context over the on-disk store named by `config`
    pub fn open(config: Config) -> Result<Self> {
        let store = match &config.storage.path {
            Some(path) => SledStore::open(path)?,
            None => SledStore::open_default()?,
        };
        Self::new(config, Arc::new(store))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn product_store(&self) -> ProductStore {
        ProductStore::new(self.api.clone(), self.endpoints.clone())
    }

    pub fn category_store(&self) -> CategoryStore {
        CategoryStore::new(self.api.clone(), self.endpoints.clone())
    }

    /// Handle to the single color map; every handle sees every assignment
    pub fn category_colors(&self) -> CategoryColors {
        self.colors.clone()
    }
}
