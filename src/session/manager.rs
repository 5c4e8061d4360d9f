//! Login/logout lifecycle and session persistence
//!
//! The [`SessionManager`] is the only writer of the [`SharedSession`]. It
//! persists the session as one JSON blob under [`AUTH_KEY`] and restores it
//! on startup. Persistence is best-effort: store failures are logged and
//! never returned to the caller.

use std::sync::Arc;

use serde::Serialize;

use crate::api::Endpoints;
use crate::error::{CatalogError, Result};
use crate::session::types::{LoginResponse, Session, SharedSession, User};
use crate::storage::{KeyValueStore, AUTH_KEY};

/// Message returned for any rejected login; carries no server detail.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Owns the authenticated user's identity and tokens.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use catalog_admin::api::Endpoints;
/// use catalog_admin::session::{SessionManager, SharedSession};
/// use catalog_admin::storage::MemoryStore;
///
/// let manager = SessionManager::new(
///     reqwest::Client::new(),
///     Endpoints::new("https://dummyjson.com"),
///     Arc::new(MemoryStore::new()),
///     SharedSession::new(),
/// );
/// manager.restore_session();
/// assert!(!manager.is_authenticated());
/// assert!(manager.user().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SessionManager {
    http: reqwest::Client,
    endpoints: Endpoints,
    store: Arc<dyn KeyValueStore>,
    session: SharedSession,
}

impl SessionManager {
    /// Create a manager around an existing session handle
    pub fn new(
        http: reqwest::Client,
        endpoints: Endpoints,
        store: Arc<dyn KeyValueStore>,
        session: SharedSession,
    ) -> Self {
        Self {
            http,
            endpoints,
            store,
            session,
        }
    }

    /// The handle the API client reads tokens from
    pub fn shared(&self) -> &SharedSession {
        &self.session
    }

    /// Authenticate against the login endpoint
    ///
    /// On success the in-memory session is replaced, persisted, and the user
    /// record returned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Authentication`] on a non-2xx response and
    /// [`CatalogError::Request`] when the request cannot be sent or the body
    /// cannot be decoded. The session is untouched in every error case.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let url = self.endpoints.login();
        tracing::debug!(username = %username, "Logging in");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Login request failed: {}", e);
                CatalogError::Request(format!("Login request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, username = %username, "Login rejected");
            return Err(CatalogError::Authentication(INVALID_CREDENTIALS.to_string()).into());
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse login response: {}", e);
            CatalogError::Request(format!("Failed to parse login response: {}", e))
        })?;

        let user = body.user.clone();
        *self.session.write() = Session::from(body);
        self.persist_session();

        tracing::info!(username = %user.username, "Logged in");
        Ok(user)
    }

    /// Clear the session and its persisted copy. Never fails.
    pub fn logout(&self) {
        *self.session.write() = Session::default();

        if let Err(e) = self.store.remove(AUTH_KEY) {
            tracing::error!("Failed to remove persisted session: {}", e);
        }
        tracing::info!("Logged out");
    }

    /// Load the persisted session, if any
    ///
    /// A missing entry leaves the session empty. A corrupt entry is logged,
    /// removed, and the session cleared; nothing is returned to the caller.
    pub fn restore_session(&self) {
        let stored = match self.store.get(AUTH_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Failed to read persisted session: {}", e);
                return;
            }
        };

        match serde_json::from_str::<Session>(&stored) {
            Ok(session) => {
                tracing::debug!(
                    authenticated = session.is_authenticated(),
                    "Restored session"
                );
                *self.session.write() = session;
            }
            Err(e) => {
                let err = CatalogError::Persistence(format!("corrupt session blob: {}", e));
                tracing::error!("Failed to restore session: {}", err);
                *self.session.write() = Session::default();
                if let Err(e) = self.store.remove(AUTH_KEY) {
                    tracing::error!("Failed to remove corrupt session: {}", e);
                }
            }
        }
    }

    /// Write the current session to the store; failures are logged only.
    pub fn persist_session(&self) {
        let snapshot = self.session.snapshot();
        let result = serde_json::to_string(&snapshot)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(AUTH_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Failed to persist session: {}", e);
        }
    }

    /// `true` iff an access token is held
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.access_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.session.read().refresh_token.clone()
    }

    /// `"<first> <last>"`, or an empty string when logged out
    pub fn user_full_name(&self) -> String {
        self.session
            .read()
            .user
            .as_ref()
            .map(User::full_name)
            .unwrap_or_default()
    }

    /// Fail with [`CatalogError::Authentication`] unless logged in
    pub fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CatalogError::Authentication(
                "Not logged in; run `catalog-admin login` first".to_string(),
            )
            .into())
        }
    }
}
