//! Session and user records
//!
//! These structs double as the schema of the persisted `auth` blob. Field
//! names are camelCase on the wire so blobs stay compatible with the web
//! dashboard that shares the same remote API.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Authenticated user as returned by the login endpoint
///
/// Extra fields in the login response (tokens, profile details) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Remote user identifier
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// Avatar image URL
    pub image: String,
}

impl User {
    /// `"<first> <last>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The authenticated user's identity and tokens
///
/// The session is authenticated while it holds a non-empty `access_token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Returns `true` when a non-empty access token is held
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Body of a successful login response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            user: Some(response.user),
            access_token: Some(response.access_token),
            refresh_token: response.refresh_token,
        }
    }
}

/// Session state shared between the session manager (sole writer) and the
/// API client (reader).
#[derive(Debug, Clone, Default)]
pub struct SharedSession(Arc<RwLock<Session>>);

impl SharedSession {
    /// Create an empty, unauthenticated handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access; a poisoned lock still yields the last written state.
    pub fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current access token; an empty token counts as none
    pub fn access_token(&self) -> Option<String> {
        self.read()
            .access_token
            .clone()
            .filter(|token| !token.is_empty())
    }

    /// Snapshot of the whole session
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }
}
