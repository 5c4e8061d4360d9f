//! Authenticated HTTP client

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::session::SharedSession;

/// Build the shared `reqwest` client with the configured timeout
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("catalog-admin/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(CatalogError::Http)?;
    Ok(client)
}

/// HTTP client that authenticates with the current session's access token
///
/// Every request carries `Content-Type: application/json`, plus
/// `Authorization: Bearer <token>` whenever the shared session holds one.
/// Non-2xx responses become [`CatalogError::Request`] carrying the status
/// text.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    session: SharedSession,
}

impl ApiClient {
    pub fn new(http: Client, session: SharedSession) -> Self {
        Self { http, session }
    }

    /// Headers for the next request, reflecting the session at call time
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.access_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => tracing::warn!("Access token is not a valid header value: {}", e),
            }
        }

        headers
    }

    /// Send a request and decode the JSON response
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Request`] on transport failure, non-2xx
    /// status, or a body that does not decode as `T`.
    pub async fn request<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = %method, url = %url, "API request");

        let mut builder = self.http.request(method.clone(), url).headers(self.auth_headers());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("API request to {} failed: {}", url, e);
            CatalogError::Request(format!("API request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown Status");
            tracing::error!(status = %status, method = %method, url = %url, "API request rejected");
            return Err(CatalogError::Request(format!("API request failed: {}", status_text)).into());
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", url, e);
            CatalogError::Request(format!("Failed to parse API response: {}", e)).into()
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, url, None).await
    }

    pub async fn post<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, url, Some(body)).await
    }

    pub async fn put<T, B>(&self, url: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, url, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, url, None).await
    }
}
