//! Remote category list

use crate::api::{ApiClient, Endpoints};
use crate::error::Result;

/// Category slugs fetched from the category-list endpoint
#[derive(Debug)]
pub struct CategoryStore {
    api: ApiClient,
    endpoints: Endpoints,
    categories: Vec<String>,
    is_loading: bool,
    error: Option<String>,
}

impl CategoryStore {
    pub fn new(api: ApiClient, endpoints: Endpoints) -> Self {
        Self {
            api,
            endpoints,
            categories: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the stored list with the server's; on failure the previous
    /// list is kept and the message recorded.
    pub async fn fetch_categories(&mut self) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let result = self
            .api
            .get::<Vec<String>>(&self.endpoints.category_list())
            .await;
        self.is_loading = false;

        match result {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "Fetched categories");
                self.categories = categories;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching categories: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
