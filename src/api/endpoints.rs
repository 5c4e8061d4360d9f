//! Remote API endpoint URLs

use serde::{Deserialize, Serialize};

/// Endpoint URLs derived from the API base URL
///
/// # Examples
///
/// ```
/// use catalog_admin::api::Endpoints;
///
/// let endpoints = Endpoints::new("https://dummyjson.com/");
/// assert_eq!(endpoints.login(), "https://dummyjson.com/auth/login");
/// assert_eq!(endpoints.by_id(7), "https://dummyjson.com/products/7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Trailing slashes on `base` are ignored
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    pub fn products(&self) -> String {
        format!("{}/products", self.base)
    }

    pub fn search(&self) -> String {
        format!("{}/products/search", self.base)
    }

    pub fn category(&self, category: &str) -> String {
        format!("{}/products/category/{}", self.base, category)
    }

    pub fn by_id(&self, id: u64) -> String {
        format!("{}/products/{}", self.base, id)
    }

    pub fn add(&self) -> String {
        format!("{}/products/add", self.base)
    }

    pub fn category_list(&self) -> String {
        format!("{}/products/category-list", self.base)
    }
}
