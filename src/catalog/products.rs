//! Product list state and CRUD against the remote API
//!
//! [`ProductStore`] keeps the most recently fetched page of products along
//! with a loading flag and the last error message. Every operation clears
//! the error first, records it on failure, and keeps the previous list when
//! a request fails.
//!
//! Requests are not sequenced: if two fetches overlap, whichever resolves
//! last determines the stored list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, Endpoints};
use crate::catalog::product::{Product, ProductDraft, ProductsResponse};
use crate::error::Result;

/// Category filter value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all-categories";

/// Sort direction for the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Filter, sort and paging parameters for a product list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub limit: u32,
    pub skip: u32,
    /// Free-text search; takes precedence over `category`
    pub search: String,
    /// Category slug, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Field to sort by; blank means server order
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            limit: 30,
            skip: 0,
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_by: String::new(),
            order: SortOrder::Asc,
        }
    }
}

/// Build the product list URL for `query`
///
/// A non-blank search selects the search endpoint; otherwise a specific
/// category selects the category endpoint; otherwise the plain list.
///
/// # Examples
///
/// ```
/// use catalog_admin::api::Endpoints;
/// use catalog_admin::catalog::{build_products_url, ProductQuery};
///
/// let endpoints = Endpoints::new("https://dummyjson.com");
/// let query = ProductQuery {
///     limit: 9,
///     category: "laptops".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(
///     build_products_url(&endpoints, &query),
///     "https://dummyjson.com/products/category/laptops?limit=9&skip=0"
/// );
/// ```
pub fn build_products_url(endpoints: &Endpoints, query: &ProductQuery) -> String {
    let mut params = vec![
        format!("limit={}", query.limit),
        format!("skip={}", query.skip),
    ];

    if !query.sort_by.trim().is_empty() {
        params.push(format!("sortBy={}", query.sort_by));
        params.push(format!("order={}", query.order));
    }

    let query_string = params.join("&");

    if !query.search.trim().is_empty() {
        return format!(
            "{}?q={}&{}",
            endpoints.search(),
            encode_component(&query.search),
            query_string
        );
    }

    if !query.category.is_empty() && query.category != ALL_CATEGORIES {
        return format!("{}?{}", endpoints.category(&query.category), query_string);
    }

    format!("{}?{}", endpoints.products(), query_string)
}

/// Percent-encode a query value, spaces as `%20`
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Product list state backed by the remote API
#[derive(Debug)]
pub struct ProductStore {
    api: ApiClient,
    endpoints: Endpoints,
    products: Vec<Product>,
    total: u64,
    is_loading: bool,
    error: Option<String>,
}

impl ProductStore {
    pub fn new(api: ApiClient, endpoints: Endpoints) -> Self {
        Self {
            api,
            endpoints,
            products: Vec::new(),
            total: 0,
            is_loading: false,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total matching products on the server, not just the loaded page
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed operation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn get_product_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Fetch one page of products, replacing the stored list and total
    pub async fn fetch_products(&mut self, query: &ProductQuery) -> Result<()> {
        self.begin();
        let url = build_products_url(&self.endpoints, query);
        let result = self.api.get::<ProductsResponse>(&url).await;
        self.is_loading = false;

        match result {
            Ok(data) => {
                tracing::debug!(count = data.products.len(), total = data.total, "Fetched products");
                self.products = data.products;
                self.total = data.total;
                Ok(())
            }
            Err(e) => Err(self.record_error(e, "Error fetching products")),
        }
    }

    /// Fetch one product, replacing its stored copy or appending it
    pub async fn fetch_single_product(&mut self, id: u64) -> Result<Product> {
        self.begin();
        let result = self.api.get::<Product>(&self.endpoints.by_id(id)).await;
        self.is_loading = false;

        match result {
            Ok(product) => {
                match self.products.iter_mut().find(|p| p.id == id) {
                    Some(existing) => *existing = product.clone(),
                    None => self.products.push(product.clone()),
                }
                Ok(product)
            }
            Err(e) => Err(self.record_error(e, "Error fetching product")),
        }
    }

    /// Create a product; the result is prepended and `total` incremented
    pub async fn add_product(&mut self, draft: &ProductDraft) -> Result<Product> {
        self.begin();
        if let Err(e) = draft.validate() {
            self.is_loading = false;
            return Err(self.record_error(e, "Error adding product"));
        }

        let result = self.api.post::<Product, _>(&self.endpoints.add(), draft).await;
        self.is_loading = false;

        match result {
            Ok(product) => {
                tracing::info!(id = product.id, title = %product.title, "Added product");
                self.products.insert(0, product.clone());
                self.total += 1;
                Ok(product)
            }
            Err(e) => Err(self.record_error(e, "Error adding product")),
        }
    }

    /// Partially update a product; the stored copy is replaced when present
    pub async fn update_product(&mut self, id: u64, updates: &ProductDraft) -> Result<Product> {
        self.begin();
        if let Err(e) = updates.validate() {
            self.is_loading = false;
            return Err(self.record_error(e, "Error updating product"));
        }

        let result = self
            .api
            .put::<Product, _>(&self.endpoints.by_id(id), updates)
            .await;
        self.is_loading = false;

        match result {
            Ok(product) => {
                tracing::info!(id, "Updated product");
                if let Some(existing) = self.products.iter_mut().find(|p| p.id == id) {
                    *existing = product.clone();
                }
                Ok(product)
            }
            Err(e) => Err(self.record_error(e, "Error updating product")),
        }
    }

    /// Delete a product; the stored copy is removed and `total` decremented
    /// when present
    pub async fn delete_product(&mut self, id: u64) -> Result<()> {
        self.begin();
        let result = self
            .api
            .delete::<serde_json::Value>(&self.endpoints.by_id(id))
            .await;
        self.is_loading = false;

        match result {
            Ok(_) => {
                tracing::info!(id, "Deleted product");
                if let Some(index) = self.products.iter().position(|p| p.id == id) {
                    self.products.remove(index);
                    self.total = self.total.saturating_sub(1);
                }
                Ok(())
            }
            Err(e) => Err(self.record_error(e, "Error deleting product")),
        }
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn record_error(&mut self, err: anyhow::Error, context: &str) -> anyhow::Error {
        tracing::error!("{}: {}", context, err);
        self.error = Some(err.to_string());
        err
    }
}
