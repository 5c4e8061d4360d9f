//! Product catalog state
//!
//! - [`product`]    -- product records, drafts, draft validation and stock status
//! - [`products`]   -- [`ProductStore`] and product-list URL building
//! - [`categories`] -- [`CategoryStore`], the remote category list
//! - [`colors`]     -- [`CategoryColors`], persistent per-category badge colors
//! - [`pagination`] -- page/skip arithmetic

pub mod categories;
pub mod colors;
pub mod pagination;
pub mod product;
pub mod products;

pub use categories::CategoryStore;
pub use colors::{CategoryColors, CATEGORY_COLORS, DEFAULT_CATEGORY_COLOR};
pub use product::{Product, ProductDraft, ProductsResponse, StockStatus};
pub use products::{build_products_url, ProductQuery, ProductStore, SortOrder, ALL_CATEGORIES};
