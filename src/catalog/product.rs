//! Product records exchanged with the remote API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Lowest accepted price
pub const MIN_PRICE: f64 = 0.0;
/// Lowest accepted stock level
pub const MIN_STOCK: i64 = 0;
/// Accepted discount range, in percent
pub const MIN_DISCOUNT: f64 = 0.0;
pub const MAX_DISCOUNT: f64 = 100.0;
/// Smallest allowed minimum order quantity
pub const MIN_ORDER_QUANTITY: i64 = 1;

/// A catalog product
///
/// Only `id` and `title` are required; everything else is defaulted when the
/// API omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Stock level of this product
    ///
    /// `availability_status` wins when the API supplies a recognised value;
    /// otherwise zero stock is out of stock and anything else is in stock.
    pub fn stock_status(&self) -> StockStatus {
        let reported = self
            .availability_status
            .as_deref()
            .map(|status| status.trim().to_lowercase());

        match reported.as_deref() {
            Some("in stock") => StockStatus::InStock,
            Some("low stock") => StockStatus::LowStock,
            Some("out of stock") => StockStatus::OutOfStock,
            _ if self.stock <= MIN_STOCK => StockStatus::OutOfStock,
            _ => StockStatus::InStock,
        }
    }
}

/// Stock filter for the product list; [`StockStatus::All`] matches everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockStatus {
    #[default]
    All,
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::All => "all-stock",
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Returns `true` when `product` passes this filter
    pub fn matches(&self, product: &Product) -> bool {
        *self == StockStatus::All || product.stock_status() == *self
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all-stock" => Ok(StockStatus::All),
            "in-stock" => Ok(StockStatus::InStock),
            "low-stock" => Ok(StockStatus::LowStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(format!(
                "invalid stock status '{}', expected all-stock, in-stock, low-stock or out-of-stock",
                other
            )),
        }
    }
}

/// One page of the product list
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Fields for creating a product or partially updating one
///
/// Unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl ProductDraft {
    /// Check numeric fields against the catalog's validation rules
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            if price.is_nan() || price < MIN_PRICE {
                return Err(invalid(format!("price must be >= {}, got {}", MIN_PRICE, price)));
            }
        }

        if let Some(stock) = self.stock {
            if stock < MIN_STOCK {
                return Err(invalid(format!("stock must be >= {}, got {}", MIN_STOCK, stock)));
            }
        }

        if let Some(discount) = self.discount_percentage {
            if !(MIN_DISCOUNT..=MAX_DISCOUNT).contains(&discount) {
                return Err(invalid(format!(
                    "discountPercentage must be between {} and {}, got {}",
                    MIN_DISCOUNT, MAX_DISCOUNT, discount
                )));
            }
        }

        if let Some(quantity) = self.minimum_order_quantity {
            if quantity < MIN_ORDER_QUANTITY {
                return Err(invalid(format!(
                    "minimumOrderQuantity must be >= {}, got {}",
                    MIN_ORDER_QUANTITY, quantity
                )));
            }
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(invalid("title cannot be empty".to_string()));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> anyhow::Error {
    CatalogError::Validation(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_api_shape() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "availabilityStatus": "Low Stock",
            "minimumOrderQuantity": 24,
            "reviews": []
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "beauty");
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.minimum_order_quantity, Some(24));
        assert_eq!(product.availability_status.as_deref(), Some("Low Stock"));
        assert!(product.images.is_empty());
    }

    fn product_with_stock(stock: i64, status: Option<&str>) -> Product {
        let mut product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Lamp"}"#).unwrap();
        product.stock = stock;
        product.availability_status = status.map(str::to_string);
        product
    }

    #[test]
    fn test_stock_status_prefers_reported_availability() {
        assert_eq!(
            product_with_stock(5, Some("Low Stock")).stock_status(),
            StockStatus::LowStock
        );
        assert_eq!(
            product_with_stock(0, Some("In Stock")).stock_status(),
            StockStatus::InStock
        );
        assert_eq!(
            product_with_stock(40, Some("out of stock")).stock_status(),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn test_stock_status_falls_back_to_stock_level() {
        assert_eq!(product_with_stock(0, None).stock_status(), StockStatus::OutOfStock);
        assert_eq!(
            product_with_stock(3, Some("Backorder")).stock_status(),
            StockStatus::InStock
        );
    }

    #[test]
    fn test_stock_filter_matching() {
        let low = product_with_stock(2, Some("Low Stock"));
        assert!(StockStatus::All.matches(&low));
        assert!(StockStatus::LowStock.matches(&low));
        assert!(!StockStatus::InStock.matches(&low));
        assert!(!StockStatus::OutOfStock.matches(&low));
    }

    #[test]
    fn test_stock_status_parsing() {
        assert_eq!("all-stock".parse::<StockStatus>().unwrap(), StockStatus::All);
        assert_eq!("OUT-OF-STOCK".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert!("plenty".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = ProductDraft {
            title: Some("Lamp".to_string()),
            price: Some(12.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Lamp", "price": 12.5}));
    }

    #[test]
    fn test_empty_draft_is_valid() {
        assert!(ProductDraft::default().validate().is_ok());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let draft = ProductDraft {
            price: Some(-1.0),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_nan_price_is_rejected() {
        let draft = ProductDraft {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_discount_bounds() {
        let mut draft = ProductDraft {
            discount_percentage: Some(100.0),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.discount_percentage = Some(100.5);
        assert!(draft.validate().is_err());

        draft.discount_percentage = Some(-0.1);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_stock_and_order_quantity_minimums() {
        let draft = ProductDraft {
            stock: Some(-3),
            ..Default::default()
        };
        assert!(draft.validate().is_err());

        let draft = ProductDraft {
            minimum_order_quantity: Some(0),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let draft = ProductDraft {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }
}
