//! Product catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Stock status derived from the unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl ProductStatus {
    /// Derive the status from a stock level: more than 10 units is in
    /// stock, 1-10 is low, zero is out of stock.
    pub fn from_stock(stock: u32) -> Self {
        if stock > 10 {
            ProductStatus::InStock
        } else if stock > 0 {
            ProductStatus::LowStock
        } else {
            ProductStatus::OutOfStock
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::InStock => write!(f, "In Stock"),
            ProductStatus::LowStock => write!(f, "Low Stock"),
            ProductStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in stock" | "in_stock" => Ok(ProductStatus::InStock),
            "low stock" | "low_stock" => Ok(ProductStatus::LowStock),
            "out of stock" | "out_of_stock" => Ok(ProductStatus::OutOfStock),
            other => Err(format!("invalid product status: '{other}'")),
        }
    }
}

/// A product in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
    pub status: ProductStatus,
    /// Whether the description came from the generated-description path.
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to add a product to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: String,
}
