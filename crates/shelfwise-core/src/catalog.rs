//! In-memory product catalog service.
//!
//! List, search, add, and delete over an inventory seeded with sample
//! data, plus the simulated description generator the legacy dashboard
//! offered when adding a product. No persistence; the catalog lives for
//! the process.

use tracing::info;
use uuid::Uuid;

use shelfwise_types::catalog::{NewProduct, Product, ProductStatus};
use shelfwise_types::error::CatalogError;

/// Markers the description generator embeds; products whose description
/// carries one are flagged as AI-generated.
const GENERATED_MARKERS: [&str; 2] = ["Advanced", "Premium"];

/// In-memory product inventory.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the sample inventory.
    pub fn with_sample_inventory() -> Self {
        let seed = [
            (
                "Premium Wireless Headphones",
                "Electronics",
                299.99,
                45,
                "High-quality wireless headphones with noise cancellation and premium sound quality.",
            ),
            (
                "Smart Fitness Tracker",
                "Electronics",
                199.99,
                8,
                "Advanced fitness tracker with heart rate monitoring and GPS capabilities.",
            ),
            (
                "Organic Cotton T-Shirt",
                "Clothing",
                39.99,
                0,
                "Comfortable organic cotton t-shirt in various colors and sizes.",
            ),
            (
                "Smart Home Security Camera",
                "Electronics",
                149.99,
                23,
                "WiFi-enabled security camera with night vision and mobile app integration.",
            ),
        ];

        let products = seed
            .into_iter()
            .map(|(name, category, price, stock, description)| Product {
                id: Uuid::now_v7(),
                name: name.to_string(),
                category: category.to_string(),
                price,
                stock,
                description: description.to_string(),
                status: ProductStatus::from_stock(stock),
                ai_generated: false,
                created_at: chrono::Utc::now(),
            })
            .collect();

        Self { products }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    pub fn get(&self, id: &Uuid) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products whose name or category contains the term
    /// (case-insensitive), optionally restricted to an exact category.
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// Add a product. Name and category must be non-empty and the price
    /// positive; stock status is derived from the unit count.
    pub fn add(&mut self, new: NewProduct) -> Result<&Product, CatalogError> {
        if new.name.trim().is_empty() || new.category.trim().is_empty() {
            return Err(CatalogError::InvalidProduct(
                "name and category are required".to_string(),
            ));
        }
        if new.price <= 0.0 {
            return Err(CatalogError::InvalidProduct(
                "price must be positive".to_string(),
            ));
        }

        let ai_generated = GENERATED_MARKERS
            .iter()
            .any(|marker| new.description.contains(marker));
        let product = Product {
            id: Uuid::now_v7(),
            name: new.name,
            category: new.category,
            price: new.price,
            stock: new.stock,
            description: new.description,
            status: ProductStatus::from_stock(new.stock),
            ai_generated,
            created_at: chrono::Utc::now(),
        };

        info!(name = %product.name, category = %product.category, "product added");
        self.products.push(product);
        Ok(self.products.last().expect("just pushed"))
    }

    /// Remove a product by id.
    pub fn delete(&mut self, id: &Uuid) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or(CatalogError::NotFound)?;
        let product = self.products.remove(index);
        info!(name = %product.name, "product deleted");
        Ok(product)
    }
}

/// Generate a marketing description for a product, keyed by category.
///
/// The legacy dashboard's simulated AI description feature: a
/// per-category template with the lower-cased product name substituted,
/// and a generic fallback for categories without a template.
pub fn generate_description(name: &str, category: &str) -> String {
    let name = name.to_lowercase();
    match category {
        "Electronics" => format!(
            "Advanced {name} featuring cutting-edge technology, premium build quality, and innovative design. Perfect for tech enthusiasts seeking reliable performance and modern functionality."
        ),
        "Clothing" => format!(
            "Stylish {name} crafted from high-quality materials with attention to comfort and durability. Available in multiple sizes and colors to suit various preferences."
        ),
        "Home & Garden" => format!(
            "Premium {name} designed to enhance your living space with functionality and aesthetic appeal. Built to last with weather-resistant materials."
        ),
        "Sports" => format!(
            "Professional-grade {name} engineered for performance and comfort. Ideal for athletes and fitness enthusiasts of all levels."
        ),
        "Books" => format!(
            "Engaging {name} offering valuable insights and knowledge. A must-read for anyone interested in expanding their understanding of the subject."
        ),
        _ => format!(
            "High-quality {name} designed with attention to detail and customer satisfaction in mind."
        ),
    }
}
