//! # Product Repository
//!
//! In-memory product lookups and back-office CRUD.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Storefront Search Works                          │
//! │                                                                         │
//! │  User types: "pixel"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match across: name, brand, sku             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ PHN-PIX-009 | Pixel 9        | Google   │ ← MATCH                   │
//! │  │ PHN-PIX-08A | Pixel 8a       | Google   │ ← MATCH                   │
//! │  │ PHN-GAL-S24 | Galaxy S24     | Samsung  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results in catalog order, archived products excluded                  │
//! │                                                                         │
//! │  The whole catalog is a few dozen records; a linear scan is the        │
//! │  entire "index".                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use nova_core::validation::{
    validate_brand, validate_original_price_cents, validate_price_cents, validate_product_name,
    validate_rating_tenths, validate_sku,
};
use nova_core::{Category, CoreError, Product};

/// Repository for product data.
///
/// ## Usage
/// ```rust
/// use nova_catalog::ProductRepository;
///
/// let repo = ProductRepository::new();
/// assert!(repo.search("pixel", 20).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        ProductRepository::default()
    }

    /// Creates a repository over pre-seeded products.
    pub fn with_products(products: Vec<Product>) -> Self {
        ProductRepository { products }
    }

    /// Searches products by name, brand, or SKU.
    ///
    /// ## Behavior
    /// - Case-insensitive substring match
    /// - Archived products are never returned
    /// - Empty query falls back to [`Self::list_active`]
    ///
    /// ## Arguments
    /// * `query` - Search term (can be partial)
    /// * `limit` - Maximum results to return
    pub fn search(&self, query: &str, limit: usize) -> Vec<Product> {
        let query = query.trim();

        debug!(query = %query, limit = %limit, "Searching products");

        if query.is_empty() {
            return self.list_active(limit);
        }

        let needle = query.to_lowercase();
        let hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.sku.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect();

        debug!(count = hits.len(), "Search returned products");
        hits
    }

    /// Lists active products in catalog order (no search filter).
    pub fn list_active(&self, limit: usize) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_active)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Lists every product including archived ones (back-office table).
    pub fn list_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Lists active products in a category (storefront navigation).
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_active && p.category == category)
            .cloned()
            .collect()
    }

    /// Lists active products carrying a genuine markdown (the "Deals" rail).
    pub fn discounted(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_active && p.is_discounted())
            .cloned()
            .collect()
    }

    /// Gets a product by its ID. Archived products are still returned - the
    /// back-office needs them; storefront callers filter on `is_active`.
    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Gets a product by its SKU.
    pub fn get_by_sku(&self, sku: &str) -> Option<Product> {
        self.products.iter().find(|p| p.sku == sku).cloned()
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - the inserted product
    /// * `Err(CatalogError::Duplicate)` - SKU already exists
    /// * `Err(CatalogError::Core)` - a field failed validation
    pub fn insert(&mut self, product: Product) -> CatalogResult<Product> {
        debug!(sku = %product.sku, "Inserting product");

        validate(&product)?;

        if self.products.iter().any(|p| p.sku == product.sku) {
            return Err(CatalogError::duplicate("sku", &product.sku));
        }

        self.products.push(product.clone());
        Ok(product)
    }

    /// Updates an existing product and bumps its `updated_at`.
    ///
    /// ## Returns
    /// * `Ok(Product)` - the stored product after the update
    /// * `Err(CatalogError::NotFound)` - no product with this id
    /// * `Err(CatalogError::Duplicate)` - the new SKU collides with another product
    pub fn update(&mut self, product: Product) -> CatalogResult<Product> {
        debug!(id = %product.id, "Updating product");

        validate(&product)?;

        if self
            .products
            .iter()
            .any(|p| p.sku == product.sku && p.id != product.id)
        {
            return Err(CatalogError::duplicate("sku", &product.sku));
        }

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CatalogError::not_found("Product", &product.id))?;

        *slot = Product {
            updated_at: Utc::now(),
            ..product
        };
        Ok(slot.clone())
    }

    /// Archives or restores a product (soft delete).
    ///
    /// ## Why Soft Delete?
    /// Historical orders still reference the product by id.
    pub fn set_active(&mut self, id: &str, active: bool) -> CatalogResult<()> {
        debug!(id = %id, active = %active, "Setting product active flag");

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        slot.is_active = active;
        slot.updated_at = Utc::now();
        Ok(())
    }

    /// Counts active products.
    pub fn count(&self) -> usize {
        self.products.iter().filter(|p| p.is_active).count()
    }
}

/// Field validation shared by insert and update.
fn validate(product: &Product) -> Result<(), CoreError> {
    validate_sku(&product.sku)?;
    validate_product_name(&product.name)?;
    validate_brand(&product.brand)?;
    validate_price_cents(product.price_cents)?;
    validate_rating_tenths(product.rating_tenths)?;
    if let Some(original) = product.original_price_cents {
        validate_original_price_cents(original, product.price_cents)?;
    }
    Ok(())
}

/// Helper to generate a new entity ID.
///
/// ## Usage
/// ```rust
/// use nova_catalog::repository::generate_entity_id;
///
/// let id = generate_entity_id();
/// assert_eq!(id.len(), 36);
/// ```
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
