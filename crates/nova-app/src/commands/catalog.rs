//! # Catalog Commands
//!
//! Product browsing and search for the storefront.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Browse Flow                               │
//! │                                                                         │
//! │  Nav click "Audio"          Search box "pixel"                          │
//! │       │                          │                                      │
//! │       ▼                          ▼                                      │
//! │  list_products(Some(Audio), "")  list_products(None, "pixel")           │
//! │       │                          │                                      │
//! │       └──────────┬───────────────┘                                      │
//! │                  ▼                                                      │
//! │  Category narrows first, then the query filters within it;             │
//! │  archived products never appear.                                        │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  Vec<ProductDto> rendered as the product grid                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use nova_core::validation::validate_search_query;
use nova_core::{Category, CoreError, Product};

/// Default and maximum page sizes for product listings.
const DEFAULT_LIMIT: usize = 24;
const MAX_LIMIT: usize = 100;

// =============================================================================
// Product DTO
// =============================================================================

/// Product DTO (Data Transfer Object) for the shell.
///
/// ## Why DTO?
/// - Decouples the domain model from the API contract
/// - Precomputes display fields (discount badge) the shell would otherwise derive
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub brand: String,
    pub category: Category,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    /// Markdown badge in basis points (1500 = "-15%"), 0 when not on sale.
    pub discount_bps: u32,
    pub rating_tenths: u8,
    pub image_url: String,
    pub in_stock: bool,
    pub is_active: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let discount_bps = p.discount_bps();
        ProductDto {
            id: p.id,
            sku: p.sku,
            name: p.name,
            description: p.description,
            brand: p.brand,
            category: p.category,
            price_cents: p.price_cents,
            original_price_cents: p.original_price_cents,
            discount_bps,
            rating_tenths: p.rating_tenths,
            image_url: p.image_url,
            in_stock: p.in_stock,
            is_active: p.is_active,
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Lists products for the storefront grid.
///
/// ## Arguments
/// * `category` - optional category filter (nav rail)
/// * `query` - search term, may be empty (search box)
/// * `limit` - page size (default 24, max 100)
///
/// ## Behavior
/// Category narrows first, then the query filters within the category by
/// name, brand, or SKU. Archived products never appear.
pub fn list_products(
    catalog: &CatalogState,
    category: Option<Category>,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<ProductDto>, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let query = validate_search_query(query).map_err(CoreError::from)?;

    debug!(?category, query = %query, limit = %limit, "list_products command");

    let products = catalog.with_catalog(|c| match category {
        Some(cat) => {
            let needle = query.to_lowercase();
            c.products()
                .by_category(cat)
                .into_iter()
                .filter(|p| {
                    needle.is_empty()
                        || p.name.to_lowercase().contains(&needle)
                        || p.brand.to_lowercase().contains(&needle)
                        || p.sku.to_lowercase().contains(&needle)
                })
                .take(limit)
                .collect::<Vec<_>>()
        }
        None => c.products().search(&query, limit),
    });

    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Gets a single product for the detail page.
///
/// Archived products are hidden from the storefront, so they 404 here even
/// though the back-office can still see them.
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");

    catalog
        .with_catalog(|c| c.products().get_by_id(id))
        .filter(|p| p.is_active)
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Lists products carrying a genuine markdown (the "Deals" rail).
pub fn discounted_products(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("discounted_products command");

    catalog
        .with_catalog(|c| c.products().discounted())
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nova_catalog::Catalog;

    fn catalog_state() -> CatalogState {
        CatalogState::new(Catalog::demo())
    }

    #[test]
    fn test_list_products_default_page() {
        let catalog = catalog_state();
        let products = list_products(&catalog, None, "", None).unwrap();
        assert!(!products.is_empty());
        assert!(products.len() <= DEFAULT_LIMIT);
    }

    #[test]
    fn test_list_products_by_category() {
        let catalog = catalog_state();
        let audio = list_products(&catalog, Some(Category::Audio), "", None).unwrap();
        assert!(!audio.is_empty());
        assert!(audio.iter().all(|p| p.category == Category::Audio));
    }

    #[test]
    fn test_list_products_query_within_category() {
        let catalog = catalog_state();
        let sony = list_products(&catalog, Some(Category::Audio), "sony", None).unwrap();
        assert_eq!(sony.len(), 1);
        assert_eq!(sony[0].brand, "Sony");

        // Same query in the wrong category finds nothing
        let misfiled = list_products(&catalog, Some(Category::Phones), "sony", None).unwrap();
        assert!(misfiled.is_empty());
    }

    #[test]
    fn test_list_products_rejects_oversized_query() {
        let catalog = catalog_state();
        let err = list_products(&catalog, None, &"q".repeat(101), None).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_product_detail() {
        let catalog = catalog_state();
        let listing = list_products(&catalog, None, "iphone", None).unwrap();
        let dto = get_product(&catalog, &listing[0].id).unwrap();

        assert_eq!(dto.name, "iPhone 15 Pro");
        assert!(dto.description.is_some());
    }

    #[test]
    fn test_get_product_hides_archived() {
        let catalog = catalog_state();
        let id = list_products(&catalog, None, "pixel", None).unwrap()[0].id.clone();

        catalog.with_catalog_mut(|c| c.products_mut().set_active(&id, false).unwrap());

        let err = get_product(&catalog, &id).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_discounted_products_have_badges() {
        let catalog = catalog_state();
        let deals = discounted_products(&catalog);
        assert!(!deals.is_empty());
        assert!(deals.iter().all(|p| p.discount_bps > 0));
    }
}
