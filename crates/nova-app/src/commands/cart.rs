//! # Cart Commands
//!
//! The cart drawer operations.
//!
//! ## Failure Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Can Fail Here                                    │
//! │                                                                         │
//! │  add_to_cart ──► catalog lookup ──► CAN FAIL (unknown/archived id)      │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │                  StoreRequest ────► CANNOT FAIL (total transition)      │
//! │                                                                         │
//! │  update_cart_item / remove_from_cart / clear_cart                       │
//! │                  StoreRequest ────► CANNOT FAIL (absent ids are        │
//! │                                     no-ops, qty <= 0 removes)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only commands that consult the catalog return `Result`; pure store
//! commands return the updated cart unconditionally.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::catalog::ProductDto;
use crate::error::ApiError;
use crate::state::{CartTotals, CatalogState, StoreState};
use nova_core::{CartLine, Store, StoreRequest};

// =============================================================================
// Responses
// =============================================================================

/// One rendered cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product: ProductDto,
    pub quantity: i64,
    pub line_total_cents: i64,
    pub line_saving_cents: i64,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        CartLineDto {
            quantity: line.quantity,
            line_total_cents: line.line_total().cents(),
            line_saving_cents: line.line_saving().cents(),
            product: ProductDto::from(line.product.clone()),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineDto>,
    pub totals: CartTotals,
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse {
            lines: store.cart().iter().map(CartLineDto::from).collect(),
            totals: CartTotals::from(store),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents (drawer open, badge refresh).
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already carted: quantity increases, line keeps its position
/// - Otherwise: appended at the end with quantity 1
/// - The product snapshot is frozen at add time
///
/// ## Errors
/// Unknown or archived product ids fail the catalog lookup. Being out of
/// stock does NOT fail - the storefront shows the badge but the cart layer
/// does not enforce stock.
pub fn add_to_cart(
    catalog: &CatalogState,
    store: &StoreState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .with_catalog(|c| c.products().get_by_id(product_id))
        .filter(|p| p.is_active)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(store.with_store_mut(|s| {
        s.apply(StoreRequest::AddToCart(product));
        CartResponse::from(&*s)
    }))
}

/// Sets a cart line's quantity from the drawer stepper.
///
/// ## Behavior
/// - `quantity <= 0`: removes the line
/// - Unknown product id: no-op
/// - No clamping and no upper bound - the value is stored as requested
pub fn update_cart_item(store: &StoreState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    store.with_store_mut(|s| {
        s.apply(StoreRequest::UpdateQuantity {
            product_id: product_id.to_string(),
            quantity,
        });
        CartResponse::from(&*s)
    })
}

/// Removes a line from the cart. Unknown ids are a no-op.
pub fn remove_from_cart(store: &StoreState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.apply(StoreRequest::RemoveFromCart(product_id.to_string()));
        CartResponse::from(&*s)
    })
}

/// Empties the cart. The wishlist is untouched.
pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.apply(StoreRequest::ClearCart);
        CartResponse::from(&*s)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nova_catalog::Catalog;

    fn states() -> (CatalogState, StoreState) {
        (CatalogState::new(Catalog::demo()), StoreState::new())
    }

    fn id_of(catalog: &CatalogState, sku: &str) -> String {
        catalog
            .with_catalog(|c| c.products().get_by_sku(sku))
            .unwrap()
            .id
    }

    #[test]
    fn test_add_and_merge() {
        let (catalog, store) = states();
        let phone = id_of(&catalog, "PHN-PIX-009");

        let cart = add_to_cart(&catalog, &store, &phone).unwrap();
        assert_eq!(cart.totals.total_quantity, 1);

        let cart = add_to_cart(&catalog, &store, &phone).unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_add_unknown_product_fails_lookup() {
        let (catalog, store) = states();
        let err = add_to_cart(&catalog, &store, "p-404").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
        assert_eq!(get_cart(&store).lines.len(), 0);
    }

    #[test]
    fn test_add_archived_product_fails_lookup() {
        let (catalog, store) = states();
        let id = id_of(&catalog, "PHN-PIX-009");
        catalog.with_catalog_mut(|c| c.products_mut().set_active(&id, false).unwrap());

        assert!(add_to_cart(&catalog, &store, &id).is_err());
    }

    #[test]
    fn test_update_quantity_and_floor() {
        let (catalog, store) = states();
        let phone = id_of(&catalog, "PHN-PIX-009");
        add_to_cart(&catalog, &store, &phone).unwrap();

        let cart = update_cart_item(&store, &phone, 5);
        assert_eq!(cart.lines[0].quantity, 5);

        let cart = update_cart_item(&store, &phone, 0);
        assert!(cart.lines.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (catalog, store) = states();
        let phone = id_of(&catalog, "PHN-PIX-009");
        add_to_cart(&catalog, &store, &phone).unwrap();

        let cart = update_cart_item(&store, "p-404", 9);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn test_line_totals_and_savings() {
        let (catalog, store) = states();
        // Pixel 9: 79_900 on sale from 89_900
        let phone = id_of(&catalog, "PHN-PIX-009");
        add_to_cart(&catalog, &store, &phone).unwrap();
        let cart = update_cart_item(&store, &phone, 2);

        assert_eq!(cart.lines[0].line_total_cents, 159_800);
        assert_eq!(cart.lines[0].line_saving_cents, 20_000);
        assert_eq!(cart.totals.subtotal_cents, 159_800);
        assert_eq!(cart.totals.savings_cents, 20_000);
    }

    #[test]
    fn test_clear_cart() {
        let (catalog, store) = states();
        add_to_cart(&catalog, &store, &id_of(&catalog, "PHN-PIX-009")).unwrap();
        add_to_cart(&catalog, &store, &id_of(&catalog, "ACC-ANK-65W")).unwrap();

        let cart = clear_cart(&store);
        assert!(cart.lines.is_empty());
        assert_eq!(cart.totals.subtotal_cents, 0);
    }
}
