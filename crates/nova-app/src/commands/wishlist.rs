//! # Wishlist Commands
//!
//! The wishlist page operations: the "♡" toggle on product cards and the
//! "Move to Cart" button on saved entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::cart::CartResponse;
use crate::commands::catalog::ProductDto;
use crate::error::ApiError;
use crate::state::{CatalogState, StoreState};
use nova_core::{Store, StoreRequest, WishlistEntry};

// =============================================================================
// Responses
// =============================================================================

/// One rendered wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntryDto {
    pub product: ProductDto,
    pub added_at: String,
}

impl From<&WishlistEntry> for WishlistEntryDto {
    fn from(entry: &WishlistEntry) -> Self {
        WishlistEntryDto {
            added_at: entry.added_at.to_rfc3339(),
            product: ProductDto::from(entry.product.clone()),
        }
    }
}

/// Wishlist response for the wishlist page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub entries: Vec<WishlistEntryDto>,
    pub count: usize,
}

impl From<&Store> for WishlistResponse {
    fn from(store: &Store) -> Self {
        WishlistResponse {
            entries: store.wishlist().iter().map(WishlistEntryDto::from).collect(),
            count: store.wishlist_count(),
        }
    }
}

/// Combined view returned when one gesture changes both collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub cart: CartResponse,
    pub wishlist: WishlistResponse,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        StoreResponse {
            cart: CartResponse::from(store),
            wishlist: WishlistResponse::from(store),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current wishlist contents.
pub fn get_wishlist(store: &StoreState) -> WishlistResponse {
    debug!("get_wishlist command");
    store.with_store(|s| WishlistResponse::from(s))
}

/// Saves a product for later. Saving twice is a no-op.
///
/// ## Errors
/// Unknown or archived product ids fail the catalog lookup.
pub fn add_to_wishlist(
    catalog: &CatalogState,
    store: &StoreState,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    let product = catalog
        .with_catalog(|c| c.products().get_by_id(product_id))
        .filter(|p| p.is_active)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(store.with_store_mut(|s| {
        s.apply(StoreRequest::AddToWishlist(product));
        WishlistResponse::from(&*s)
    }))
}

/// Removes a saved product. Unknown ids are a no-op.
pub fn remove_from_wishlist(store: &StoreState, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    store.with_store_mut(|s| {
        s.apply(StoreRequest::RemoveFromWishlist(product_id.to_string()));
        WishlistResponse::from(&*s)
    })
}

/// Moves a saved product into the cart as one transition.
///
/// ## Behavior
/// - Saved: entry leaves the wishlist and merges into the cart
///   (increment if already carted, else append with quantity 1)
/// - Not saved: no-op - both collections come back unchanged
pub fn move_to_cart(store: &StoreState, product_id: &str) -> StoreResponse {
    debug!(product_id = %product_id, "move_to_cart command");

    store.with_store_mut(|s| {
        s.apply(StoreRequest::MoveToCart(product_id.to_string()));
        StoreResponse::from(&*s)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
