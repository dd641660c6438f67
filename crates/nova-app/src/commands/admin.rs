//! # Admin Commands
//!
//! Back-office management: product CRUD, order fulfillment, user accounts.
//! Every command here runs behind the role gate.
//!
//! ## Role Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    require_admin                                        │
//! │                                                                         │
//! │  Session empty ────────────► UNAUTHORIZED ("Sign in")                   │
//! │  Session = Customer ───────► FORBIDDEN   ("Admin access required")      │
//! │  Session = Admin ──────────► command proceeds                           │
//! │                                                                         │
//! │  The shell hides admin routes from customers, but the gate lives       │
//! │  here - hiding a button is not a permission model.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::auth::UserDto;
use crate::commands::catalog::ProductDto;
use crate::commands::checkout::OrderDto;
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};
use chrono::Utc;
use nova_catalog::repository::generate_entity_id;
use nova_core::{Category, OrderStatus, Product, User};

// =============================================================================
// Role Gate
// =============================================================================

/// Resolves the signed-in admin or fails the command.
fn require_admin(session: &SessionState) -> Result<User, ApiError> {
    let user = session
        .current()
        .ok_or_else(|| ApiError::unauthorized("Sign in to use the back-office"))?;

    if !user.is_admin() {
        return Err(ApiError::forbidden("Admin access required"));
    }

    Ok(user)
}

// =============================================================================
// Product Management
// =============================================================================

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub brand: String,
    pub category: Category,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    /// Optional; new products default to unrated.
    pub rating_tenths: Option<u8>,
    /// Optional; defaults to an image path derived from the SKU.
    pub image_url: Option<String>,
    pub in_stock: bool,
}

/// Input for editing a product. Full replacement of the editable fields;
/// timestamps and the active flag are managed elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub brand: String,
    pub category: Category,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    pub rating_tenths: u8,
    pub image_url: String,
    pub in_stock: bool,
}

/// Lists every product, archived ones included (the back-office table).
pub fn admin_products(
    catalog: &CatalogState,
    session: &SessionState,
) -> Result<Vec<ProductDto>, ApiError> {
    require_admin(session)?;
    debug!("admin_products command");

    Ok(catalog
        .with_catalog(|c| c.products().list_all())
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

/// Creates a product.
///
/// ## Errors
/// - `VALIDATION_ERROR` - a field failed validation or the SKU exists
pub fn create_product(
    catalog: &CatalogState,
    session: &SessionState,
    input: NewProduct,
) -> Result<ProductDto, ApiError> {
    require_admin(session)?;
    debug!(sku = %input.sku, "create_product command");

    let now = Utc::now();
    let image_url = input
        .image_url
        .unwrap_or_else(|| format!("/images/{}.webp", input.sku.to_lowercase()));

    let product = Product {
        id: generate_entity_id(),
        sku: input.sku,
        name: input.name,
        description: input.description,
        brand: input.brand,
        category: input.category,
        price_cents: input.price_cents,
        original_price_cents: input.original_price_cents,
        rating_tenths: input.rating_tenths.unwrap_or(0),
        image_url,
        in_stock: input.in_stock,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let stored = catalog.with_catalog_mut(|c| c.products_mut().insert(product))?;
    info!(sku = %stored.sku, "Product created");
    Ok(ProductDto::from(stored))
}

/// Edits a product.
pub fn update_product(
    catalog: &CatalogState,
    session: &SessionState,
    input: UpdateProduct,
) -> Result<ProductDto, ApiError> {
    require_admin(session)?;
    debug!(id = %input.id, "update_product command");

    let existing = catalog
        .with_catalog(|c| c.products().get_by_id(&input.id))
        .ok_or_else(|| ApiError::not_found("Product", &input.id))?;

    let product = Product {
        id: input.id,
        sku: input.sku,
        name: input.name,
        description: input.description,
        brand: input.brand,
        category: input.category,
        price_cents: input.price_cents,
        original_price_cents: input.original_price_cents,
        rating_tenths: input.rating_tenths,
        image_url: input.image_url,
        in_stock: input.in_stock,
        is_active: existing.is_active,
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    let stored = catalog.with_catalog_mut(|c| c.products_mut().update(product))?;
    Ok(ProductDto::from(stored))
}

/// Archives or restores a product (soft delete toggle).
pub fn set_product_active(
    catalog: &CatalogState,
    session: &SessionState,
    id: &str,
    active: bool,
) -> Result<(), ApiError> {
    require_admin(session)?;
    debug!(id = %id, active = %active, "set_product_active command");

    catalog.with_catalog_mut(|c| c.products_mut().set_active(id, active))?;
    Ok(())
}

// =============================================================================
// Order Management
// =============================================================================

/// Lists orders for the back-office table, optionally filtered by status.
pub fn list_orders(
    catalog: &CatalogState,
    session: &SessionState,
    status: Option<OrderStatus>,
) -> Result<Vec<OrderDto>, ApiError> {
    require_admin(session)?;
    debug!(?status, "list_orders command");

    let orders = catalog.with_catalog(|c| match status {
        Some(s) => c.orders().list_by_status(s),
        None => c.orders().list(),
    });

    Ok(orders.into_iter().map(OrderDto::from).collect())
}

/// Moves an order to a new fulfillment status.
///
/// ## Errors
/// - `NOT_FOUND` - unknown order id
/// - `BUSINESS_LOGIC` - the order is Delivered or Cancelled (frozen)
pub fn update_order_status(
    catalog: &CatalogState,
    session: &SessionState,
    id: &str,
    status: OrderStatus,
) -> Result<OrderDto, ApiError> {
    require_admin(session)?;
    debug!(id = %id, status = %status.label(), "update_order_status command");

    let order = catalog.with_catalog_mut(|c| c.orders_mut().update_status(id, status))?;
    Ok(OrderDto::from(order))
}

// =============================================================================
// User Management
// =============================================================================

/// Lists every account (the back-office user table).
pub fn list_users(
    catalog: &CatalogState,
    session: &SessionState,
) -> Result<Vec<UserDto>, ApiError> {
    require_admin(session)?;
    debug!("list_users command");

    Ok(catalog
        .with_catalog(|c| c.users().list())
        .into_iter()
        .map(UserDto::from)
        .collect())
}

/// Enables or disables an account.
///
/// Admins cannot deactivate themselves - a back-office with zero admins is
/// unrecoverable in a system with no registration.
pub fn set_user_active(
    catalog: &CatalogState,
    session: &SessionState,
    id: &str,
    active: bool,
) -> Result<(), ApiError> {
    let actor = require_admin(session)?;
    debug!(id = %id, active = %active, "set_user_active command");

    if actor.id == id && !active {
        return Err(ApiError::validation("You cannot deactivate your own account"));
    }

    catalog.with_catalog_mut(|c| c.users_mut().set_active(id, active))?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::login;
    use crate::error::ErrorCode;
    use crate::App;

    fn admin_app() -> App {
        let app = App::new();
        login(&app.catalog, &app.session, "avery@novagadgets.test", "admin123").unwrap();
        app
    }

    fn new_product(sku: &str) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: "Pixel Buds Pro 2".to_string(),
            description: None,
            brand: "Google".to_string(),
            category: Category::Audio,
            price_cents: 22_900,
            original_price_cents: None,
            rating_tenths: None,
            image_url: None,
            in_stock: true,
        }
    }

    #[test]
    fn test_gate_rejects_signed_out_and_customers() {
        let app = App::new();
        let err = admin_products(&app.catalog, &app.session).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        login(&app.catalog, &app.session, "dana@example.test", "dana123").unwrap();
        let err = admin_products(&app.catalog, &app.session).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_create_product_with_defaults() {
        let app = admin_app();
        let dto = create_product(&app.catalog, &app.session, new_product("AUD-PBP-002")).unwrap();

        assert_eq!(dto.rating_tenths, 0);
        assert_eq!(dto.image_url, "/images/aud-pbp-002.webp");
        assert!(dto.is_active);

        // Visible on the storefront immediately
        let found = crate::commands::catalog::get_product(&app.catalog, &dto.id).unwrap();
        assert_eq!(found.sku, "AUD-PBP-002");
    }

    #[test]
    fn test_create_product_rejects_duplicate_sku() {
        let app = admin_app();
        let err = create_product(&app.catalog, &app.session, new_product("PHN-PIX-009"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_create_product_rejects_invalid_input() {
        let app = admin_app();

        let mut bad = new_product("AUD-PBP-002");
        bad.price_cents = -1;
        assert_eq!(
            create_product(&app.catalog, &app.session, bad).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_update_product_reprices() {
        let app = admin_app();
        let existing = app
            .catalog
            .with_catalog(|c| c.products().get_by_sku("AUD-APP-002"))
            .unwrap();

        let dto = update_product(
            &app.catalog,
            &app.session,
            UpdateProduct {
                id: existing.id.clone(),
                sku: existing.sku.clone(),
                name: existing.name.clone(),
                description: existing.description.clone(),
                brand: existing.brand.clone(),
                category: existing.category,
                price_cents: 19_900,
                original_price_cents: Some(24_900),
                rating_tenths: existing.rating_tenths,
                image_url: existing.image_url.clone(),
                in_stock: existing.in_stock,
            },
        )
        .unwrap();

        assert_eq!(dto.price_cents, 19_900);
        assert!(dto.discount_bps > 0);
    }

    #[test]
    fn test_archive_product_hides_it_from_storefront() {
        let app = admin_app();
        let id = app
            .catalog
            .with_catalog(|c| c.products().get_by_sku("AUD-JBL-F06"))
            .unwrap()
            .id;

        set_product_active(&app.catalog, &app.session, &id, false).unwrap();

        assert!(crate::commands::catalog::get_product(&app.catalog, &id).is_err());
        // Still on the admin table
        let all = admin_products(&app.catalog, &app.session).unwrap();
        assert!(all.iter().any(|p| p.id == id && !p.is_active));
    }

    #[test]
    fn test_list_orders_with_status_filter() {
        let app = admin_app();

        let all = list_orders(&app.catalog, &app.session, None).unwrap();
        assert!(all.len() >= 6);

        let delivered =
            list_orders(&app.catalog, &app.session, Some(OrderStatus::Delivered)).unwrap();
        assert!(delivered.iter().all(|o| o.status == OrderStatus::Delivered));
        assert!(delivered.len() < all.len());
    }

    #[test]
    fn test_update_order_status_and_terminal_guard() {
        let app = admin_app();
        let pending = list_orders(&app.catalog, &app.session, Some(OrderStatus::Pending)).unwrap();
        let id = pending[0].id.clone();

        let dto =
            update_order_status(&app.catalog, &app.session, &id, OrderStatus::Shipped).unwrap();
        assert_eq!(dto.status, OrderStatus::Shipped);

        let dto =
            update_order_status(&app.catalog, &app.session, &id, OrderStatus::Delivered).unwrap();
        assert_eq!(dto.status, OrderStatus::Delivered);

        // Delivered is terminal
        let err = update_order_status(&app.catalog, &app.session, &id, OrderStatus::Pending)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_deactivate_user_blocks_their_sign_in() {
        let app = admin_app();
        let dana = app
            .catalog
            .with_catalog(|c| c.users().get_by_email("dana@example.test"))
            .unwrap();

        set_user_active(&app.catalog, &app.session, &dana.id, false).unwrap();

        let fresh = crate::state::SessionState::new();
        let err = login(&app.catalog, &fresh, "dana@example.test", "dana123").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_admin_cannot_deactivate_self() {
        let app = admin_app();
        let me = app.session.current().unwrap();

        let err = set_user_active(&app.catalog, &app.session, &me.id, false).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Re-activating yourself is a fine no-op though
        set_user_active(&app.catalog, &app.session, &me.id, true).unwrap();
    }
}
