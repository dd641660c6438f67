//! # Checkout
//!
//! Turns the cart into a Pending order. There is no payment step anywhere
//! in this system - the order is born Pending and fulfillment picks it up
//! in the back-office.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order                                          │
//! │                                                                         │
//! │  1. Session check ──────► signed out? → UNAUTHORIZED                    │
//! │  2. Cart check ─────────► empty? → VALIDATION_ERROR                     │
//! │  3. Snapshot lines ─────► CartLine → OrderItem (frozen prices)          │
//! │  4. Shipping policy ────► flat fee, free above the threshold            │
//! │  5. Issue order number ─► "NV-10xx"                                     │
//! │  6. Insert + clear cart ─ one command, cart is empty afterwards         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionState, StoreState};
use nova_core::{Order, OrderItem, OrderStatus, StoreRequest};

// =============================================================================
// Order DTOs
// =============================================================================

/// One rendered order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&OrderItem> for OrderItemDto {
    fn from(item: &OrderItem) -> Self {
        OrderItemDto {
            product_id: item.product_id.clone(),
            sku: item.sku_snapshot.clone(),
            name: item.name_snapshot.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            line_total_cents: item.line_total_cents,
        }
    }
}

/// Order DTO for confirmation pages and the back-office table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItemDto>,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub placed_at: String,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        OrderDto {
            id: o.id.clone(),
            order_number: o.order_number.clone(),
            customer_name: o.customer_name.clone(),
            status: o.status,
            items: o.items.iter().map(OrderItemDto::from).collect(),
            subtotal_cents: o.subtotal_cents,
            shipping_cents: o.shipping_cents,
            total_cents: o.total_cents,
            placed_at: o.placed_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Command
// =============================================================================

/// Places an order from the current cart and clears it.
///
/// ## Errors
/// - `UNAUTHORIZED` - nobody is signed in
/// - `VALIDATION_ERROR` - the cart is empty
pub fn place_order(
    catalog: &CatalogState,
    store: &StoreState,
    session: &SessionState,
    config: &ConfigState,
) -> Result<OrderDto, ApiError> {
    debug!("place_order command");

    let customer = session
        .current()
        .ok_or_else(|| ApiError::unauthorized("Sign in to place an order"))?;

    // Snapshot the cart under one lock acquisition
    let (items, subtotal_cents) = store.with_store(|s| {
        let items: Vec<OrderItem> = s
            .cart()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id.clone(),
                sku_snapshot: line.product.sku.clone(),
                name_snapshot: line.product.name.clone(),
                unit_price_cents: line.product.price_cents,
                quantity: line.quantity,
                line_total_cents: line.line_total().cents(),
            })
            .collect();
        (items, s.cart_subtotal().cents())
    });

    if items.is_empty() {
        return Err(ApiError::validation("Cart is empty"));
    }

    let shipping_cents = config.get().shipping_for(subtotal_cents);
    let now = Utc::now();

    let order = catalog.with_catalog_mut(|c| {
        let order_number = c.orders_mut().next_order_number();
        c.orders_mut().insert(Order {
            id: Uuid::new_v4().to_string(),
            order_number,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            status: OrderStatus::Pending,
            items,
            subtotal_cents,
            shipping_cents,
            total_cents: subtotal_cents + shipping_cents,
            placed_at: now,
            updated_at: now,
        })
    });

    store.with_store_mut(|s| s.apply(StoreRequest::ClearCart));

    info!(order_number = %order.order_number, total_cents = %order.total_cents, "Order placed");
    Ok(OrderDto::from(order))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::login;
    use crate::commands::cart::{add_to_cart, get_cart, update_cart_item};
    use crate::App;

    fn signed_in_app() -> App {
        let app = App::new();
        login(&app.catalog, &app.session, "dana@example.test", "dana123").unwrap();
        app
    }

    fn id_of(app: &App, sku: &str) -> String {
        app.catalog
            .with_catalog(|c| c.products().get_by_sku(sku))
            .unwrap()
            .id
    }

    #[test]
    fn test_place_order_snapshots_cart_and_clears_it() {
        let app = signed_in_app();
        let phone = id_of(&app, "PHN-PIX-009"); // 79_900
        let charger = id_of(&app, "ACC-ANK-65W"); // 5_900

        add_to_cart(&app.catalog, &app.store, &phone).unwrap();
        add_to_cart(&app.catalog, &app.store, &charger).unwrap();
        update_cart_item(&app.store, &charger, 2);

        let order = place_order(&app.catalog, &app.store, &app.session, &app.config).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer_name, "Dana Fox");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.subtotal_cents, 79_900 + 2 * 5_900);
        assert_eq!(order.shipping_cents, 0); // over the free threshold
        assert_eq!(order.total_cents, order.subtotal_cents);

        // Cart is empty afterwards; the order is queryable in the catalog
        assert!(get_cart(&app.store).lines.is_empty());
        assert!(app
            .catalog
            .with_catalog(|c| c.orders().get_by_id(&order.id))
            .is_some());
    }

    #[test]
    fn test_small_orders_pay_flat_shipping() {
        let app = signed_in_app();
        let case = id_of(&app, "ACC-MAG-CLR"); // 4_900
        add_to_cart(&app.catalog, &app.store, &case).unwrap();

        let order = place_order(&app.catalog, &app.store, &app.session, &app.config).unwrap();

        assert_eq!(order.shipping_cents, app.config.get().flat_shipping_cents);
        assert_eq!(order.total_cents, 4_900 + order.shipping_cents);
    }

    #[test]
    fn test_order_numbers_continue_the_seeded_sequence() {
        let app = signed_in_app();
        add_to_cart(&app.catalog, &app.store, &id_of(&app, "ACC-MAG-CLR")).unwrap();

        let order = place_order(&app.catalog, &app.store, &app.session, &app.config).unwrap();

        // Seed tops out at NV-1006
        assert_eq!(order.order_number, "NV-1007");
    }

    #[test]
    fn test_checkout_requires_sign_in() {
        let app = App::new();
        add_to_cart(&app.catalog, &app.store, &id_of(&app, "ACC-MAG-CLR")).unwrap();

        let err = place_order(&app.catalog, &app.store, &app.session, &app.config).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Unauthorized);

        // Cart untouched by the failed attempt
        assert_eq!(get_cart(&app.store).lines.len(), 1);
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let app = signed_in_app();
        let err = place_order(&app.catalog, &app.store, &app.session, &app.config).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }
}
