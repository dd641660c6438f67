//! # Seed Data
//!
//! The demo state every session starts from: the full product range, the
//! hardcoded credential table, and sample orders in every fulfillment status.
//!
//! ## Demo Accounts
//! ```text
//! ┌──────────────────────────────┬────────────┬──────────┬──────────┐
//! │ email                        │ password   │ role     │ active   │
//! ├──────────────────────────────┼────────────┼──────────┼──────────┤
//! │ avery@novagadgets.test       │ admin123   │ Admin    │ yes      │
//! │ dana@example.test            │ dana123    │ Customer │ yes      │
//! │ sam@example.test             │ sam123     │ Customer │ yes      │
//! │ riley@example.test           │ riley123   │ Customer │ no       │
//! └──────────────────────────────┴────────────┴──────────┴──────────┘
//! ```
//!
//! Ids are fresh UUIDs per session; SKUs, emails, and order numbers are the
//! stable keys tests and the demo binary navigate by.

use chrono::{Duration, Utc};
use uuid::Uuid;

use nova_core::{
    Category, Order, OrderItem, OrderStatus, Product, User, UserRole, FLAT_SHIPPING_CENTS,
    FREE_SHIPPING_THRESHOLD_CENTS,
};

// =============================================================================
// Products
// =============================================================================

/// Builds one catalog product with a generated id and derived image path.
#[allow(clippy::too_many_arguments)]
fn product(
    sku: &str,
    name: &str,
    brand: &str,
    category: Category,
    price_cents: i64,
    original_price_cents: Option<i64>,
    rating_tenths: u8,
    in_stock: bool,
) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        description: None,
        brand: brand.to_string(),
        category,
        price_cents,
        original_price_cents,
        rating_tenths,
        image_url: format!("/images/{}.webp", sku.to_lowercase()),
        in_stock,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// The demo product range: every category populated, a few markdowns for the
/// deals rail, a couple of out-of-stock items for the badge states.
pub fn demo_products() -> Vec<Product> {
    use Category::*;

    let mut products = vec![
        // Phones
        product("PHN-IPH-15P", "iPhone 15 Pro", "Apple", Phones, 99_900, None, 48, true),
        product("PHN-GAL-S24", "Galaxy S24 Ultra", "Samsung", Phones, 119_900, Some(129_900), 47, true),
        product("PHN-PIX-009", "Pixel 9", "Google", Phones, 79_900, Some(89_900), 45, true),
        product("PHN-NTH-002", "Nothing Phone (2)", "Nothing", Phones, 59_900, None, 43, true),
        // Laptops
        product("LAP-MBA-M3", "MacBook Air 13 M3", "Apple", Laptops, 109_900, None, 49, true),
        product("LAP-XPS-013", "XPS 13", "Dell", Laptops, 99_900, Some(119_900), 44, true),
        product("LAP-TPX-1C", "ThinkPad X1 Carbon", "Lenovo", Laptops, 139_900, None, 46, false),
        // Tablets
        product("TAB-IPA-011", "iPad Air 11", "Apple", Tablets, 59_900, None, 47, true),
        product("TAB-GTS-009", "Galaxy Tab S9", "Samsung", Tablets, 69_900, Some(79_900), 44, true),
        // Audio
        product("AUD-APP-002", "AirPods Pro 2", "Apple", Audio, 24_900, None, 48, true),
        product("AUD-XM5-001", "WH-1000XM5", "Sony", Audio, 29_900, Some(39_900), 47, true),
        product("AUD-JBL-F06", "Flip 6", "JBL", Audio, 9_900, Some(12_900), 43, true),
        // Wearables
        product("WEA-AWS-009", "Apple Watch Series 9", "Apple", Wearables, 39_900, None, 46, true),
        product("WEA-GW6-001", "Galaxy Watch 6", "Samsung", Wearables, 29_900, Some(32_900), 43, true),
        product("WEA-FBC-006", "Charge 6", "Fitbit", Wearables, 15_900, None, 41, false),
        // Accessories
        product("ACC-ANK-65W", "Nano II 65W Charger", "Anker", Accessories, 5_900, None, 46, true),
        product("ACC-MAG-CLR", "MagSafe Clear Case", "Apple", Accessories, 4_900, Some(5_900), 40, true),
        product("ACC-SSD-1TB", "Extreme Portable SSD 1TB", "SanDisk", Accessories, 12_900, Some(16_900), 47, true),
    ];

    // A few long descriptions for the detail page; the rest stay terse.
    set_description(
        &mut products,
        "PHN-IPH-15P",
        "6.1\" Super Retina XDR, A17 Pro, 48MP main camera, titanium frame.",
    );
    set_description(
        &mut products,
        "AUD-XM5-001",
        "Industry-leading noise cancelling over-ear headphones, 30h battery.",
    );
    set_description(
        &mut products,
        "LAP-MBA-M3",
        "13.6\" Liquid Retina, 8-core M3, fanless, 18h battery.",
    );

    products
}

fn set_description(products: &mut [Product], sku: &str, description: &str) {
    if let Some(p) = products.iter_mut().find(|p| p.sku == sku) {
        p.description = Some(description.to_string());
    }
}

// =============================================================================
// Users
// =============================================================================

fn user(name: &str, email: &str, password: &str, role: UserRole, is_active: bool, days_ago: i64) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
        is_active,
        joined_at: Utc::now() - Duration::days(days_ago),
    }
}

/// The hardcoded credential table.
pub fn demo_users() -> Vec<User> {
    vec![
        user("Avery Stone", "avery@novagadgets.test", "admin123", UserRole::Admin, true, 400),
        user("Dana Fox", "dana@example.test", "dana123", UserRole::Customer, true, 180),
        user("Sam Reyes", "sam@example.test", "sam123", UserRole::Customer, true, 90),
        user("Riley Chen", "riley@example.test", "riley123", UserRole::Customer, false, 250),
    ]
}

// =============================================================================
// Orders
// =============================================================================

/// Builds an order line by SKU. Returns `None` when the SKU is not seeded,
/// so a typo here drops the line instead of poisoning the whole seed.
fn line(products: &[Product], sku: &str, quantity: i64) -> Option<OrderItem> {
    let p = products.iter().find(|p| p.sku == sku)?;
    Some(OrderItem {
        product_id: p.id.clone(),
        sku_snapshot: p.sku.clone(),
        name_snapshot: p.name.clone(),
        unit_price_cents: p.price_cents,
        quantity,
        line_total_cents: p.price_cents * quantity,
    })
}

fn order(
    number: u32,
    customer: &User,
    items: Vec<OrderItem>,
    status: OrderStatus,
    days_ago: i64,
) -> Order {
    let subtotal_cents: i64 = items.iter().map(|i| i.line_total_cents).sum();
    let shipping_cents = if subtotal_cents >= FREE_SHIPPING_THRESHOLD_CENTS {
        0
    } else {
        FLAT_SHIPPING_CENTS
    };
    let placed_at = Utc::now() - Duration::days(days_ago);

    Order {
        id: Uuid::new_v4().to_string(),
        order_number: format!("NV-{}", number),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        status,
        items,
        subtotal_cents,
        shipping_cents,
        total_cents: subtotal_cents + shipping_cents,
        placed_at,
        updated_at: placed_at,
    }
}

/// Sample orders covering every fulfillment status, so the back-office table
/// and its filters have something to show from the first render.
pub fn demo_orders(products: &[Product], users: &[User]) -> Vec<Order> {
    let dana = users.iter().find(|u| u.email == "dana@example.test");
    let sam = users.iter().find(|u| u.email == "sam@example.test");
    let (dana, sam) = match (dana, sam) {
        (Some(d), Some(s)) => (d, s),
        _ => return Vec::new(),
    };

    let lines = |skus: &[(&str, i64)]| -> Vec<OrderItem> {
        skus.iter()
            .filter_map(|(sku, qty)| line(products, sku, *qty))
            .collect()
    };

    vec![
        order(
            1001,
            dana,
            lines(&[("PHN-IPH-15P", 1), ("ACC-MAG-CLR", 2)]),
            OrderStatus::Delivered,
            21,
        ),
        order(
            1002,
            sam,
            lines(&[("AUD-XM5-001", 1)]),
            OrderStatus::Delivered,
            14,
        ),
        order(
            1003,
            dana,
            lines(&[("ACC-ANK-65W", 1)]),
            OrderStatus::Cancelled,
            9,
        ),
        order(
            1004,
            sam,
            lines(&[("LAP-XPS-013", 1), ("ACC-SSD-1TB", 1)]),
            OrderStatus::Shipped,
            6,
        ),
        order(
            1005,
            dana,
            lines(&[("WEA-GW6-001", 1), ("AUD-JBL-F06", 2)]),
            OrderStatus::Processing,
            3,
        ),
        order(
            1006,
            sam,
            lines(&[("TAB-IPA-011", 1)]),
            OrderStatus::Pending,
            1,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_products_have_unique_ids_and_skus() {
        let products = demo_products();

        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let skus: HashSet<&str> = products.iter().map(|p| p.sku.as_str()).collect();

        assert_eq!(ids.len(), products.len());
        assert_eq!(skus.len(), products.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        let products = demo_products();
        for category in Category::ALL {
            assert!(
                products.iter().any(|p| p.category == category),
                "no products seeded in {:?}",
                category
            );
        }
    }

    #[test]
    fn test_markdowns_are_genuine() {
        for p in demo_products() {
            if let Some(original) = p.original_price_cents {
                assert!(original > p.price_cents, "{} has a bogus markdown", p.sku);
            }
        }
    }

    #[test]
    fn test_users_have_unique_emails_and_one_admin() {
        let users = demo_users();
        let emails: HashSet<String> = users.iter().map(|u| u.email.to_lowercase()).collect();
        assert_eq!(emails.len(), users.len());
        assert_eq!(users.iter().filter(|u| u.is_admin()).count(), 1);
        assert!(users.iter().any(|u| !u.is_active));
    }

    #[test]
    fn test_orders_cover_every_status() {
        let products = demo_products();
        let users = demo_users();
        let orders = demo_orders(&products, &users);

        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(
                orders.iter().any(|o| o.status == status),
                "no seeded order in {:?}",
                status
            );
        }
    }

    #[test]
    fn test_order_totals_are_consistent() {
        let products = demo_products();
        let users = demo_users();

        for order in demo_orders(&products, &users) {
            assert!(!order.items.is_empty(), "{} has no lines", order.order_number);

            let line_sum: i64 = order.items.iter().map(|i| i.line_total_cents).sum();
            assert_eq!(order.subtotal_cents, line_sum);
            assert_eq!(order.total_cents, order.subtotal_cents + order.shipping_cents);

            for item in &order.items {
                assert_eq!(item.line_total_cents, item.unit_price_cents * item.quantity);
                assert!(
                    products.iter().any(|p| p.id == item.product_id),
                    "{} references unknown product",
                    order.order_number
                );
            }
        }
    }

    #[test]
    fn test_free_shipping_threshold_applies() {
        let products = demo_products();
        let users = demo_users();

        for order in demo_orders(&products, &users) {
            if order.subtotal_cents >= FREE_SHIPPING_THRESHOLD_CENTS {
                assert_eq!(order.shipping_cents, 0, "{}", order.order_number);
            } else {
                assert_eq!(order.shipping_cents, FLAT_SHIPPING_CENTS, "{}", order.order_number);
            }
        }
    }
}
