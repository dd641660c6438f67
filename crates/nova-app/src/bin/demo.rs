//! # Demo Walkthrough
//!
//! Drives a full session against the seeded demo state, end to end:
//! browse → cart → wishlist → checkout → back-office.
//!
//! ## Usage
//! ```bash
//! cargo run -p nova-app --bin demo
//!
//! # With debug logging from the command layer
//! RUST_LOG=debug cargo run -p nova-app --bin demo
//! ```

use nova_app::commands::{
    add_to_cart, add_to_wishlist, dashboard, discounted_products, get_cart, list_orders,
    list_products, login, logout, move_to_cart, place_order, update_cart_item,
    update_order_status,
};
use nova_app::commands::ProductDto;
use nova_app::{init_tracing, App};
use nova_core::{Money, OrderStatus};

/// First search hit for a query, or a readable error for the console.
fn find_product(app: &App, query: &str) -> Result<ProductDto, Box<dyn std::error::Error>> {
    list_products(&app.catalog, None, query, None)?
        .into_iter()
        .next()
        .ok_or_else(|| format!("no product matches '{}'", query).into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("🛍  Nova Gadgets - demo session");
    println!("==============================");

    let app = App::new();
    println!("✓ Session started over the seeded demo catalog");

    // -------------------------------------------------------------------------
    // Storefront: browse
    // -------------------------------------------------------------------------
    let grid = list_products(&app.catalog, None, "", None)?;
    let deals = discounted_products(&app.catalog);
    println!("✓ Storefront: {} products, {} on the deals rail", grid.len(), deals.len());

    let pixel = find_product(&app, "pixel")?;
    let charger = find_product(&app, "anker")?;
    let watch = find_product(&app, "watch series")?;

    // -------------------------------------------------------------------------
    // Sign in and fill the cart
    // -------------------------------------------------------------------------
    let dana = login(&app.catalog, &app.session, "dana@example.test", "dana123")?;
    println!("✓ Signed in as {} ({:?})", dana.name, dana.role);

    add_to_cart(&app.catalog, &app.store, &pixel.id)?;
    add_to_cart(&app.catalog, &app.store, &charger.id)?;
    update_cart_item(&app.store, &charger.id, 2);

    add_to_wishlist(&app.catalog, &app.store, &watch.id)?;
    let view = move_to_cart(&app.store, &watch.id);
    println!(
        "✓ Cart filled: {} lines, wishlist holds {} after the move",
        view.cart.lines.len(),
        view.wishlist.count
    );

    let cart = get_cart(&app.store);
    for line in &cart.lines {
        println!(
            "    {} x{}  {}",
            line.product.name,
            line.quantity,
            Money::from_cents(line.line_total_cents)
        );
    }
    println!(
        "    Subtotal {}  (saved {})",
        Money::from_cents(cart.totals.subtotal_cents),
        Money::from_cents(cart.totals.savings_cents)
    );

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------
    let order = place_order(&app.catalog, &app.store, &app.session, &app.config)?;
    println!(
        "✓ Order {} placed: {} ({} lines, shipping {})",
        order.order_number,
        Money::from_cents(order.total_cents),
        order.items.len(),
        Money::from_cents(order.shipping_cents)
    );

    // -------------------------------------------------------------------------
    // Back-office
    // -------------------------------------------------------------------------
    logout(&app.session);
    let admin = login(&app.catalog, &app.session, "avery@novagadgets.test", "admin123")?;
    println!("✓ Signed in as {} ({:?})", admin.name, admin.role);

    let updated = update_order_status(&app.catalog, &app.session, &order.id, OrderStatus::Processing)?;
    println!("✓ Order {} moved to {:?}", updated.order_number, updated.status);

    let pending = list_orders(&app.catalog, &app.session, Some(OrderStatus::Pending))?;
    println!("✓ Back-office: {} orders still pending", pending.len());

    let dash = dashboard(&app.session)?;
    println!(
        "✓ Dashboard: {} revenue across {} orders, top seller \"{}\"",
        Money::from_cents(dash.summary.total_revenue_cents),
        dash.summary.total_orders,
        dash.top_sellers[0].name
    );

    println!();
    println!("✓ Demo complete");
    Ok(())
}
