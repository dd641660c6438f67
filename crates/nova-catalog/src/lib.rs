//! # nova-catalog: In-Memory Data Layer
//!
//! Repositories for products, orders, and users, plus the seeded demo data
//! and the static analytics datasets.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    nova-app (commands + state)                          │
//! │                              │                                          │
//! │  ┌───────────────────────────▼─────────────────────────────────────┐   │
//! │  │                  Catalog (THIS CRATE)                           │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐         │   │
//! │  │   │  products()  │  │   orders()   │  │   users()    │         │   │
//! │  │   │  Vec-backed  │  │  Vec-backed  │  │  credential  │         │   │
//! │  │   │  repository  │  │  repository  │  │    table     │         │   │
//! │  │   └──────────────┘  └──────────────┘  └──────────────┘         │   │
//! │  │                                                                 │   │
//! │  │   seed.rs (demo data)          analytics.rs (static datasets)  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every session rebuilds the catalog from [`Catalog::demo`]; nothing is
//! written to disk. Writes go through `*_mut` accessors so ownership makes
//! the single-writer rule visible at the type level.

pub mod analytics;
pub mod error;
pub mod repository;
pub mod seed;

pub use error::{CatalogError, CatalogResult};
pub use repository::{OrderRepository, ProductRepository, UserRepository};

// =============================================================================
// Catalog Facade
// =============================================================================

/// Aggregates the three repositories behind one handle.
///
/// ## Usage
/// ```rust
/// use nova_catalog::Catalog;
///
/// let catalog = Catalog::demo();
/// assert!(catalog.products().count() > 0);
/// assert!(catalog.users().authenticate("avery@novagadgets.test", "admin123").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    products: ProductRepository,
    orders: OrderRepository,
    users: UserRepository,
}

impl Catalog {
    /// Creates an empty catalog (used by tests and by back-office tooling
    /// that wants to build state from scratch).
    pub fn empty() -> Self {
        Catalog {
            products: ProductRepository::new(),
            orders: OrderRepository::new(),
            users: UserRepository::new(),
        }
    }

    /// Creates the demo catalog: the full mock product range, the hardcoded
    /// credential table, and sample orders in every status.
    pub fn demo() -> Self {
        let products = seed::demo_products();
        let users = seed::demo_users();
        let orders = seed::demo_orders(&products, &users);

        Catalog {
            products: ProductRepository::with_products(products),
            orders: OrderRepository::with_orders(orders),
            users: UserRepository::with_users(users),
        }
    }

    /// Read access to products.
    #[inline]
    pub fn products(&self) -> &ProductRepository {
        &self.products
    }

    /// Write access to products (back-office CRUD).
    #[inline]
    pub fn products_mut(&mut self) -> &mut ProductRepository {
        &mut self.products
    }

    /// Read access to orders.
    #[inline]
    pub fn orders(&self) -> &OrderRepository {
        &self.orders
    }

    /// Write access to orders (checkout, status changes).
    #[inline]
    pub fn orders_mut(&mut self) -> &mut OrderRepository {
        &mut self.orders
    }

    /// Read access to users.
    #[inline]
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Write access to users (back-office management).
    #[inline]
    pub fn users_mut(&mut self) -> &mut UserRepository {
        &mut self.users
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.products().count(), 0);
        assert_eq!(catalog.orders().count(), 0);
        assert_eq!(catalog.users().count(), 0);
    }

    #[test]
    fn test_demo_catalog_is_populated() {
        let catalog = Catalog::demo();
        assert!(catalog.products().count() >= 15);
        assert!(catalog.orders().count() >= 5);
        assert!(catalog.users().count() >= 3);
    }
}
