//! # nova-core: Pure Business Logic for Nova Gadgets
//!
//! This crate is the **heart** of the Nova Gadgets shop. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Nova Gadgets Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront / Back-office UI (TypeScript)       │   │
//! │  │    Product Grid ──► Cart Drawer ──► Wishlist ──► Admin Tables  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command invocations                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     nova-app (commands + state)                 │   │
//! │  │    list_products, add_to_cart, move_to_cart, login, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nova-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Store   │  │   rules   │  │   │
//! │  │   │   Order   │  │  Markdown │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  nova-catalog (Data Layer)                      │   │
//! │  │          In-memory repositories, seed data, analytics           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`store`] - The cart/wishlist state container and its transitions
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Transitions**: Store operations never fail - unknown ids are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use nova_core::money::Money;
//! use nova_core::store::{Store, StoreRequest};
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(109_900); // $1,099.00
//!
//! // The cart/wishlist store starts empty and is driven by requests
//! let mut store = Store::new();
//! assert!(store.is_empty());
//! store.apply(StoreRequest::ClearCart); // total: no-ops are fine
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use nova_core::Money` instead of
// `use nova_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartLine, Store, StoreRequest, WishlistEntry};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum product rating in tenths of a star (50 = 5.0 stars).
///
/// Ratings come from the review feed as a decimal with one fractional digit;
/// we carry them as integer tenths so they survive serialization unchanged.
pub const MAX_RATING_TENTHS: u8 = 50;

/// ISO 4217 currency code the whole shop prices in.
///
/// Single-currency for now; the cents-based [`Money`] type does not care,
/// but display layers and order records reference this code.
pub const CURRENCY_CODE: &str = "USD";

/// Flat shipping charge applied at checkout, in cents.
pub const FLAT_SHIPPING_CENTS: i64 = 999;

/// Carts at or above this subtotal ship free, in cents.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 9_900;
