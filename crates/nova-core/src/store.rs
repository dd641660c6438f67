//! # Cart/Wishlist Store
//!
//! The state container behind the storefront's cart drawer and wishlist page.
//!
//! ## Transition Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Transitions                                    │
//! │                                                                         │
//! │  UI Gesture                 StoreRequest              State Change      │
//! │  ──────────                 ────────────              ────────────      │
//! │                                                                         │
//! │  Click "Add to Cart" ─────► AddToCart(p) ───────────► merge into cart   │
//! │                                                                         │
//! │  Change qty stepper ──────► UpdateQuantity{id, q} ──► set / remove      │
//! │                                                                         │
//! │  Click line "×" ──────────► RemoveFromCart(id) ─────► drop line         │
//! │                                                                         │
//! │  Click "Clear" ───────────► ClearCart ──────────────► cart = []         │
//! │                                                                         │
//! │  Click "♡" ───────────────► AddToWishlist(p) ───────► append once       │
//! │                                                                         │
//! │  Click "♡" again ─────────► RemoveFromWishlist(id) ─► drop entry        │
//! │                                                                         │
//! │  "Move to Cart" ──────────► MoveToCart(id) ─────────► wishlist → cart   │
//! │                                                                         │
//! │  NOTE: Every request is a TOTAL transition. Unknown ids are no-ops,     │
//! │        non-positive quantities normalize to removal. Nothing here       │
//! │        can fail or panic.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one cart line per product id; at most one wishlist entry per id.
//! - Insertion order is preserved: new lines append, merges keep position.
//! - Mutation happens only through [`Store::apply`]; readers get slices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// ## Snapshot Pattern
/// The embedded product is a frozen copy taken when the line was created.
/// The cart keeps displaying consistent data even if the catalog entry is
/// edited afterwards; only `product.id` matters to the store itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product snapshot at time of adding (frozen).
    pub product: Product,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line for one unit of a product.
    pub fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Amount saved versus the pre-markdown price, zero when not on sale.
    pub fn line_saving(&self) -> Money {
        match self.product.original_price() {
            Some(original) => self
                .product
                .price()
                .saving_from(original)
                .multiply_quantity(self.quantity),
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Wishlist Entry
// =============================================================================

/// A saved-for-later product. No quantity; the wishlist is a set with order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WishlistEntry {
    /// Product snapshot at time of saving (frozen).
    pub product: Product,

    /// When the product was saved.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Creates a new wishlist entry.
    pub fn new(product: Product) -> Self {
        WishlistEntry {
            product,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Store Request
// =============================================================================

/// The closed set of store mutations.
///
/// The reducer is this enum plus [`Store::apply`]; there is no other write
/// path. Adding a variant forces every match site to handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StoreRequest {
    /// Merge one unit of a product into the cart.
    AddToCart(Product),
    /// Drop the line with this product id, if any.
    RemoveFromCart(String),
    /// Set a line's quantity verbatim; `quantity <= 0` removes the line.
    UpdateQuantity { product_id: String, quantity: i64 },
    /// Empty the cart. The wishlist is untouched.
    ClearCart,
    /// Save a product for later. Idempotent.
    AddToWishlist(Product),
    /// Drop the entry with this product id, if any.
    RemoveFromWishlist(String),
    /// Move a saved product into the cart as a single transition.
    MoveToCart(String),
}

// =============================================================================
// Store
// =============================================================================

/// The cart/wishlist state container.
///
/// ## Invariants
/// - `cart` holds at most one line per product id
/// - `wishlist` holds at most one entry per product id
/// - both collections keep insertion order (order first added)
///
/// ## Lifecycle
/// Created empty at session start, rebuilt from scratch each session.
/// One instance serves the whole session; `nova-app` wraps it for sharing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Store {
    cart: Vec<CartLine>,
    wishlist: Vec<WishlistEntry>,
}

impl Store {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Store::default()
    }

    /// Applies a request to the store.
    ///
    /// This is the single transition function: total over all inputs, never
    /// fails, never panics. Unknown product ids leave the state unchanged.
    pub fn apply(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::AddToCart(product) => self.add_to_cart(product),
            StoreRequest::RemoveFromCart(product_id) => self.remove_from_cart(&product_id),
            StoreRequest::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(&product_id, quantity),
            StoreRequest::ClearCart => self.cart.clear(),
            StoreRequest::AddToWishlist(product) => self.add_to_wishlist(product),
            StoreRequest::RemoveFromWishlist(product_id) => {
                self.remove_from_wishlist(&product_id);
            }
            StoreRequest::MoveToCart(product_id) => self.move_to_cart(&product_id),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions (private - all writes go through `apply`)
    // -------------------------------------------------------------------------

    /// Merge rule: increment in place when the product is already carted
    /// (position unchanged), otherwise append a fresh line with quantity 1.
    fn add_to_cart(&mut self, product: Product) {
        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }
        self.cart.push(CartLine::new(product));
    }

    fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity verbatim - no clamping, no upper bound. Non-positive
    /// quantities normalize to removal; unknown ids are a no-op.
    fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    fn add_to_wishlist(&mut self, product: Product) {
        if self.wishlist.iter().any(|e| e.product.id == product.id) {
            return;
        }
        self.wishlist.push(WishlistEntry::new(product));
    }

    /// Returns the removed entry so `move_to_cart` can hand the snapshot on.
    fn remove_from_wishlist(&mut self, product_id: &str) -> Option<WishlistEntry> {
        let pos = self
            .wishlist
            .iter()
            .position(|e| e.product.id == product_id)?;
        Some(self.wishlist.remove(pos))
    }

    /// Single transition: the entry leaves the wishlist and merges into the
    /// cart under the same rule as `AddToCart`. An absent id changes nothing.
    fn move_to_cart(&mut self, product_id: &str) {
        if let Some(entry) = self.remove_from_wishlist(product_id) {
            self.add_to_cart(entry.product);
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The cart lines, in the order first added. Read-only snapshot.
    #[inline]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// The wishlist entries, in the order first added. Read-only snapshot.
    #[inline]
    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    /// Checks if both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty() && self.wishlist.is_empty()
    }

    /// Number of distinct cart lines.
    pub fn cart_line_count(&self) -> usize {
        self.cart.len()
    }

    /// Total units across all cart lines (the cart badge number).
    pub fn cart_total_quantity(&self) -> i64 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal across all lines.
    pub fn cart_subtotal(&self) -> Money {
        self.cart
            .iter()
            .map(CartLine::line_total)
            .fold(Money::zero(), |acc, m| acc + m)
    }

    /// Total markdown savings across all cart lines.
    pub fn cart_savings(&self) -> Money {
        self.cart
            .iter()
            .map(CartLine::line_saving)
            .fold(Money::zero(), |acc, m| acc + m)
    }

    /// Number of wishlist entries.
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Quantity of a product in the cart, `None` when not carted.
    pub fn cart_quantity_of(&self, product_id: &str) -> Option<i64> {
        self.cart
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.quantity)
    }

    /// Checks if a product is saved on the wishlist (drives the "♡" toggle).
    pub fn wishlist_contains(&self, product_id: &str) -> bool {
        self.wishlist.iter().any(|e| e.product.id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
