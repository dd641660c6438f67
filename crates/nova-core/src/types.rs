//! # Domain Types
//!
//! Core domain types used throughout the Nova Gadgets shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  sku (business) │   │  order_number   │   │  email          │       │
//! │  │  name, brand    │   │  status         │   │  role           │       │
//! │  │  price_cents    │   │  total_cents    │   │  password (mock)│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Rating       │   │   OrderStatus   │   │    UserRole     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tenths (u8)    │   │  Pending        │   │  Admin          │       │
//! │  │  45 = 4.5 stars │   │  ...            │   │  Customer       │       │
//! │  └─────────────────┘   │  Cancelled      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for relations and lookups
//! - Business ID: (sku, order_number, email) - human-readable, potentially mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Star rating represented in tenths of a star.
///
/// ## Why Tenths?
/// 1 tenth = 0.1 star, 45 tenths = 4.5 stars
/// Integer tenths survive JSON round-trips exactly; a float rating would not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating from tenths of a star.
    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        Rating(tenths)
    }

    /// Returns the rating in tenths.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating as stars (for display only).
    #[inline]
    pub fn stars(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Unrated.
    #[inline]
    pub const fn zero() -> Self {
        Rating(0)
    }

    /// Checks if the product has no rating yet.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::zero()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category for storefront browsing and admin filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phones,
    Laptops,
    Tablets,
    Audio,
    Wearables,
    Accessories,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Category; 6] = [
        Category::Phones,
        Category::Laptops,
        Category::Tablets,
        Category::Audio,
        Category::Wearables,
        Category::Accessories,
    ];

    /// Human-readable label for navigation and admin tables.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Phones => "Phones",
            Category::Laptops => "Laptops",
            Category::Tablets => "Tablets",
            Category::Audio => "Audio",
            Category::Wearables => "Wearables",
            Category::Accessories => "Accessories",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown on product cards and in the cart.
    pub name: String,

    /// Optional long description for the product detail page.
    pub description: Option<String>,

    /// Brand name ("Apple", "Samsung", ...).
    pub brand: String,

    /// Storefront category.
    pub category: Category,

    /// Current price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Pre-markdown price in cents. Present only when the product is on sale;
    /// drives the strikethrough price and the "-N%" badge.
    pub original_price_cents: Option<i64>,

    /// Star rating in tenths (45 = 4.5 stars).
    pub rating_tenths: u8,

    /// Image path/URL consumed opaquely by the UI shell.
    pub image_url: String,

    /// Whether the product is currently in stock. Display data only - the
    /// cart layer does not enforce it.
    pub in_stock: bool,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-markdown price, if the product is on sale.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Returns the rating.
    #[inline]
    pub fn rating(&self) -> Rating {
        Rating::from_tenths(self.rating_tenths)
    }

    /// Checks whether the product carries a genuine markdown.
    pub fn is_discounted(&self) -> bool {
        match self.original_price_cents {
            Some(original) => original > self.price_cents,
            None => false,
        }
    }

    /// Markdown depth in basis points (1500 = 15% off), 0 when not on sale.
    pub fn discount_bps(&self) -> u32 {
        match self.original_price() {
            Some(original) => self.price().percent_off_bps(original),
            None => 0,
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, not yet picked up by fulfillment.
    Pending,
    /// Being packed.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses admit no further transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the back-office may move an order from this status to `next`.
    ///
    /// ## Rule
    /// Terminal orders are frozen; everything else may move to any other
    /// status (the fulfillment dropdown is deliberately permissive).
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        !self.is_terminal() && *self != next
    }

    /// Human-readable label for admin tables.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item in an order.
/// Uses snapshot pattern to freeze product data at time of purchase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// SKU at time of purchase (frozen).
    pub sku_snapshot: String,
    /// Product name at time of purchase (frozen).
    pub name_snapshot: String,
    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,
    /// Quantity purchased.
    pub quantity: i64,
    /// Line total (unit_price × quantity).
    pub line_total_cents: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// A customer order, as shown in the back-office order table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    /// Human-readable business identifier ("NV-1042").
    pub order_number: String,
    pub customer_id: String,
    /// Customer name at time of purchase (frozen).
    pub customer_name: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// User
// =============================================================================

/// Account role. Gates the back-office commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Customer,
}

/// A shop account.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Demo credential, stored in the clear. The credential table is seeded
    /// fixture data; there is no registration or hashing in this system.
    pub password: String,
    pub role: UserRole,
    /// Whether the account may sign in (soft delete).
    pub is_active: bool,
    #[ts(as = "String")]
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Checks whether this account may use the back-office.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
