//! # Commands
//!
//! The functions the UI shell invokes, grouped by screen:
//!
//! - [`catalog`] - product browsing and search (storefront)
//! - [`cart`] / [`wishlist`] - the cart drawer and wishlist page
//! - [`checkout`] - order placement
//! - [`auth`] - sign-in against the credential table
//! - [`admin`] - back-office management (role-gated)
//! - [`analytics`] - dashboard datasets (role-gated)
//!
//! Every command takes exactly the state containers it needs, logs its entry
//! at debug level, and returns either a camelCase DTO or an [`ApiError`].
//!
//! [`ApiError`]: crate::error::ApiError

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

pub use admin::{
    admin_products, create_product, list_orders, list_users, set_product_active, set_user_active,
    update_order_status, update_product, NewProduct, UpdateProduct,
};
pub use analytics::{dashboard, DashboardResponse};
pub use auth::{current_user, login, logout, UserDto};
pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item, CartResponse};
pub use catalog::{discounted_products, get_product, list_products, ProductDto};
pub use checkout::{place_order, OrderDto, OrderItemDto};
pub use wishlist::{
    add_to_wishlist, get_wishlist, move_to_cart, remove_from_wishlist, StoreResponse,
    WishlistResponse,
};
