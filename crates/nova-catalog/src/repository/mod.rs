//! # Repositories
//!
//! Vec-backed repositories, one per entity. The operation surface mirrors
//! what a database-backed layer would expose (search, get, insert, update,
//! soft delete) so the command layer never cares that the data is mock.

mod order;
mod product;
mod user;

pub use order::OrderRepository;
pub use product::{generate_entity_id, ProductRepository};
pub use user::UserRepository;
