//! # Cart/Wishlist State
//!
//! Session wrapper around the pure [`Store`] from nova-core.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The shell may invoke commands from more than one event thread
//! 2. Only one command should mutate the store at a time
//! 3. Every transition runs to completion under the lock, so there is
//!    never an observable half-applied request
//!
//! ## Why Not RwLock?
//! Nearly every store operation is a write (add, update, move); a RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use nova_core::Store;

// =============================================================================
// Store State
// =============================================================================

/// Session-owned cart/wishlist state.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates a new empty store state.
    pub fn new() -> Self {
        StoreState {
            store: Arc::new(Mutex::new(Store::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = store_state.with_store(|s| s.cart_total_quantity());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.apply(StoreRequest::ClearCart));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub savings_cents: i64,
}

impl From<&Store> for CartTotals {
    fn from(store: &Store) -> Self {
        CartTotals {
            line_count: store.cart_line_count(),
            total_quantity: store.cart_total_quantity(),
            subtotal_cents: store.cart_subtotal().cents(),
            savings_cents: store.cart_savings().cents(),
        }
    }
}
