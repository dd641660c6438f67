//! # Catalog State
//!
//! Session wrapper around the in-memory [`Catalog`].
//!
//! ## Why RwLock?
//! Storefront traffic is overwhelmingly reads (browse, search, detail
//! pages); only back-office commands and checkout write. A RwLock lets
//! concurrent readers through while still serializing the writes.

use std::sync::{Arc, RwLock};

use nova_catalog::Catalog;

/// Session-owned catalog state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogState {
    /// Wraps a catalog for shared access.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.read().expect("Catalog lock poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.write().expect("Catalog lock poisoned");
        f(&mut catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_same_catalog() {
        let state = CatalogState::new(Catalog::demo());
        let alias = state.clone();

        let before = alias.with_catalog(|c| c.products().count());
        state.with_catalog_mut(|c| {
            let id = c.products().list_active(1)[0].id.clone();
            c.products_mut().set_active(&id, false).unwrap();
        });

        assert_eq!(alias.with_catalog(|c| c.products().count()), before - 1);
    }
}
