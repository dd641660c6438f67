//! # Nova App Library
//!
//! The application layer the UI shell embeds: per-session state containers
//! plus the command functions the storefront and back-office invoke.
//!
//! ## Module Organization
//! ```text
//! nova_app/
//! ├── lib.rs          ◄─── You are here (App context & tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog state wrapper
//! │   ├── store.rs    ◄─── Cart/wishlist state wrapper
//! │   ├── session.rs  ◄─── Signed-in user
//! │   └── config.rs   ◄─── Shop configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product browsing/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   ├── checkout.rs ◄─── Order placement
//! │   ├── auth.rs     ◄─── Sign-in against the credential table
//! │   ├── admin.rs    ◄─── Back-office management commands
//! │   └── analytics.rs◄─── Dashboard datasets
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single state struct, each concern gets its own container and
//! every command declares exactly the state it needs. The [`App`] context
//! groups them so a session constructs everything exactly once - there are
//! no ambient singletons anywhere in this crate.

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use nova_catalog::Catalog;
use state::{CatalogState, ConfigState, SessionState, StoreState};

// =============================================================================
// App Context
// =============================================================================

/// The per-session application context.
///
/// ## Lifecycle
/// Built once when the shell starts a session, dropped when the session
/// ends. Everything inside starts from scratch each time: the catalog
/// reseeds, the cart/wishlist store is empty, nobody is signed in.
///
/// ## Usage
/// ```rust
/// use nova_app::App;
/// use nova_app::commands;
///
/// let app = App::new();
/// let products = commands::list_products(&app.catalog, None, "", None).unwrap();
/// assert!(!products.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    pub catalog: CatalogState,
    pub store: StoreState,
    pub session: SessionState,
    pub config: ConfigState,
}

impl App {
    /// Creates a session over the seeded demo catalog.
    pub fn new() -> Self {
        App::with_catalog(Catalog::demo())
    }

    /// Creates a session over a caller-supplied catalog (tests, tooling).
    pub fn with_catalog(catalog: Catalog) -> Self {
        info!("Initializing application state");

        App {
            catalog: CatalogState::new(catalog),
            store: StoreState::new(),
            session: SessionState::new(),
            config: ConfigState::default(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// =============================================================================
// Tracing Setup
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nova=trace` - Show trace for nova crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,nova=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_with_fresh_session() {
        let app = App::new();

        assert!(app.session.current().is_none());
        assert!(app.store.with_store(|s| s.is_empty()));
        assert!(app.catalog.with_catalog(|c| c.products().count() > 0));
    }

    #[test]
    fn test_app_with_empty_catalog() {
        let app = App::with_catalog(Catalog::empty());
        assert!(app.catalog.with_catalog(|c| c.products().count() == 0));
    }
}
