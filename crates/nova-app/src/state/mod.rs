//! # State Module
//!
//! Per-session state containers.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each concern gets its
//! own container:
//!
//! 1. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 2. **Easier Testing**: Each container can be built in isolation
//! 3. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                         App (built once per session)                    │
//! │          ┌──────────────────┬──────────────────┬──────────────┐         │
//! │          ▼                  ▼                  ▼              ▼         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐ ┌────────────┐   │
//! │  │ CatalogState │  │  StoreState  │  │ SessionState │ │ConfigState │   │
//! │  │              │  │              │  │              │ │            │   │
//! │  │ Arc<RwLock<  │  │  Arc<Mutex<  │  │  Arc<Mutex<  │ │ store name │   │
//! │  │   Catalog    │  │    Store     │  │ Option<User> │ │ shipping   │   │
//! │  │ >>           │  │  >>          │  │ >>           │ │ policy     │   │
//! │  └──────────────┘  └──────────────┘  └──────────────┘ └────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: RwLock - storefront reads dominate, admin writes rare │
//! │  • StoreState: Mutex - nearly every cart operation is a write          │
//! │  • SessionState: Mutex - tiny critical sections                        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;
mod store;

pub use catalog::CatalogState;
pub use config::{ConfigState, ShopConfig};
pub use session::SessionState;
pub use store::{CartTotals, StoreState};
