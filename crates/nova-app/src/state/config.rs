//! # Configuration State
//!
//! Shop-wide settings: display name, currency, shipping policy.
//! Read-only after initialization.

use serde::Serialize;

use nova_core::{CURRENCY_CODE, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

/// Shop configuration handed to the shell and used at checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    pub store_name: String,
    pub currency_code: String,
    pub flat_shipping_cents: i64,
    pub free_shipping_threshold_cents: i64,
}

impl ShopConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `NOVA_STORE_NAME`: Override the display name
    /// - `NOVA_FLAT_SHIPPING_CENTS`: Override the flat shipping charge
    pub fn from_env() -> Self {
        let mut config = ShopConfig::default();

        if let Ok(store_name) = std::env::var("NOVA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(cents) = std::env::var("NOVA_FLAT_SHIPPING_CENTS") {
            if let Ok(cents) = cents.parse::<i64>() {
                config.flat_shipping_cents = cents;
            }
        }

        config
    }

    /// Shipping charge for a given cart subtotal.
    pub fn shipping_for(&self, subtotal_cents: i64) -> i64 {
        if subtotal_cents >= self.free_shipping_threshold_cents {
            0
        } else {
            self.flat_shipping_cents
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Nova Gadgets".to_string(),
            currency_code: CURRENCY_CODE.to_string(),
            flat_shipping_cents: FLAT_SHIPPING_CENTS,
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD_CENTS,
        }
    }
}

/// Session-owned configuration state. Read-only after initialization, so no
/// lock is needed - clones are cheap and commands take snapshots.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: ShopConfig,
}

impl ConfigState {
    /// Wraps a configuration.
    pub fn new(config: ShopConfig) -> Self {
        ConfigState { config }
    }

    /// The active configuration.
    pub fn get(&self) -> &ShopConfig {
        &self.config
    }
}
