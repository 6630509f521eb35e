//! # Currency Store
//!
//! Owns the active currency configuration, persisted under `app-currency`.
//! The reference storefront runs with the single USD configuration; the
//! store exists so the UI reads the same configuration back on boot.

use tracing::debug;

use maison_core::{CurrencyConfig, Money};

use crate::error::StoreResult;
use crate::storage::{keys, Storage};

/// Store for the active currency configuration.
#[derive(Debug)]
pub struct CurrencyStore {
    config: CurrencyConfig,
    storage: Storage,
}

impl CurrencyStore {
    /// Loads the configuration (USD defaults when the key is absent).
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let config: CurrencyConfig = storage.get_json(keys::CURRENCY)?.unwrap_or_default();
        Ok(CurrencyStore { config, storage })
    }

    /// The active configuration.
    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    /// Replaces the active configuration and persists it.
    pub fn set(&mut self, config: CurrencyConfig) -> StoreResult<()> {
        self.storage.set_json(keys::CURRENCY, &config)?;
        debug!(code = %config.code, "Currency configuration changed");
        self.config = config;
        Ok(())
    }

    /// Formats an amount with the active configuration.
    pub fn format(&self, amount: Money) -> String {
        self.config.format(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_defaults_to_usd() {
        let currency = CurrencyStore::load(Storage::new(MemoryBackend::default())).unwrap();
        assert_eq!(currency.config().code, "USD");
        assert_eq!(currency.format(Money::from_cents(249_900)), "$2,499.00");
    }

    #[test]
    fn test_configuration_persists() {
        let storage = Storage::new(MemoryBackend::default());
        {
            let mut currency = CurrencyStore::load(storage.clone()).unwrap();
            let mut config = currency.config().clone();
            config.symbol = "€".to_string();
            config.code = "EUR".to_string();
            currency.set(config).unwrap();
        }

        let currency = CurrencyStore::load(storage).unwrap();
        assert_eq!(currency.config().code, "EUR");
        assert_eq!(currency.format(Money::from_cents(1099)), "€10.99");
    }
}
