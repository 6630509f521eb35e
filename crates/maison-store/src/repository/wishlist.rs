//! # Wishlist Store
//!
//! A deduplicated set of product ids with insertion order preserved for
//! display. Membership is what matters; order is cosmetic.

use tracing::debug;

use crate::error::StoreResult;
use crate::storage::{keys, Storage};

/// Store for the wishlist.
#[derive(Debug)]
pub struct WishlistStore {
    ids: Vec<u64>,
    storage: Storage,
}

impl WishlistStore {
    /// Loads the wishlist from storage (empty when the key is absent).
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let mut ids: Vec<u64> = storage.get_json(keys::WISHLIST)?.unwrap_or_default();

        // Defensive dedup on load; the store never writes duplicates itself.
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));

        Ok(WishlistStore { ids, storage })
    }

    /// Product ids in insertion order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Membership check.
    pub fn contains(&self, product_id: u64) -> bool {
        self.ids.contains(&product_id)
    }

    /// Adds a product id. Adding a present id is a no-op (no duplicate,
    /// no persistence churn).
    pub fn add(&mut self, product_id: u64) -> StoreResult<()> {
        if self.contains(product_id) {
            return Ok(());
        }
        self.ids.push(product_id);
        self.persist()?;
        debug!(product_id, "Wishlist add");
        Ok(())
    }

    /// Removes a product id. Removing an absent id is a no-op.
    pub fn remove(&mut self, product_id: u64) -> StoreResult<()> {
        let before = self.ids.len();
        self.ids.retain(|id| *id != product_id);
        if self.ids.len() != before {
            self.persist()?;
            debug!(product_id, "Wishlist remove");
        }
        Ok(())
    }

    /// Toggles membership; returns the new membership state.
    pub fn toggle(&mut self, product_id: u64) -> StoreResult<bool> {
        if self.contains(product_id) {
            self.remove(product_id)?;
            Ok(false)
        } else {
            self.add(product_id)?;
            Ok(true)
        }
    }

    /// Empties the wishlist.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.ids.clear();
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        self.storage.set_json(keys::WISHLIST, &self.ids)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
