//! # Catalog Store
//!
//! Owns the product collection and its derived visible-product view.
//!
//! ## Identity
//! Product ids are monotonic: the store tracks the highest id it has seen
//! (including across reloads) and assigns `max + 1`. Id order therefore
//! correlates with creation order, which the catalog's `Newest` sort relies
//! on, and an id is never reused even after a delete.

use tracing::debug;

use maison_core::{
    validation, CoreError, NewProduct, Product, ProductPatch,
};

use crate::error::{StoreError, StoreResult};
use crate::storage::{keys, Storage};

/// Store for the product catalog.
///
/// ## Usage
/// ```rust,ignore
/// let mut catalog = CatalogStore::load(storage)?;
///
/// let gown = catalog.add(new_product)?;
/// catalog.set_visibility(gown.id, false)?;
/// let shop_page = catalog.visible();
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    next_id: u64,
    storage: Storage,
}

impl CatalogStore {
    /// Loads the catalog from storage (empty when the key is absent).
    pub fn load(storage: Storage) -> StoreResult<Self> {
        let products: Vec<Product> = storage.get_json(keys::PRODUCTS)?.unwrap_or_default();
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        debug!(count = products.len(), "Catalog loaded");
        Ok(CatalogStore {
            products,
            next_id,
            storage,
        })
    }

    /// Full collection, insertion order. The admin dashboard view.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Derived public view: the subsequence with `visible == true`.
    ///
    /// Recomputed from the collection on every call - never a separately
    /// maintained cache, so it cannot diverge.
    pub fn visible(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.visible).collect()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Creates a product.
    ///
    /// ## Defaults
    /// - fresh monotonic id
    /// - `rating = 5`, `sales = 0`, `visible = true`
    ///
    /// ## Errors
    /// `ValidationError` when the name is empty/too long or price/stock is
    /// negative; nothing is mutated or persisted on rejection.
    pub fn add(&mut self, new: NewProduct) -> StoreResult<Product> {
        validation::validate_product_name(&new.name)?;
        validation::validate_price_cents(new.price_cents)?;
        validation::validate_stock(new.stock)?;

        let product = Product {
            id: self.next_id,
            name: new.name,
            price_cents: new.price_cents,
            image: new.image,
            category: new.category,
            rating: 5,
            sales: 0,
            stock: new.stock,
            visible: true,
            created_at: chrono::Utc::now(),
        };
        self.next_id += 1;
        self.products.push(product.clone());
        self.persist()?;

        debug!(id = product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Merges a partial update into a product.
    ///
    /// ## Errors
    /// `NotFound` when the id is absent; `ValidationError` when a patched
    /// field is malformed. Either way, nothing is mutated.
    pub fn update(&mut self, id: u64, patch: ProductPatch) -> StoreResult<()> {
        if let Some(name) = &patch.name {
            validation::validate_product_name(name)?;
        }
        if let Some(price_cents) = patch.price_cents {
            validation::validate_price_cents(price_cents)?;
        }
        if let Some(stock) = patch.stock {
            validation::validate_stock(stock)?;
        }
        if let Some(rating) = patch.rating {
            validation::validate_rating(rating)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(visible) = patch.visible {
            product.visible = visible;
        }

        self.persist()?;
        debug!(id, "Product updated");
        Ok(())
    }

    /// Removes a product.
    pub fn remove(&mut self, id: u64) -> StoreResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == before {
            return Err(StoreError::not_found("Product", id));
        }

        self.persist()?;
        debug!(id, "Product removed");
        Ok(())
    }

    /// Shows or hides a product in the public catalog.
    pub fn set_visibility(&mut self, id: u64, visible: bool) -> StoreResult<()> {
        self.update(
            id,
            ProductPatch {
                visible: Some(visible),
                ..ProductPatch::default()
            },
        )
    }

    /// Records a completed sale of `quantity` units.
    ///
    /// Increments `sales` (which drives the best-selling sort) and walks
    /// `stock` down to a floor of zero. Called by the checkout flow once an
    /// order completes.
    pub fn record_sale(&mut self, id: u64, quantity: i64) -> StoreResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;

        product.sales += quantity;
        product.stock = (product.stock - quantity).max(0);

        self.persist()?;
        debug!(id, quantity, "Sale recorded");
        Ok(())
    }

    /// Persists the full collection. Called after every accepted mutation,
    /// synchronously, before the mutating call returns.
    fn persist(&self) -> StoreResult<()> {
        self.storage.set_json(keys::PRODUCTS, &self.products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use maison_core::Category;

    fn new_product(name: &str, price_cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price_cents,
            image: "/images/test.jpg".to_string(),
            category: Category::Gowns,
            stock: 5,
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::load(Storage::new(MemoryBackend::default())).unwrap()
    }

    #[test]
    fn test_add_defaults() {
        let mut catalog = store();
        let product = catalog.add(new_product("Silk Evening Gown", 249_900)).unwrap();

        assert_eq!(product.rating, 5);
        assert_eq!(product.sales, 0);
        assert!(product.visible);
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut catalog = store();
        let a = catalog.add(new_product("A", 100)).unwrap();
        let b = catalog.add(new_product("B", 200)).unwrap();
        assert!(b.id > a.id);

        catalog.remove(b.id).unwrap();
        let c = catalog.add(new_product("C", 300)).unwrap();
        assert!(c.id > b.id);
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut catalog = store();
        let err = catalog.add(new_product("Bad", -1)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::Validation(_))
        ));
        // No partial mutation.
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_update_merges_fields() {
        let mut catalog = store();
        let product = catalog.add(new_product("Gown", 100_000)).unwrap();

        catalog
            .update(
                product.id,
                ProductPatch {
                    price_cents: Some(90_000),
                    rating: Some(4),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        let updated = catalog.get(product.id).unwrap();
        assert_eq!(updated.price_cents, 90_000);
        assert_eq!(updated.rating, 4);
        assert_eq!(updated.name, "Gown"); // untouched
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut catalog = store();
        let err = catalog.update(99, ProductPatch::default()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_rejects_bad_patch_without_mutation() {
        let mut catalog = store();
        let product = catalog.add(new_product("Gown", 100_000)).unwrap();

        let err = catalog
            .update(
                product.id,
                ProductPatch {
                    price_cents: Some(-5),
                    name: Some("New Name".to_string()),
                    ..ProductPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(CoreError::Validation(_))));

        // The valid half of the patch was not applied either.
        assert_eq!(catalog.get(product.id).unwrap().name, "Gown");
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let mut catalog = store();
        assert!(catalog.remove(42).is_err());
    }

    #[test]
    fn test_visible_is_derived_subset() {
        let mut catalog = store();
        let a = catalog.add(new_product("A", 100)).unwrap();
        let b = catalog.add(new_product("B", 200)).unwrap();

        assert_eq!(catalog.visible().len(), 2);

        catalog.set_visibility(a.id, false).unwrap();
        let visible: Vec<u64> = catalog.visible().iter().map(|p| p.id).collect();
        assert_eq!(visible, vec![b.id]);

        // Toggling twice returns the product to the original membership.
        catalog.set_visibility(a.id, true).unwrap();
        assert_eq!(catalog.visible().len(), 2);
        assert!(catalog.visible().iter().all(|p| p.visible));
    }

    #[test]
    fn test_record_sale_floors_stock_at_zero() {
        let mut catalog = store();
        let product = catalog.add(new_product("Gown", 100)).unwrap();

        catalog.record_sale(product.id, 8).unwrap();
        let after = catalog.get(product.id).unwrap();
        assert_eq!(after.sales, 8);
        assert_eq!(after.stock, 0); // 5 - 8 floored
    }

    #[test]
    fn test_persists_on_every_mutation() {
        let storage = Storage::new(MemoryBackend::default());
        let mut catalog = CatalogStore::load(storage.clone()).unwrap();
        let product = catalog.add(new_product("Gown", 100)).unwrap();

        // A fresh store over the same backend sees the mutation.
        let reloaded = CatalogStore::load(storage).unwrap();
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.get(product.id).unwrap().name, "Gown");
    }
}
