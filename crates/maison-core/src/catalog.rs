//! # Catalog View Pipeline
//!
//! The pure filter/sort pipeline behind the shop page.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    derive_view(products, query)                         │
//! │                                                                         │
//! │  visible products                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. search text: case-insensitive substring on name OR category label  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. category filter (skipped for "All")                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. price range, inclusive both ends                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. stable sort by the selected key                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ordered Vec<Product> (input untouched)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! Every step is a pure predicate or comparator and the sort is stable, so
//! repeated renders of the same state produce identical output. Ties keep
//! their relative input order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, Product};

// =============================================================================
// Query Types
// =============================================================================

/// Category filter. `All` is the sentinel the category dropdown starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Inclusive price range in cents. Defaults to `[0, i64::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange {
            min_cents: 0,
            max_cents: i64::MAX,
        }
    }
}

impl PriceRange {
    /// Inclusive containment on both ends.
    pub fn contains(&self, price_cents: i64) -> bool {
        price_cents >= self.min_cents && price_cents <= self.max_cents
    }
}

/// Sort key for the shop page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Default: no reordering, insertion order preserved.
    #[default]
    Featured,
    /// Ascending numeric compare on price.
    PriceAsc,
    /// Descending numeric compare on price.
    PriceDesc,
    /// Descending compare on historical sales.
    BestSelling,
    /// Descending compare on rating.
    TopRated,
    /// Descending compare on id (id order correlates with creation order).
    Newest,
}

/// A complete shop-page query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Search text; empty matches everything.
    pub search: String,

    /// Category filter.
    pub category: CategoryFilter,

    /// Inclusive price range.
    pub price: PriceRange,

    /// Sort key.
    pub sort: SortKey,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Case-insensitive substring match against name OR category label.
fn matches_search(product: &Product, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    product.name.to_lowercase().contains(needle_lower)
        || product
            .category
            .label()
            .to_lowercase()
            .contains(needle_lower)
}

/// Derives the ordered product view for a query.
///
/// Filters then stable-sorts; the input slice is never mutated. The caller
/// passes the visible-product subsequence for the public shop, or the full
/// collection for the admin dashboard.
pub fn derive_view(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| match query.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => p.category == category,
        })
        .filter(|p| query.price.contains(p.price_cents))
        .cloned()
        .collect();

    // Vec::sort_by is stable: ties keep their relative input order.
    match query.sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => view.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::BestSelling => view.sort_by(|a, b| b.sales.cmp(&a.sales)),
        SortKey::TopRated => view.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::Newest => view.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    view
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: u64, name: &str, category: Category, price_cents: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price_cents,
            image: format!("/images/{}.jpg", id),
            category,
            rating: 5,
            stock: 5,
            sales: 0,
            visible: true,
            created_at: Utc::now(),
        }
    }

    fn boutique() -> Vec<Product> {
        vec![
            product(1, "Silk Evening Gown", Category::Gowns, 90_000),
            product(2, "Linen Day Dress", Category::Dresses, 10_000),
            product(3, "Pearl Hairpin", Category::Accessories, 10_000),
            product(4, "Embroidered Ball Gown", Category::Gowns, 240_000),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let products = boutique();
        let view = derive_view(&products, &CatalogQuery::default());
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let products = boutique();
        let query = CatalogQuery {
            search: "gown".to_string(),
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);

        // "GOWN" matches case-insensitively, including via the category label.
        let query = CatalogQuery {
            search: "GOWNS".to_string(),
            ..CatalogQuery::default()
        };
        let view = derive_view(&products, &query);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let products = boutique();
        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::Accessories),
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 3);
    }

    #[test]
    fn test_price_range_inclusive() {
        let products = boutique();
        let query = CatalogQuery {
            price: PriceRange {
                min_cents: 10_000,
                max_cents: 90_000,
            },
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        // Both boundary prices are included.
        assert_eq!(ids, vec![1, 2, 3]);
    }

    /// Spec contract: prices [900, 100, 100, 2400] sorted ascending yield
    /// [100, 100, 900, 2400] with the two 100s keeping their input order.
    #[test]
    fn test_price_asc_stable() {
        let products = vec![
            product(1, "A", Category::Gowns, 900),
            product(2, "B", Category::Gowns, 100),
            product(3, "C", Category::Gowns, 100),
            product(4, "D", Category::Gowns, 2400),
        ];
        let query = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let prices: Vec<i64> = view.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, vec![100, 100, 900, 2400]);

        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]); // 2 before 3: input order kept
    }

    #[test]
    fn test_price_desc() {
        let products = boutique();
        let query = CatalogQuery {
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        // 2 and 3 tie on price; input order kept between them.
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_best_selling_desc() {
        let mut products = boutique();
        products[1].sales = 40;
        products[2].sales = 12;
        let query = CatalogQuery {
            sort: SortKey::BestSelling,
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_top_rated_desc() {
        let mut products = boutique();
        products[0].rating = 3;
        products[3].rating = 4;
        let query = CatalogQuery {
            sort: SortKey::TopRated,
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_newest_desc_by_id() {
        let products = boutique();
        let query = CatalogQuery {
            sort: SortKey::Newest,
            ..CatalogQuery::default()
        };

        let view = derive_view(&products, &query);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_input_not_mutated() {
        let products = boutique();
        let query = CatalogQuery {
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        };

        let _ = derive_view(&products, &query);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
