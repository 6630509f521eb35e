//! # maison-store: Persistence Layer for Maison
//!
//! This crate provides the persistence surface for the Maison storefront:
//! a string-keyed JSON key-value store (the browser local-storage analog)
//! and the stores that own each persisted collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Maison Data Flow                                 │
//! │                                                                         │
//! │  UI event (add product, toggle wishlist, sign in)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    maison-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Storage    │    │    Stores     │    │     Keys     │  │   │
//! │  │   │ (storage.rs)  │    │ (repository/) │    │              │  │   │
//! │  │   │               │    │               │    │ products     │  │   │
//! │  │   │ KvBackend     │◄───│ CatalogStore  │    │ users        │  │   │
//! │  │   │ Memory/File   │    │ UserStore     │    │ wishlist     │  │   │
//! │  │   │               │    │ SessionStore  │    │ userRole ... │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  key → JSON string  (memory map, or one <key>.json file per key)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Backend trait, memory/file backends, typed `Storage` handle
//! - [`error`] - Store error types
//! - [`repository`] - Store implementations (catalog, users, wishlist, ...)
//!
//! ## Atomicity Contract
//!
//! Every mutating operation either fully succeeds (collection mutated and
//! persisted, synchronously, before the call returns) or fails before any
//! mutation (validation, not-found, invariant violation). There is no retry
//! policy anywhere; persistence failures propagate to the caller once.
//!
//! ## Usage
//!
//! ```rust
//! use maison_core::{Category, NewProduct};
//! use maison_store::storage::{MemoryBackend, Storage};
//! use maison_store::CatalogStore;
//!
//! let storage = Storage::new(MemoryBackend::default());
//! let mut catalog = CatalogStore::load(storage)?;
//!
//! let gown = catalog.add(NewProduct {
//!     name: "Silk Evening Gown".into(),
//!     price_cents: 249_900,
//!     image: "/images/gown-01.jpg".into(),
//!     category: Category::Gowns,
//!     stock: 3,
//! })?;
//! assert!(gown.visible);
//! # Ok::<(), maison_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use storage::{JsonFileBackend, KvBackend, MemoryBackend, Storage};

// Store re-exports for convenience
pub use repository::catalog::CatalogStore;
pub use repository::currency::CurrencyStore;
pub use repository::session::SessionStore;
pub use repository::theme::{Theme, ThemeStore};
pub use repository::users::UserStore;
pub use repository::wishlist::WishlistStore;
