//! # Store Implementations
//!
//! One module per persisted collection. Each store owns its collection
//! exclusively, loads it from storage on construction, and persists the
//! whole collection synchronously after every accepted mutation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store          Owns               Persisted under                      │
//! │  ─────          ────               ───────────────                      │
//! │  CatalogStore   Vec<Product>       "products"                           │
//! │  UserStore      Vec<UserRecord>    "users"                              │
//! │  WishlistStore  Vec<u64>           "wishlist"                           │
//! │  SessionStore   Option<Session>    "userRole"/"userEmail"/"isLoggedIn"  │
//! │  CurrencyStore  CurrencyConfig     "app-currency"                       │
//! │  ThemeStore     Theme              "theme"                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod currency;
pub mod session;
pub mod theme;
pub mod users;
pub mod wishlist;
