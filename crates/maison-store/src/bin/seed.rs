//! # Seed Data Generator
//!
//! Populates a file-backed store with demo boutique data for development.
//!
//! ## Usage
//! ```bash
//! # Seed into ./data (default)
//! cargo run -p maison-store --bin seed
//!
//! # Specify a storage directory
//! cargo run -p maison-store --bin seed -- --dir ./demo-data
//! ```
//!
//! ## Generated Data
//! - A boutique catalog across every category (gowns, dresses, bridal,
//!   accessories, footwear) with varied prices, ratings and sales figures
//! - A user table with one admin, one staff member and a handful of clients
//! - The default USD currency configuration

use std::env;

use tracing::info;

use maison_core::{Category, CurrencyConfig, NewProduct, NewUser, ProductPatch, Role};
use maison_store::{
    CatalogStore, CurrencyStore, JsonFileBackend, Storage, StoreResult, UserStore,
};

/// Demo catalog: (name, category, price in cents, stock, rating, sales).
const PRODUCTS: &[(&str, Category, i64, i64, u8, i64)] = &[
    ("Silk Evening Gown", Category::Gowns, 249_900, 3, 5, 41),
    ("Embroidered Ball Gown", Category::Gowns, 420_000, 2, 5, 12),
    ("Velvet Column Gown", Category::Gowns, 189_000, 4, 4, 27),
    ("Linen Day Dress", Category::Dresses, 38_000, 12, 4, 88),
    ("Pleated Midi Dress", Category::Dresses, 52_500, 9, 5, 64),
    ("Wrap Tea Dress", Category::Dresses, 44_000, 7, 3, 35),
    ("Ivory Lace Bridal Set", Category::Bridal, 610_000, 1, 5, 6),
    ("Tulle Veil", Category::Bridal, 72_000, 5, 5, 19),
    ("Pearl Hairpin", Category::Accessories, 9_900, 30, 4, 152),
    ("Silk Scarf", Category::Accessories, 15_500, 22, 5, 97),
    ("Opera Gloves", Category::Accessories, 21_000, 14, 4, 43),
    ("Satin Heels", Category::Footwear, 98_000, 8, 5, 58),
    ("Ballet Flats", Category::Footwear, 61_000, 11, 4, 76),
];

/// Demo users: (name, email, role).
const USERS: &[(&str, &str, Role)] = &[
    ("Ava Laurent", "ava@maison.shop", Role::Admin),
    ("Iris Moreau", "iris@maison.shop", Role::Staff),
    ("Noor Haddad", "noor@example.com", Role::Client),
    ("Elena Vasquez", "elena@example.com", Role::Client),
    ("June Park", "june@example.com", Role::Client),
];

fn seed(storage: Storage) -> StoreResult<()> {
    let mut catalog = CatalogStore::load(storage.clone())?;
    for &(name, category, price_cents, stock, rating, sales) in PRODUCTS {
        let product = catalog.add(NewProduct {
            name: name.to_string(),
            price_cents,
            image: format!(
                "/images/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            ),
            category,
            stock,
        })?;
        // add() defaults rating=5 / sales=0; patch in the demo figures so
        // the top-rated and best-selling sorts have something to show.
        catalog.update(
            product.id,
            ProductPatch {
                rating: Some(rating),
                ..ProductPatch::default()
            },
        )?;
        catalog.record_sale(product.id, sales)?;
        // record_sale walks stock down; restore the intended level.
        catalog.update(
            product.id,
            ProductPatch {
                stock: Some(stock),
                ..ProductPatch::default()
            },
        )?;
    }
    info!(count = catalog.list().len(), "Catalog seeded");

    let mut users = UserStore::load(storage.clone())?;
    for &(name, email, role) in USERS {
        users.add(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role,
        })?;
    }
    info!(count = users.list().len(), "Users seeded");

    let mut currency = CurrencyStore::load(storage)?;
    currency.set(CurrencyConfig::default())?;
    info!("Currency configuration seeded");

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let dir = args
        .iter()
        .position(|a| a == "--dir")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
        .unwrap_or("./data");

    info!(dir, "Seeding demo data");
    let storage = Storage::new(JsonFileBackend::new(dir));

    if let Err(e) = seed(storage) {
        tracing::error!("Seeding failed: {e}");
        std::process::exit(1);
    }

    info!("Done");
}
