//! `maisonops-app` — composition root.
//!
//! Owns the three catalog stores. No global singletons: every store is
//! constructed explicitly with injected initial data, so tests and future
//! storage collaborators plug in behind the same surface.

pub mod fixtures;
pub mod summary;

use maisonops_catalog::CatalogStore;
use maisonops_manufacturers::Manufacturer;
use maisonops_materials::Material;
use maisonops_products::Product;

/// Application state: one store per catalog kind.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub products: CatalogStore<Product>,
    pub materials: CatalogStore<Material>,
    pub manufacturers: CatalogStore<Manufacturer>,
}

impl AppState {
    pub fn new(
        products: CatalogStore<Product>,
        materials: CatalogStore<Material>,
        manufacturers: CatalogStore<Manufacturer>,
    ) -> Self {
        Self {
            products,
            materials,
            manufacturers,
        }
    }

    /// State seeded from the fixture data (lost at process end; a real
    /// deployment would hang a storage collaborator behind the same calls).
    pub fn seeded() -> Self {
        Self::new(
            CatalogStore::new(fixtures::products()),
            CatalogStore::new(fixtures::materials()),
            CatalogStore::new(fixtures::manufacturers()),
        )
    }
}
