//! `maisonops-products` — the product catalog.
//!
//! Products carry pricing and a cached margin derived from it; the margin is
//! recomputed from full state after every mutation, never patched directly.

pub mod product;

pub use product::{
    Product, ProductCatalog, ProductCriteria, ProductDraft, ProductId, ProductPatch, ProductStatus,
};
