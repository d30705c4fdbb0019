//! `maisonops-catalog` — the shared catalog engine.
//!
//! One catalog kind (products, materials, manufacturers) is one
//! [`CatalogStore`]: an owned record collection, the current filter
//! criteria, and an eagerly recomputed visible projection. Entity crates
//! plug in by implementing [`CatalogEntity`] for their record type.

pub mod filter;
pub mod note;
pub mod store;

pub use filter::{labels_match, text_matches, LabelMatch};
pub use note::Note;
pub use store::{CatalogEntity, CatalogStore, Criteria};
