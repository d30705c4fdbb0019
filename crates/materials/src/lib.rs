//! `maisonops-materials` — the raw/processed/packaging material catalog.

pub mod material;

pub use material::{
    Material, MaterialCriteria, MaterialDraft, MaterialId, MaterialPatch, MaterialStatus,
    MaterialType,
};
