//! `maisonops-manufacturers` — the supplier/manufacturer directory.

pub mod manufacturer;

pub use manufacturer::{
    ContactStatus, Location, Manufacturer, ManufacturerCatalog, ManufacturerCategory,
    ManufacturerCriteria, ManufacturerDraft, ManufacturerId, ManufacturerPatch,
};
