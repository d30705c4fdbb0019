use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maisonops_catalog::{labels_match, text_matches, CatalogEntity, Criteria, LabelMatch};
use maisonops_core::{DomainError, DomainResult, Entity, EntityId};

/// Material identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub EntityId);

impl MaterialId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Raw,
    Processed,
    Packaging,
}

/// Business status, independent of the archived flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    Active,
    Draft,
}

/// Catalog record: Material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub material_type: MaterialType,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub certifications: Vec<String>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    pub material_type: MaterialType,
    pub status: MaterialStatus,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub certifications: Vec<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialPatch {
    pub name: Option<String>,
    pub material_type: Option<MaterialType>,
    pub status: Option<MaterialStatus>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub certifications: Option<Vec<String>>,
}

/// Material filter criteria.
///
/// Certification membership uses all-of semantics: a material must carry
/// every requested certification (Organic *and* Non-GMO, not either).
#[derive(Debug, Clone, Default)]
pub struct MaterialCriteria {
    pub search: Option<String>,
    pub material_type: Option<MaterialType>,
    pub status: Option<MaterialStatus>,
    pub certifications: Vec<String>,
    pub show_archived: bool,
}

impl Criteria for MaterialCriteria {
    fn show_archived(&self) -> bool {
        self.show_archived
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &MaterialId {
        &self.id
    }
}

impl CatalogEntity for Material {
    type Draft = MaterialDraft;
    type Patch = MaterialPatch;
    type Criteria = MaterialCriteria;

    fn generate_id() -> MaterialId {
        MaterialId::new(EntityId::new())
    }

    fn create(id: MaterialId, draft: MaterialDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            material_type: draft.material_type,
            status: draft.status,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            unit: draft.unit,
            supplier: draft.supplier,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            certifications: draft.certifications,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: &MaterialPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(material_type) = patch.material_type {
            self.material_type = material_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = Some(quantity);
        }
        if let Some(unit) = &patch.unit {
            self.unit = Some(unit.clone());
        }
        if let Some(supplier) = &patch.supplier {
            self.supplier = Some(supplier.clone());
        }
        if let Some(contact_person) = &patch.contact_person {
            self.contact_person = Some(contact_person.clone());
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
        if let Some(phone) = &patch.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(website) = &patch.website {
            self.website = Some(website.clone());
        }
        if let Some(certifications) = &patch.certifications {
            self.certifications = certifications.clone();
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.price.is_some_and(|p| p < 0.0) {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if self.quantity.is_some_and(|q| q < 0.0) {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn is_archived(&self) -> bool {
        self.archived
    }

    fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
    }

    fn labels(&self) -> &[String] {
        &self.certifications
    }

    fn add_label(&mut self, label: &str) -> bool {
        if self.certifications.iter().any(|c| c == label) {
            return false;
        }
        self.certifications.push(label.to_string());
        true
    }

    fn matches(&self, criteria: &MaterialCriteria) -> bool {
        if let Some(search) = &criteria.search {
            let description = self.description.as_deref().unwrap_or("");
            if !text_matches(search, &[&self.name, description]) {
                return false;
            }
        }
        if let Some(material_type) = criteria.material_type {
            if self.material_type != material_type {
                return false;
            }
        }
        if let Some(status) = criteria.status {
            if self.status != status {
                return false;
            }
        }
        labels_match(&self.certifications, &criteria.certifications, LabelMatch::All)
    }
}
