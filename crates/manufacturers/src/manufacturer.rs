use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maisonops_catalog::{
    labels_match, text_matches, CatalogEntity, CatalogStore, Criteria, LabelMatch, Note,
};
use maisonops_core::{DomainError, DomainResult, Entity, EntityId};

/// Manufacturer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufacturerId(pub EntityId);

impl ManufacturerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManufacturerCategory {
    RawMaterial,
    Packaging,
    Equipment,
    Services,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Pending,
    Inactive,
}

/// Postal location of a manufacturing partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub country: String,
}

/// Catalog record: Manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: ManufacturerId,
    pub name: String,
    pub category: ManufacturerCategory,
    pub contact_status: ContactStatus,
    /// Minimum order quantity.
    pub moq: u64,
    pub certifications: Vec<String>,
    pub location: Location,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub notes: Vec<Note>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManufacturerDraft {
    pub name: String,
    pub category: ManufacturerCategory,
    pub contact_status: ContactStatus,
    pub moq: u64,
    pub certifications: Vec<String>,
    pub location: Location,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManufacturerPatch {
    pub name: Option<String>,
    pub category: Option<ManufacturerCategory>,
    pub contact_status: Option<ContactStatus>,
    pub moq: Option<u64>,
    pub certifications: Option<Vec<String>>,
    pub location: Option<Location>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub notes: Option<Vec<Note>>,
}

/// Manufacturer filter criteria. Certification membership uses any-of
/// semantics: one shared certification is enough to match.
#[derive(Debug, Clone, Default)]
pub struct ManufacturerCriteria {
    pub search: Option<String>,
    pub category: Option<ManufacturerCategory>,
    pub contact_status: Option<ContactStatus>,
    pub certifications: Vec<String>,
    pub show_archived: bool,
}

impl Criteria for ManufacturerCriteria {
    fn show_archived(&self) -> bool {
        self.show_archived
    }
}

impl Entity for Manufacturer {
    type Id = ManufacturerId;

    fn id(&self) -> &ManufacturerId {
        &self.id
    }
}

impl CatalogEntity for Manufacturer {
    type Draft = ManufacturerDraft;
    type Patch = ManufacturerPatch;
    type Criteria = ManufacturerCriteria;

    fn generate_id() -> ManufacturerId {
        ManufacturerId::new(EntityId::new())
    }

    fn create(id: ManufacturerId, draft: ManufacturerDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            contact_status: draft.contact_status,
            moq: draft.moq,
            certifications: draft.certifications,
            location: draft.location,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            notes: Vec::new(),
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: &ManufacturerPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(contact_status) = patch.contact_status {
            self.contact_status = contact_status;
        }
        if let Some(moq) = patch.moq {
            self.moq = moq;
        }
        if let Some(certifications) = &patch.certifications {
            self.certifications = certifications.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(contact_person) = &patch.contact_person {
            self.contact_person = contact_person.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(website) = &patch.website {
            self.website = website.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(DomainError::validation(format!(
                "email is malformed: {}",
                self.email
            )));
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

    fn matches(&self, criteria: &ManufacturerCriteria) -> bool {
        if let Some(search) = &criteria.search {
            if !text_matches(search, &[&self.name, &self.contact_person, &self.email]) {
                return false;
            }
        }
        if let Some(category) = criteria.category {
            if self.category != category {
                return false;
            }
        }
        if let Some(contact_status) = criteria.contact_status {
            if self.contact_status != contact_status {
                return false;
            }
        }
        labels_match(&self.certifications, &criteria.certifications, LabelMatch::Any)
    }
}

/// Manufacturer-specific catalog operations on top of the shared store.
pub trait ManufacturerCatalog {
    /// Append a timestamped note to the manufacturer.
    fn add_note(&mut self, id: ManufacturerId, author: &str, body: &str) -> DomainResult<()>;
}

impl ManufacturerCatalog for CatalogStore<Manufacturer> {
    fn add_note(&mut self, id: ManufacturerId, author: &str, body: &str) -> DomainResult<()> {
        let manufacturer = self.get(id).ok_or(DomainError::NotFound)?;
        let mut notes = manufacturer.notes.clone();
        notes.push(Note::new(author, body, Utc::now()));
        self.update(
            id,
            ManufacturerPatch {
                notes: Some(notes),
                ..ManufacturerPatch::default()
            },
        )
    }
}
