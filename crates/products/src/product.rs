use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maisonops_catalog::{labels_match, text_matches, CatalogEntity, CatalogStore, Criteria, LabelMatch, Note};
use maisonops_core::{DomainError, DomainResult, Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product status lifecycle. `Archived` doubles as the archived indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

/// Catalog record: Product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub collection: Option<String>,
    pub product_type: Option<String>,
    pub cost_price: f64,
    pub retail_price: f64,
    /// Derived percentage, cached; always recomputed from the two prices.
    pub margin: i64,
    pub status: ProductStatus,
    pub description: Option<String>,
    pub quantity: Option<u64>,
    pub warehouse: Option<String>,
    /// Reorder point: stock at or below this level needs a restock.
    pub restock_threshold: Option<u64>,
    pub tags: Vec<String>,
    pub notes: Vec<Note>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Is the on-hand quantity at or below the restock threshold?
    /// Products without a threshold (or without stock tracking) never flag.
    pub fn needs_restock(&self) -> bool {
        match (self.quantity, self.restock_threshold) {
            (Some(quantity), Some(threshold)) => quantity <= threshold,
            _ => false,
        }
    }
}

/// Creation payload: everything except id, timestamps, and derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub collection: Option<String>,
    pub product_type: Option<String>,
    pub cost_price: f64,
    pub retail_price: f64,
    pub status: ProductStatus,
    pub description: Option<String>,
    pub quantity: Option<u64>,
    pub warehouse: Option<String>,
    pub restock_threshold: Option<u64>,
    pub tags: Vec<String>,
}

/// Partial update; `None` fields are left untouched. `margin` is absent on
/// purpose: it is derived, never written by callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub collection: Option<String>,
    pub product_type: Option<String>,
    pub cost_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub status: Option<ProductStatus>,
    pub description: Option<String>,
    pub quantity: Option<u64>,
    pub warehouse: Option<String>,
    pub restock_threshold: Option<u64>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<Vec<Note>>,
}

/// Product filter criteria. Tag membership uses any-of semantics.
#[derive(Debug, Clone, Default)]
pub struct ProductCriteria {
    pub search: Option<String>,
    pub status: Option<ProductStatus>,
    pub collection: Option<String>,
    pub tags: Vec<String>,
    pub show_archived: bool,
}

impl Criteria for ProductCriteria {
    fn show_archived(&self) -> bool {
        self.show_archived
    }
}

/// Margin percentage from cost and retail price.
///
/// `round((retail - cost) / retail * 100)`, or 0 when retail is zero.
pub fn margin_for(cost_price: f64, retail_price: f64) -> i64 {
    if retail_price == 0.0 {
        return 0;
    }
    ((retail_price - cost_price) / retail_price * 100.0).round() as i64
}

/// SKU format rule: uppercase ASCII letters/digits/dashes, with a
/// dash-separated prefix (e.g. `TEE-001`).
fn validate_sku(sku: &str) -> DomainResult<()> {
    if sku.trim().is_empty() {
        return Err(DomainError::validation("SKU cannot be empty"));
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::validation(format!(
            "SKU must contain only uppercase letters, digits, and dashes: {sku}"
        )));
    }
    if !sku.contains('-') || sku.starts_with('-') || sku.ends_with('-') {
        return Err(DomainError::validation(format!(
            "SKU must have a dash-separated prefix (e.g. TEE-001): {sku}"
        )));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl CatalogEntity for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;
    type Criteria = ProductCriteria;

    fn generate_id() -> ProductId {
        ProductId::new(EntityId::new())
    }

    fn create(id: ProductId, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            collection: draft.collection,
            product_type: draft.product_type,
            cost_price: draft.cost_price,
            retail_price: draft.retail_price,
            margin: 0, // recomputed by the store right after
            status: draft.status,
            description: draft.description,
            quantity: draft.quantity,
            warehouse: draft.warehouse,
            restock_threshold: draft.restock_threshold,
            tags: draft.tags,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(sku) = &patch.sku {
            self.sku = sku.clone();
        }
        if let Some(collection) = &patch.collection {
            self.collection = Some(collection.clone());
        }
        if let Some(product_type) = &patch.product_type {
            self.product_type = Some(product_type.clone());
        }
        if let Some(cost_price) = patch.cost_price {
            self.cost_price = cost_price;
        }
        if let Some(retail_price) = patch.retail_price {
            self.retail_price = retail_price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = Some(quantity);
        }
        if let Some(warehouse) = &patch.warehouse {
            self.warehouse = Some(warehouse.clone());
        }
        if let Some(restock_threshold) = patch.restock_threshold {
            self.restock_threshold = Some(restock_threshold);
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }

    fn recompute_derived(&mut self) {
        self.margin = margin_for(self.cost_price, self.retail_price);
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_sku(&self.sku)?;
        if self.cost_price < 0.0 || self.retail_price < 0.0 {
            return Err(DomainError::validation("prices cannot be negative"));
        }
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn is_archived(&self) -> bool {
        self.status == ProductStatus::Archived
    }

    fn set_archived(&mut self, archived: bool) {
        self.status = if archived {
            ProductStatus::Archived
        } else {
            ProductStatus::Active
        };
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }

    fn add_label(&mut self, label: &str) -> bool {
        if self.tags.iter().any(|t| t == label) {
            return false;
        }
        self.tags.push(label.to_string());
        true
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.sku)
    }

    fn matches(&self, criteria: &ProductCriteria) -> bool {
        if let Some(search) = &criteria.search {
            if !text_matches(search, &[&self.name, &self.sku]) {
                return false;
            }
        }
        if let Some(status) = criteria.status {
            if self.status != status {
                return false;
            }
        }
        if let Some(collection) = &criteria.collection {
            if self.collection.as_deref() != Some(collection.as_str()) {
                return false;
            }
        }
        labels_match(&self.tags, &criteria.tags, LabelMatch::Any)
    }
}

/// Product-specific catalog operations on top of the shared store.
pub trait ProductCatalog {
    /// Clone a product under a fresh id: name gets a " (Copy)" suffix, the
    /// SKU a "-COPY" suffix (deduplicated if taken), status resets to draft.
    fn duplicate(&mut self, id: ProductId) -> DomainResult<ProductId>;

    /// Duplicate every matching product; absent ids are skipped.
    fn bulk_duplicate(&mut self, ids: &[ProductId]) -> Vec<ProductId>;

    /// Is `sku` free, ignoring the product with `exclude` (for edits)?
    fn is_sku_unique(&self, sku: &str, exclude: Option<ProductId>) -> bool;

    /// Prepend a timestamped note to the product.
    fn add_note(&mut self, id: ProductId, author: &str, body: &str) -> DomainResult<()>;

    /// Distinct collection names in use across the catalog, sorted.
    fn collections(&self) -> Vec<String>;

    /// Distinct product types in use across the catalog, sorted.
    fn product_types(&self) -> Vec<String>;

    /// Distinct warehouses in use across the catalog, sorted.
    fn warehouses(&self) -> Vec<String>;
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}

impl ProductCatalog for CatalogStore<Product> {
    fn duplicate(&mut self, id: ProductId) -> DomainResult<ProductId> {
        let original = self.get(id).ok_or(DomainError::NotFound)?;
        let now = Utc::now();

        let base_sku = format!("{}-COPY", original.sku);
        let mut sku = base_sku.clone();
        let mut suffix = 2;
        while !self.is_sku_unique(&sku, None) {
            sku = format!("{base_sku}-{suffix}");
            suffix += 1;
        }

        let mut copy = original.clone();
        copy.id = Product::generate_id();
        copy.name = format!("{} (Copy)", copy.name);
        copy.sku = sku;
        copy.status = ProductStatus::Draft;
        copy.notes = Vec::new();
        copy.created_at = now;
        copy.updated_at = now;
        self.insert(copy)
    }

    fn bulk_duplicate(&mut self, ids: &[ProductId]) -> Vec<ProductId> {
        ids.iter()
            .filter_map(|&id| self.duplicate(id).ok())
            .collect()
    }

    fn is_sku_unique(&self, sku: &str, exclude: Option<ProductId>) -> bool {
        !self
            .all()
            .iter()
            .any(|p| p.sku == sku && exclude != Some(p.id))
    }

    fn add_note(&mut self, id: ProductId, author: &str, body: &str) -> DomainResult<()> {
        let product = self.get(id).ok_or(DomainError::NotFound)?;
        let mut notes = product.notes.clone();
        notes.insert(0, Note::new(author, body, Utc::now()));
        self.update(
            id,
            ProductPatch {
                notes: Some(notes),
                ..ProductPatch::default()
            },
        )
    }

    fn collections(&self) -> Vec<String> {
        distinct(self.all().iter().filter_map(|p| p.collection.as_deref()))
    }

    fn product_types(&self) -> Vec<String> {
        distinct(self.all().iter().filter_map(|p| p.product_type.as_deref()))
    }

    fn warehouses(&self) -> Vec<String> {
        distinct(self.all().iter().filter_map(|p| p.warehouse.as_deref()))
    }
}
