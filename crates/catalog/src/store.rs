//! Generic catalog store: one owned collection + filter criteria + the
//! derived visible projection, recomputed eagerly after every change.

use chrono::{DateTime, Utc};

use maisonops_core::{DomainError, DomainResult, Entity};

/// Filter criteria for one catalog kind.
///
/// `Default` must be the "no filters" state: everything except archived
/// records is visible.
pub trait Criteria: Clone + Default + core::fmt::Debug {
    /// Archived records are hidden unless this is enabled.
    fn show_archived(&self) -> bool;
}

/// A record kind that can live in a [`CatalogStore`].
///
/// The store drives the whole lifecycle through this trait: construction
/// from a draft, statically-checked partial updates, derived-field
/// recomputation, archival, and filter matching.
pub trait CatalogEntity: Entity + Clone + core::fmt::Debug {
    /// Payload for `add`: everything the caller supplies at creation.
    type Draft: core::fmt::Debug;
    /// Optional-field update struct; `None` fields are left untouched.
    type Patch: Clone + core::fmt::Debug;
    /// Filter criteria for this kind.
    type Criteria: Criteria;

    /// Mint a fresh identifier for a new record.
    fn generate_id() -> Self::Id;

    /// Build a record from a draft. Both timestamps start at `now`;
    /// derived fields are recomputed by the store right after.
    fn create(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merge a patch into the record. Derived fields and `updated_at` are
    /// handled by the store, not here.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Recompute cached derived fields from the record's full current state.
    ///
    /// Runs unconditionally after creation and after every patch, so
    /// implementations never need to know which inputs changed.
    fn recompute_derived(&mut self) {}

    /// Check required fields and format rules.
    fn validate(&self) -> DomainResult<()>;

    /// Refresh `updated_at`.
    fn touch(&mut self, now: DateTime<Utc>);

    fn is_archived(&self) -> bool;
    fn set_archived(&mut self, archived: bool);

    /// The record's tag/certification list.
    fn labels(&self) -> &[String];

    /// Add a label with set-union semantics. Returns `false` if it was
    /// already present.
    fn add_label(&mut self, label: &str) -> bool;

    /// Identifier that must be unique across the collection (e.g. SKU).
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Does this record satisfy every non-archival criterion? Archival
    /// visibility is applied by the store on top of this.
    fn matches(&self, criteria: &Self::Criteria) -> bool;
}

/// Authoritative collection for one catalog kind.
///
/// Single-threaded by construction: callers hold `&mut` for mutations and
/// every mutation completes (including refiltering) before returning, so
/// [`CatalogStore::filtered`] can never be stale.
#[derive(Debug, Clone)]
pub struct CatalogStore<E: CatalogEntity> {
    entities: Vec<E>,
    criteria: E::Criteria,
    visible: Vec<usize>,
}

impl<E: CatalogEntity> Default for CatalogStore<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: CatalogEntity> CatalogStore<E> {
    /// Build a store over injected initial data (fixtures, future storage
    /// collaborators). No global state; ownership sits with the caller.
    pub fn new(entities: Vec<E>) -> Self {
        let mut store = Self {
            entities,
            criteria: E::Criteria::default(),
            visible: Vec::new(),
        };
        store.refilter();
        store
    }

    // ---- reads ----------------------------------------------------------

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.entities.iter().find(|e| *e.id() == id)
    }

    pub fn all(&self) -> &[E] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn criteria(&self) -> &E::Criteria {
        &self.criteria
    }

    /// The current visible projection, in collection order.
    ///
    /// Always reflects the latest collection + criteria state; every
    /// mutation path refilters before returning.
    pub fn filtered(&self) -> Vec<&E> {
        self.visible.iter().map(|&i| &self.entities[i]).collect()
    }

    // ---- criteria -------------------------------------------------------

    /// Merge into the current criteria and refilter.
    pub fn set_criteria(&mut self, update: impl FnOnce(&mut E::Criteria)) {
        update(&mut self.criteria);
        self.refilter();
        tracing::debug!(visible = self.visible.len(), criteria = ?self.criteria, "criteria updated");
    }

    /// Reset to the default (no filters) state and refilter.
    pub fn clear_criteria(&mut self) {
        self.criteria = E::Criteria::default();
        self.refilter();
    }

    // ---- single-record mutations ----------------------------------------

    /// Create a record from a draft. Fails only on validation (missing
    /// required fields, format rules, duplicate unique key).
    pub fn add(&mut self, draft: E::Draft) -> DomainResult<E::Id> {
        let now = Utc::now();
        let mut entity = E::create(E::generate_id(), draft, now);
        entity.recompute_derived();
        self.insert(entity)
    }

    /// Insert a fully-built record (used by `add` and by catalog-specific
    /// extensions such as product duplication).
    pub fn insert(&mut self, entity: E) -> DomainResult<E::Id> {
        entity.validate()?;
        self.ensure_unique_key(&entity, None)?;
        let id = *entity.id();
        self.entities.push(entity);
        self.refilter();
        tracing::debug!(%id, total = self.entities.len(), "record added");
        Ok(id)
    }

    /// Merge a patch into the record with `id`, recompute derived fields
    /// from full state, and refresh `updated_at`.
    pub fn update(&mut self, id: E::Id, patch: E::Patch) -> DomainResult<()> {
        let idx = self.index_of(id).ok_or(DomainError::NotFound)?;

        // Patch a copy first so a validation failure leaves the record intact.
        let mut next = self.entities[idx].clone();
        next.apply_patch(&patch);
        next.recompute_derived();
        next.validate()?;
        self.ensure_unique_key(&next, Some(id))?;

        next.touch(Utc::now());
        self.entities[idx] = next;
        self.refilter();
        tracing::debug!(%id, "record updated");
        Ok(())
    }

    /// Soft-delete: hides the record from default views, nothing else.
    pub fn archive(&mut self, id: E::Id) -> DomainResult<()> {
        self.set_archived_flag(id, true)
    }

    pub fn restore(&mut self, id: E::Id) -> DomainResult<()> {
        self.set_archived_flag(id, false)
    }

    /// Permanent delete. Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, id: E::Id) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| *e.id() != id);
        let removed = self.entities.len() != before;
        if removed {
            self.refilter();
            tracing::debug!(%id, total = self.entities.len(), "record removed");
        }
        removed
    }

    // ---- bulk mutations --------------------------------------------------
    //
    // Bulk operations never fail: ids absent from the collection are
    // silently skipped and the count of touched records is returned.

    pub fn bulk_archive(&mut self, ids: &[E::Id]) -> usize {
        self.bulk_set_archived(ids, true)
    }

    pub fn bulk_restore(&mut self, ids: &[E::Id]) -> usize {
        self.bulk_set_archived(ids, false)
    }

    pub fn bulk_remove(&mut self, ids: &[E::Id]) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !ids.contains(e.id()));
        let removed = before - self.entities.len();
        if removed > 0 {
            self.refilter();
        }
        tracing::debug!(requested = ids.len(), removed, "bulk remove");
        removed
    }

    /// Add one label to every matching record, set-union semantics.
    pub fn bulk_add_label(&mut self, ids: &[E::Id], label: &str) -> usize {
        let now = Utc::now();
        let mut touched = 0;
        for entity in self.entities.iter_mut().filter(|e| ids.contains(e.id())) {
            entity.add_label(label);
            entity.touch(now);
            touched += 1;
        }
        if touched > 0 {
            self.refilter();
        }
        tracing::debug!(requested = ids.len(), touched, label, "bulk add label");
        touched
    }

    /// Apply the same patch to every matching record (collection/campaign
    /// reassignment). Each record goes through the same validation and
    /// unique-key check as [`CatalogStore::update`]; records whose patched
    /// state fails either are skipped, like absent ids.
    pub fn bulk_patch(&mut self, ids: &[E::Id], patch: &E::Patch) -> usize {
        let now = Utc::now();
        let mut touched = 0;
        let indices: Vec<usize> = (0..self.entities.len())
            .filter(|&i| ids.contains(self.entities[i].id()))
            .collect();
        for idx in indices {
            let mut next = self.entities[idx].clone();
            next.apply_patch(patch);
            next.recompute_derived();
            let id = *next.id();
            if next.validate().is_err() || self.ensure_unique_key(&next, Some(id)).is_err() {
                tracing::debug!(%id, "bulk patch skipped record failing validation");
                continue;
            }
            next.touch(now);
            self.entities[idx] = next;
            touched += 1;
        }
        if touched > 0 {
            self.refilter();
        }
        tracing::debug!(requested = ids.len(), touched, "bulk patch");
        touched
    }

    // ---- internals -------------------------------------------------------

    fn index_of(&self, id: E::Id) -> Option<usize> {
        self.entities.iter().position(|e| *e.id() == id)
    }

    fn set_archived_flag(&mut self, id: E::Id, archived: bool) -> DomainResult<()> {
        let idx = self.index_of(id).ok_or(DomainError::NotFound)?;
        let entity = &mut self.entities[idx];
        entity.set_archived(archived);
        entity.touch(Utc::now());
        self.refilter();
        tracing::debug!(%id, archived, "archival flag changed");
        Ok(())
    }

    fn bulk_set_archived(&mut self, ids: &[E::Id], archived: bool) -> usize {
        let now = Utc::now();
        let mut touched = 0;
        for entity in self.entities.iter_mut().filter(|e| ids.contains(e.id())) {
            entity.set_archived(archived);
            entity.touch(now);
            touched += 1;
        }
        if touched > 0 {
            self.refilter();
        }
        tracing::debug!(requested = ids.len(), touched, archived, "bulk archival change");
        touched
    }

    fn ensure_unique_key(&self, candidate: &E, exclude: Option<E::Id>) -> DomainResult<()> {
        let Some(key) = candidate.unique_key() else {
            return Ok(());
        };
        let clash = self.entities.iter().any(|e| {
            exclude != Some(*e.id()) && e.unique_key().is_some_and(|existing| existing == key)
        });
        if clash {
            return Err(DomainError::validation(format!("duplicate identifier: {key}")));
        }
        Ok(())
    }

    /// Full re-scan of the base collection. Eager on every mutation and
    /// criteria change; collections in this domain are hundreds of rows,
    /// not millions.
    fn refilter(&mut self) {
        let criteria = &self.criteria;
        self.visible = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, e)| (criteria.show_archived() || !e.is_archived()) && e.matches(criteria))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maisonops_core::EntityId;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    struct ItemId(EntityId);

    impl core::fmt::Display for ItemId {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Display::fmt(&self.0, f)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: ItemId,
        name: String,
        code: String,
        kind: Option<String>,
        labels: Vec<String>,
        archived: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Clone)]
    struct ItemDraft {
        name: String,
        code: String,
        kind: Option<String>,
    }

    #[derive(Debug, Clone, Default)]
    struct ItemPatch {
        name: Option<String>,
        code: Option<String>,
        kind: Option<String>,
    }

    #[derive(Debug, Clone, Default)]
    struct ItemCriteria {
        search: Option<String>,
        kind: Option<String>,
        labels: Vec<String>,
        show_archived: bool,
    }

    impl Criteria for ItemCriteria {
        fn show_archived(&self) -> bool {
            self.show_archived
        }
    }

    impl Entity for Item {
        type Id = ItemId;

        fn id(&self) -> &ItemId {
            &self.id
        }
    }

    impl CatalogEntity for Item {
        type Draft = ItemDraft;
        type Patch = ItemPatch;
        type Criteria = ItemCriteria;

        fn generate_id() -> ItemId {
            ItemId(EntityId::new())
        }

        fn create(id: ItemId, draft: ItemDraft, now: DateTime<Utc>) -> Self {
            Self {
                id,
                name: draft.name,
                code: draft.code,
                kind: draft.kind,
                labels: Vec::new(),
                archived: false,
                created_at: now,
                updated_at: now,
            }
        }

        fn apply_patch(&mut self, patch: &ItemPatch) {
            if let Some(name) = &patch.name {
                self.name = name.clone();
            }
            if let Some(code) = &patch.code {
                self.code = code.clone();
            }
            if let Some(kind) = &patch.kind {
                self.kind = Some(kind.clone());
            }
        }

        fn validate(&self) -> DomainResult<()> {
            if self.name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
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
            &self.labels
        }

        fn add_label(&mut self, label: &str) -> bool {
            if self.labels.iter().any(|l| l == label) {
                return false;
            }
            self.labels.push(label.to_string());
            true
        }

        fn unique_key(&self) -> Option<&str> {
            Some(&self.code)
        }

        fn matches(&self, criteria: &ItemCriteria) -> bool {
            if let Some(search) = &criteria.search {
                if !crate::filter::text_matches(search, &[&self.name, &self.code]) {
                    return false;
                }
            }
            if let Some(kind) = &criteria.kind {
                if self.kind.as_deref() != Some(kind.as_str()) {
                    return false;
                }
            }
            crate::filter::labels_match(&self.labels, &criteria.labels, crate::filter::LabelMatch::Any)
        }
    }

    fn draft(name: &str, code: &str, kind: Option<&str>) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            code: code.to_string(),
            kind: kind.map(|k| k.to_string()),
        }
    }

    fn seeded() -> (CatalogStore<Item>, ItemId, ItemId, ItemId) {
        let mut store = CatalogStore::default();
        let a = store.add(draft("Organic Flour", "RAW-001", Some("raw"))).unwrap();
        let b = store.add(draft("Sugar", "RAW-002", Some("raw"))).unwrap();
        let c = store.add(draft("Kraft Box", "PKG-001", Some("packaging"))).unwrap();
        (store, a, b, c)
    }

    #[test]
    fn add_stamps_timestamps_and_makes_record_visible() {
        let mut store = CatalogStore::<Item>::default();
        let id = store.add(draft("Organic Flour", "RAW-001", None)).unwrap();
        let item = store.get(id).unwrap();
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut store = CatalogStore::<Item>::default();
        let err = store.add(draft("   ", "RAW-001", None)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_unique_key() {
        let (mut store, _, _, _) = seeded();
        let err = store.add(draft("Another Flour", "RAW-001", None)).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("RAW-001")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn update_merges_patch_and_refreshes_updated_at() {
        let (mut store, a, _, _) = seeded();
        let before = store.get(a).unwrap().clone();

        store
            .update(
                a,
                ItemPatch {
                    name: Some("Stoneground Flour".to_string()),
                    ..ItemPatch::default()
                },
            )
            .unwrap();

        let after = store.get(a).unwrap();
        assert_eq!(after.name, "Stoneground Flour");
        assert_eq!(after.code, before.code);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn update_absent_id_is_not_found() {
        let mut store = CatalogStore::<Item>::default();
        let err = store
            .update(Item::generate_id(), ItemPatch::default())
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn failed_update_leaves_record_untouched() {
        let (mut store, a, b, _) = seeded();
        let before = store.get(b).unwrap().clone();

        // Patch that would duplicate a's code.
        let err = store
            .update(
                b,
                ItemPatch {
                    code: Some(store.get(a).unwrap().code.clone()),
                    ..ItemPatch::default()
                },
            )
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(store.get(b).unwrap(), &before);
    }

    #[test]
    fn archive_hides_and_restore_reveals() {
        let (mut store, a, _, _) = seeded();
        assert_eq!(store.filtered().len(), 3);

        store.archive(a).unwrap();
        assert!(store.filtered().iter().all(|e| e.id != a));
        assert_eq!(store.len(), 3, "archive never removes from the base collection");

        store.restore(a).unwrap();
        assert!(store.filtered().iter().any(|e| e.id == a));
    }

    #[test]
    fn archive_restore_preserves_all_fields_except_updated_at() {
        let (mut store, a, _, _) = seeded();
        let before = store.get(a).unwrap().clone();

        store.archive(a).unwrap();
        store.restore(a).unwrap();

        let after = store.get(a).unwrap();
        assert_eq!(after.name, before.name);
        assert_eq!(after.code, before.code);
        assert_eq!(after.kind, before.kind);
        assert_eq!(after.labels, before.labels);
        assert_eq!(after.archived, before.archived);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn archive_absent_id_is_not_found() {
        let mut store = CatalogStore::<Item>::default();
        assert_eq!(store.archive(Item::generate_id()), Err(DomainError::NotFound));
        assert_eq!(store.restore(Item::generate_id()), Err(DomainError::NotFound));
    }

    #[test]
    fn show_archived_reveals_archived_records() {
        let (mut store, a, _, _) = seeded();
        store.archive(a).unwrap();
        assert_eq!(store.filtered().len(), 2);

        store.set_criteria(|c| c.show_archived = true);
        assert_eq!(store.filtered().len(), 3);
    }

    #[test]
    fn remove_is_permanent_and_idempotent() {
        let (mut store, a, _, _) = seeded();
        assert!(store.remove(a));
        assert!(!store.remove(a));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_then_update_is_not_found() {
        let (mut store, a, _, _) = seeded();
        store.remove(a);
        assert_eq!(store.update(a, ItemPatch::default()), Err(DomainError::NotFound));
    }

    #[test]
    fn bulk_archive_touches_only_matched_ids() {
        let (mut store, a, b, c) = seeded();
        let b_before = store.get(b).unwrap().clone();

        let touched = store.bulk_archive(&[a, c, Item::generate_id()]);
        assert_eq!(touched, 2);
        assert!(store.get(a).unwrap().archived);
        assert!(store.get(c).unwrap().archived);

        let b_after = store.get(b).unwrap();
        assert!(!b_after.archived);
        assert_eq!(b_after.updated_at, b_before.updated_at);
    }

    #[test]
    fn bulk_restore_skips_absent_ids() {
        let (mut store, a, b, _) = seeded();
        store.bulk_archive(&[a, b]);
        let touched = store.bulk_restore(&[a, Item::generate_id()]);
        assert_eq!(touched, 1);
        assert!(!store.get(a).unwrap().archived);
        assert!(store.get(b).unwrap().archived);
    }

    #[test]
    fn bulk_remove_is_idempotent() {
        let (mut store, a, b, _) = seeded();
        assert_eq!(store.bulk_remove(&[a, b]), 2);
        assert_eq!(store.bulk_remove(&[a, b]), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn bulk_add_label_is_idempotent() {
        let (mut store, a, b, _) = seeded();
        store.bulk_add_label(&[a, b], "seasonal");
        let once: Vec<String> = store.get(a).unwrap().labels.clone();
        store.bulk_add_label(&[a, b], "seasonal");
        assert_eq!(store.get(a).unwrap().labels, once);
        assert_eq!(once, vec!["seasonal".to_string()]);
    }

    #[test]
    fn bulk_patch_overwrites_field_for_matched_records() {
        let (mut store, a, b, c) = seeded();
        let patch = ItemPatch {
            kind: Some("bundled".to_string()),
            ..ItemPatch::default()
        };
        let touched = store.bulk_patch(&[a, b], &patch);
        assert_eq!(touched, 2);
        assert_eq!(store.get(a).unwrap().kind.as_deref(), Some("bundled"));
        assert_eq!(store.get(b).unwrap().kind.as_deref(), Some("bundled"));
        assert_eq!(store.get(c).unwrap().kind.as_deref(), Some("packaging"));
    }

    #[test]
    fn bulk_patch_skips_records_failing_validation() {
        let (mut store, a, b, _) = seeded();
        let before = store.get(a).unwrap().clone();

        let patch = ItemPatch {
            name: Some("   ".to_string()),
            ..ItemPatch::default()
        };
        assert_eq!(store.bulk_patch(&[a, b], &patch), 0);
        assert_eq!(store.get(a).unwrap(), &before);
        assert_eq!(store.get(b).unwrap().name, "Sugar");
    }

    #[test]
    fn bulk_patch_never_duplicates_the_unique_key() {
        let (mut store, a, b, c) = seeded();

        // A patch carrying a's code would collide for every other record.
        let patch = ItemPatch {
            code: Some(store.get(a).unwrap().code.clone()),
            ..ItemPatch::default()
        };
        assert_eq!(store.bulk_patch(&[b, c], &patch), 0);
        assert_eq!(store.get(b).unwrap().code, "RAW-002");
        assert_eq!(store.get(c).unwrap().code, "PKG-001");

        let codes: Vec<&str> = store.all().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes.iter().filter(|&&code| code == "RAW-001").count(), 1);
    }

    #[test]
    fn criteria_merge_is_incremental() {
        let (mut store, ..) = seeded();
        store.set_criteria(|c| c.kind = Some("raw".to_string()));
        assert_eq!(store.filtered().len(), 2);

        store.set_criteria(|c| c.search = Some("flour".to_string()));
        let visible = store.filtered();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Organic Flour");

        store.clear_criteria();
        assert_eq!(store.filtered().len(), 3);
    }

    #[test]
    fn filtered_is_deterministic_without_mutation() {
        let (mut store, ..) = seeded();
        store.set_criteria(|c| c.kind = Some("raw".to_string()));
        let first: Vec<Item> = store.filtered().into_iter().cloned().collect();
        let second: Vec<Item> = store.filtered().into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the projection equals a fresh scan of the base
            /// collection under the same criteria (no caching staleness).
            #[test]
            fn projection_is_pure_function_of_collection_and_criteria(
                names in proptest::collection::vec("[A-Za-z]{1,12}", 1..20),
                search in proptest::option::of("[A-Za-z]{1,4}"),
            ) {
                let mut store = CatalogStore::<Item>::default();
                for (i, name) in names.iter().enumerate() {
                    store.add(draft(name, &format!("CODE-{i}"), Some("raw"))).unwrap();
                }
                store.set_criteria(|c| c.search = search.clone());

                let expected: Vec<ItemId> = store
                    .all()
                    .iter()
                    .filter(|e| !e.is_archived() && e.matches(store.criteria()))
                    .map(|e| e.id)
                    .collect();
                let actual: Vec<ItemId> = store.filtered().iter().map(|e| e.id).collect();
                prop_assert_eq!(actual, expected);
            }

            /// Property: adding the same label twice never duplicates it.
            #[test]
            fn bulk_add_label_never_duplicates(
                label in "[a-z]{1,10}",
                repeats in 1usize..4,
            ) {
                let (mut store, a, b, c) = seeded();
                let ids = [a, b, c];
                for _ in 0..repeats {
                    store.bulk_add_label(&ids, &label);
                }
                for id in ids {
                    let labels = store.get(id).unwrap().labels();
                    prop_assert_eq!(labels.iter().filter(|l| **l == label).count(), 1);
                }
            }
        }
    }
}
