//! CRUD and query layer over saved palettes and collections.
//!
//! [`PaletteLibrary`] owns a [`KeyValueStore`] handle plus the two in-memory
//! lists loaded from it. Every mutation re-serializes both lists back to the
//! store before returning; if the flush fails, the in-memory state is rolled
//! back and the operation is rejected.

use std::collections::{BTreeSet, HashSet};
use std::time::SystemTime;

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::color::Color;
use crate::dao::models::{CollectionEntity, SavedPaletteEntity};
use crate::dao::storage::{KeyValueStore, StorageError};
use crate::error::ServiceError;

/// Store key holding the serialized palette list.
pub const SAVED_PALETTES_KEY: &str = "savedPalettes";
/// Store key holding the serialized collection list.
pub const COLLECTIONS_KEY: &str = "paletteCollections";

/// Result alias for library operations.
pub type LibraryResult<T> = Result<T, ServiceError>;

/// Partial update for a saved palette. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PaletteUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New color sequence.
    pub colors: Option<Vec<Color>>,
    /// New tag set, replacing the previous one.
    pub tags: Option<Vec<String>>,
    /// New favorite flag.
    pub favorite: Option<bool>,
}

/// The persistent palette library.
pub struct PaletteLibrary {
    store: Box<dyn KeyValueStore>,
    palettes: Vec<SavedPaletteEntity>,
    collections: Vec<CollectionEntity>,
}

impl PaletteLibrary {
    /// Load the library from a store handle.
    ///
    /// Absent keys are treated as empty lists. Dangling references between
    /// palettes and collections are pruned on load.
    pub fn open(store: Box<dyn KeyValueStore>) -> LibraryResult<Self> {
        let palettes = load_list(store.as_ref(), SAVED_PALETTES_KEY)?;
        let collections = load_list(store.as_ref(), COLLECTIONS_KEY)?;
        let mut library = Self {
            store,
            palettes,
            collections,
        };
        library.prune_dangling_references();
        info!(
            palettes = library.palettes.len(),
            collections = library.collections.len(),
            "palette library loaded"
        );
        Ok(library)
    }

    /// Save a new palette. Returns the stored entity.
    ///
    /// The name defaults to `Palette {n}`; the palette is prepended so the
    /// default view order is newest-first. If `collection` is given it must
    /// exist, and the palette is registered as a member.
    pub fn save(
        &mut self,
        colors: Vec<Color>,
        name: Option<&str>,
        tags: Vec<String>,
        collection: Option<Uuid>,
    ) -> LibraryResult<SavedPaletteEntity> {
        if let Some(collection_id) = collection {
            self.collection(collection_id)
                .ok_or_else(|| not_found("collection", collection_id))?;
        }

        let now = SystemTime::now();
        let entity = SavedPaletteEntity {
            id: Uuid::new_v4(),
            name: name.map_or_else(
                || format!("Palette {}", self.palettes.len() + 1),
                str::to_owned,
            ),
            colors,
            tags,
            collection,
            created_at: now,
            updated_at: now,
            favorite: false,
        };
        let stored = entity.clone();

        self.commit(move |lib| {
            if let Some(collection_id) = entity.collection {
                if let Some(col) = lib.collection_mut(collection_id) {
                    col.palettes.insert(entity.id);
                }
            }
            lib.palettes.insert(0, entity);
        })?;
        Ok(stored)
    }

    /// Merge `update` into the palette with `id` and refresh its update
    /// timestamp.
    pub fn update(&mut self, id: Uuid, update: PaletteUpdate) -> LibraryResult<()> {
        let index = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found("palette", id))?;

        self.commit(move |lib| {
            let palette = &mut lib.palettes[index];
            if let Some(name) = update.name {
                palette.name = name;
            }
            if let Some(colors) = update.colors {
                palette.colors = colors;
            }
            if let Some(tags) = update.tags {
                palette.tags = tags;
            }
            if let Some(favorite) = update.favorite {
                palette.favorite = favorite;
            }
            palette.updated_at = SystemTime::now();
        })
    }

    /// Delete the palette with `id`, pruning it from every collection's
    /// membership set.
    pub fn delete(&mut self, id: Uuid) -> LibraryResult<()> {
        if !self.palettes.iter().any(|p| p.id == id) {
            return Err(not_found("palette", id));
        }
        self.commit(move |lib| {
            lib.palettes.retain(|p| p.id != id);
            for collection in &mut lib.collections {
                collection.palettes.shift_remove(&id);
            }
        })
    }

    /// Create an empty collection. Returns the stored entity.
    pub fn create_collection(
        &mut self,
        name: &str,
        description: &str,
    ) -> LibraryResult<CollectionEntity> {
        let entity = CollectionEntity {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            description: description.to_owned(),
            created_at: SystemTime::now(),
            palettes: IndexSet::new(),
        };
        let stored = entity.clone();
        self.commit(move |lib| lib.collections.push(entity))?;
        Ok(stored)
    }

    /// Delete the collection with `id`, clearing the back-reference on every
    /// member palette. Member palettes themselves are kept.
    pub fn delete_collection(&mut self, id: Uuid) -> LibraryResult<()> {
        if !self.collections.iter().any(|c| c.id == id) {
            return Err(not_found("collection", id));
        }
        self.commit(move |lib| {
            lib.collections.retain(|c| c.id != id);
            for palette in &mut lib.palettes {
                if palette.collection == Some(id) {
                    palette.collection = None;
                }
            }
        })
    }

    /// Add a palette to a collection. Idempotent: adding an existing member
    /// again is a successful no-op. A palette already in another collection
    /// is moved.
    pub fn add_to_collection(&mut self, palette_id: Uuid, collection_id: Uuid) -> LibraryResult<()> {
        let palette = self
            .palette(palette_id)
            .ok_or_else(|| not_found("palette", palette_id))?;
        let collection = self
            .collection(collection_id)
            .ok_or_else(|| not_found("collection", collection_id))?;
        if collection.palettes.contains(&palette_id) {
            return Ok(());
        }
        let previous = palette.collection;

        self.commit(move |lib| {
            if let Some(prev_id) = previous {
                if let Some(prev) = lib.collection_mut(prev_id) {
                    prev.palettes.shift_remove(&palette_id);
                }
            }
            if let Some(col) = lib.collection_mut(collection_id) {
                col.palettes.insert(palette_id);
            }
            if let Some(palette) = lib.palette_mut(palette_id) {
                palette.collection = Some(collection_id);
            }
        })
    }

    /// Remove a palette from its collection, if it belongs to one.
    pub fn remove_from_collection(&mut self, palette_id: Uuid) -> LibraryResult<()> {
        let palette = self
            .palette(palette_id)
            .ok_or_else(|| not_found("palette", palette_id))?;
        let Some(collection_id) = palette.collection else {
            return Ok(());
        };
        self.commit(move |lib| {
            if let Some(col) = lib.collection_mut(collection_id) {
                col.palettes.shift_remove(&palette_id);
            }
            if let Some(palette) = lib.palette_mut(palette_id) {
                palette.collection = None;
            }
        })
    }

    /// Flip the favorite flag of a palette. Returns the new value.
    pub fn toggle_favorite(&mut self, id: Uuid) -> LibraryResult<bool> {
        let index = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found("palette", id))?;
        self.commit(move |lib| {
            let palette = &mut lib.palettes[index];
            palette.favorite = !palette.favorite;
            palette.favorite
        })
    }

    /// All saved palettes, newest first.
    #[must_use]
    pub fn palettes(&self) -> &[SavedPaletteEntity] {
        &self.palettes
    }

    /// All collections, in creation order.
    #[must_use]
    pub fn collections(&self) -> &[CollectionEntity] {
        &self.collections
    }

    /// Look up a palette by id.
    #[must_use]
    pub fn palette(&self, id: Uuid) -> Option<&SavedPaletteEntity> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Look up a collection by id.
    #[must_use]
    pub fn collection(&self, id: Uuid) -> Option<&CollectionEntity> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring search over names and tags. A query that is
    /// empty after trimming returns the full list.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SavedPaletteEntity> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.palettes.iter().collect();
        }
        let needle = trimmed.to_lowercase();
        self.palettes
            .iter()
            .filter(|palette| {
                palette.name.to_lowercase().contains(&needle)
                    || palette
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Palettes carrying every listed tag (AND semantics, exact match).
    #[must_use]
    pub fn filter_by_tags(&self, tags: &[String]) -> Vec<&SavedPaletteEntity> {
        self.palettes
            .iter()
            .filter(|palette| tags.iter().all(|tag| palette.tags.contains(tag)))
            .collect()
    }

    /// Deduplicated union of all tags, lexicographically sorted.
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        self.palettes
            .iter()
            .flat_map(|palette| palette.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Palettes marked as favorites, newest first.
    #[must_use]
    pub fn favorites(&self) -> Vec<&SavedPaletteEntity> {
        self.palettes.iter().filter(|p| p.favorite).collect()
    }

    /// Re-serialize both lists back to the store.
    pub fn flush(&mut self) -> LibraryResult<()> {
        self.persist().map_err(Into::into)
    }

    /// Apply `mutate` and flush. If the flush fails, the previous in-memory
    /// state is restored and the error is returned.
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut Self) -> T) -> LibraryResult<T> {
        let snapshot = (self.palettes.clone(), self.collections.clone());
        let value = mutate(self);
        match self.persist() {
            Ok(()) => Ok(value),
            Err(err) => {
                (self.palettes, self.collections) = snapshot;
                Err(err.into())
            }
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let palettes = serde_json::to_string(&self.palettes).map_err(|source| {
            StorageError::unavailable("failed to serialize palettes".into(), source)
        })?;
        let collections = serde_json::to_string(&self.collections).map_err(|source| {
            StorageError::unavailable("failed to serialize collections".into(), source)
        })?;
        self.store.set(SAVED_PALETTES_KEY, &palettes)?;
        self.store.set(COLLECTIONS_KEY, &collections)
    }

    fn palette_mut(&mut self, id: Uuid) -> Option<&mut SavedPaletteEntity> {
        self.palettes.iter_mut().find(|p| p.id == id)
    }

    fn collection_mut(&mut self, id: Uuid) -> Option<&mut CollectionEntity> {
        self.collections.iter_mut().find(|c| c.id == id)
    }

    /// Drop references to entities that no longer exist on either side of the
    /// palette/collection linkage.
    fn prune_dangling_references(&mut self) {
        let palette_ids: HashSet<Uuid> = self.palettes.iter().map(|p| p.id).collect();
        for collection in &mut self.collections {
            let before = collection.palettes.len();
            collection.palettes.retain(|id| palette_ids.contains(id));
            let removed = before - collection.palettes.len();
            if removed > 0 {
                warn!(
                    collection = %collection.id,
                    removed,
                    "pruned dangling palette references"
                );
            }
        }

        let collection_ids: HashSet<Uuid> = self.collections.iter().map(|c| c.id).collect();
        for palette in &mut self.palettes {
            let dangling = palette
                .collection
                .is_some_and(|id| !collection_ids.contains(&id));
            if dangling {
                warn!(palette = %palette.id, "cleared dangling collection reference");
                palette.collection = None;
            }
        }
    }
}

fn load_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, ServiceError> {
    match store.get(key)? {
        Some(payload) => serde_json::from_str(&payload).map_err(|source| {
            StorageError::unavailable(format!("corrupt payload under key {key:?}"), source).into()
        }),
        None => Ok(Vec::new()),
    }
}

fn not_found(kind: &str, id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("{kind} {id}"))
}
