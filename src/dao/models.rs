//! Persisted entity definitions for the palette library.

use std::time::SystemTime;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;

/// A named palette persisted in the library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedPaletteEntity {
    /// Stable identifier for the palette.
    pub id: Uuid,
    /// Display name chosen by the user (or auto-numbered).
    pub name: String,
    /// Ordered color sequence; the first color is the base.
    pub colors: Vec<Color>,
    /// Free-form tags used for search and filtering.
    pub tags: Vec<String>,
    /// Collection this palette belongs to, if any.
    pub collection: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last time this palette was updated.
    pub updated_at: SystemTime,
    /// Whether the user marked this palette as a favorite.
    pub favorite: bool,
}

/// A named grouping of saved palettes.
///
/// Membership is a back-reference set: the collection lists palette ids, and
/// each member palette's `collection` field points back here. The library
/// keeps both sides consistent on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionEntity {
    /// Stable identifier for the collection.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Ids of the member palettes, in insertion order.
    pub palettes: IndexSet<Uuid>,
}
