//! Collection resource representations.
//!
//! A collection may reference the category it belongs to. The reference is
//! an ID-only stand-in ([`CategoryRef`]) so clients never have to supply a
//! full nested category on write.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ID-only reference to a [`Category`](super::Category).
///
/// Structurally a category with only its ID populated, never partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    /// Identifier of the referenced category.
    #[schema(example = 1)]
    pub id: i32,
}

impl CategoryRef {
    /// Build a reference from a category ID.
    pub const fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Server-returned form of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Collection {
    /// Server-assigned identifier. Never zero in an output representation.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name for the collection.
    #[schema(example = "Parish registers")]
    pub name: String,
    /// Category this collection belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

/// Client-supplied form of a collection used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollectionIn {
    /// Display name for the collection. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Parish registers")]
    pub name: String,
    /// Category this collection belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Collection {
    /// Build an output representation from a server-assigned ID and an input.
    pub fn new(id: i32, input: CollectionIn) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
        }
    }
}
