//! Category resource representations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server-returned form of a category, including its assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Server-assigned identifier. Never zero in an output representation.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name for the category.
    #[schema(example = "Births")]
    pub name: String,
}

/// Client-supplied form of a category used for create and update.
///
/// Carries no ID; the persister assigns one on insert. `name` defaults to
/// empty when the key is absent so a missing field reaches the validator
/// instead of failing decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryIn {
    /// Display name for the category. Required, non-empty.
    #[serde(default)]
    #[schema(example = "Births")]
    pub name: String,
}

impl Category {
    /// Build an output representation from a server-assigned ID and an input.
    ///
    /// This is the only way an ID enters the model; the API layer never
    /// assigns or guesses IDs.
    pub fn new(id: i32, input: CategoryIn) -> Self {
        Self {
            id,
            name: input.name,
        }
    }
}
