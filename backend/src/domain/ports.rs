//! Persistence ports consumed by the HTTP adapter.
//!
//! Each resource kind has its own persister trait so backing stores can be
//! swapped per kind. Handlers pass the full request path as the identity;
//! resolving it to a stored record is the adapter's responsibility. The
//! traits expose strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::{Category, CategoryIn, Collection, CollectionIn};

/// Errors surfaced by persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PersistenceError {
    /// No record matches the given identity. Mapped to HTTP 404.
    #[error("no record matches '{identity}'")]
    NotFound {
        /// Identity that failed to resolve.
        identity: String,
    },
    /// Any other backend failure. Mapped to HTTP 500, detail logged.
    #[error("persistence backend failed: {message}")]
    Backend {
        /// Adapter-specific failure description.
        message: String,
    },
}

impl PersistenceError {
    /// Helper for the distinguished not-found signal.
    pub fn not_found(identity: impl Into<String>) -> Self {
        Self::NotFound {
            identity: identity.into(),
        }
    }

    /// Helper for backend faults.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryPersister: Send + Sync {
    /// Return all categories.
    async fn select_categories(&self) -> Result<Vec<Category>, PersistenceError>;

    /// Return the category resolved from `identity`.
    async fn select_one_category(&self, identity: &str) -> Result<Category, PersistenceError>;

    /// Store a new category, assigning its ID.
    async fn insert_category(&self, input: CategoryIn) -> Result<Category, PersistenceError>;

    /// Apply `input` to the category resolved from `identity`.
    ///
    /// Never creates: an unresolved identity is a [`PersistenceError::NotFound`].
    async fn update_category(
        &self,
        identity: &str,
        input: CategoryIn,
    ) -> Result<Category, PersistenceError>;

    /// Remove the category resolved from `identity`. Removing an absent
    /// record is a successful no-op.
    async fn delete_category(&self, identity: &str) -> Result<(), PersistenceError>;
}

/// Persistence operations for collections.
#[async_trait]
pub trait CollectionPersister: Send + Sync {
    /// Return all collections.
    async fn select_collections(&self) -> Result<Vec<Collection>, PersistenceError>;

    /// Return the collection resolved from `identity`.
    async fn select_one_collection(&self, identity: &str) -> Result<Collection, PersistenceError>;

    /// Store a new collection, assigning its ID.
    async fn insert_collection(&self, input: CollectionIn) -> Result<Collection, PersistenceError>;

    /// Apply `input` to the collection resolved from `identity`.
    ///
    /// Never creates: an unresolved identity is a [`PersistenceError::NotFound`].
    async fn update_collection(
        &self,
        identity: &str,
        input: CollectionIn,
    ) -> Result<Collection, PersistenceError>;

    /// Remove the collection resolved from `identity`. Removing an absent
    /// record is a successful no-op.
    async fn delete_collection(&self, identity: &str) -> Result<(), PersistenceError>;
}
