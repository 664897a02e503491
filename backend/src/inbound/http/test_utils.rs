//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Category, CategoryIn, CategoryPersister, PersistenceError};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::MemoryRepository;

/// Build an [`HttpState`] backed by a fresh in-memory store.
pub fn test_state() -> HttpState {
    let store = Arc::new(MemoryRepository::new());
    HttpState::new("", store.clone(), store)
}

/// Category persister whose every operation fails with a backend fault.
pub struct FailingPersister;

#[async_trait]
impl CategoryPersister for FailingPersister {
    async fn select_categories(&self) -> Result<Vec<Category>, PersistenceError> {
        Err(PersistenceError::backend("connection refused"))
    }

    async fn select_one_category(&self, _identity: &str) -> Result<Category, PersistenceError> {
        Err(PersistenceError::backend("connection refused"))
    }

    async fn insert_category(&self, _input: CategoryIn) -> Result<Category, PersistenceError> {
        Err(PersistenceError::backend("connection refused"))
    }

    async fn update_category(
        &self,
        _identity: &str,
        _input: CategoryIn,
    ) -> Result<Category, PersistenceError> {
        Err(PersistenceError::backend("connection refused"))
    }

    async fn delete_category(&self, _identity: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::backend("connection refused"))
    }
}
