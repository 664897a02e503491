//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the persister ports and stay testable without I/O. The state is built
//! once at startup and never mutated.

use std::sync::Arc;

use crate::domain::{CategoryPersister, CollectionPersister};

/// Immutable dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Base path the API is mounted under, empty for the root.
    pub base_path: String,
    /// Persistence port for categories.
    pub categories: Arc<dyn CategoryPersister>,
    /// Persistence port for collections.
    pub collections: Arc<dyn CollectionPersister>,
}

impl HttpState {
    /// Bundle the persister ports under a base path.
    pub fn new(
        base_path: impl Into<String>,
        categories: Arc<dyn CategoryPersister>,
        collections: Arc<dyn CollectionPersister>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            categories,
            collections,
        }
    }
}
