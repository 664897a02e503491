//! In-memory persistence adapter.
//!
//! Reference implementation of both persister ports, used by tests and the
//! default server wiring. Identities arrive as full request paths; this
//! adapter resolves them by parsing the trailing path segment as the numeric
//! record ID. Locks are `std::sync` guards and are never held across await
//! points.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use crate::domain::{
    Category, CategoryIn, CategoryPersister, Collection, CollectionIn, CollectionPersister,
    PersistenceError,
};

/// Shared in-memory store for categories and collections.
#[derive(Debug)]
pub struct MemoryRepository {
    categories: RwLock<BTreeMap<i32, Category>>,
    collections: RwLock<BTreeMap<i32, Collection>>,
    next_id: AtomicI32,
}

impl MemoryRepository {
    /// Create an empty store. The first assigned ID is 1.
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(BTreeMap::new()),
            collections: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn assign_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Resolve an identity to a record ID: the trailing path segment parsed
    /// as an integer.
    fn resolve(identity: &str) -> Option<i32> {
        identity
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(store: &str) -> PersistenceError {
    PersistenceError::backend(format!("{store} store lock poisoned"))
}

#[async_trait]
impl CategoryPersister for MemoryRepository {
    async fn select_categories(&self) -> Result<Vec<Category>, PersistenceError> {
        let guard = self.categories.read().map_err(|_| poisoned("category"))?;
        Ok(guard.values().cloned().collect())
    }

    async fn select_one_category(&self, identity: &str) -> Result<Category, PersistenceError> {
        let guard = self.categories.read().map_err(|_| poisoned("category"))?;
        Self::resolve(identity)
            .and_then(|id| guard.get(&id).cloned())
            .ok_or_else(|| PersistenceError::not_found(identity))
    }

    async fn insert_category(&self, input: CategoryIn) -> Result<Category, PersistenceError> {
        let category = Category::new(self.assign_id(), input);
        let mut guard = self.categories.write().map_err(|_| poisoned("category"))?;
        guard.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        identity: &str,
        input: CategoryIn,
    ) -> Result<Category, PersistenceError> {
        let mut guard = self.categories.write().map_err(|_| poisoned("category"))?;
        let id = Self::resolve(identity)
            .filter(|id| guard.contains_key(id))
            .ok_or_else(|| PersistenceError::not_found(identity))?;
        let category = Category::new(id, input);
        guard.insert(id, category.clone());
        Ok(category)
    }

    async fn delete_category(&self, identity: &str) -> Result<(), PersistenceError> {
        let mut guard = self.categories.write().map_err(|_| poisoned("category"))?;
        if let Some(id) = Self::resolve(identity) {
            guard.remove(&id);
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionPersister for MemoryRepository {
    async fn select_collections(&self) -> Result<Vec<Collection>, PersistenceError> {
        let guard = self.collections.read().map_err(|_| poisoned("collection"))?;
        Ok(guard.values().cloned().collect())
    }

    async fn select_one_collection(&self, identity: &str) -> Result<Collection, PersistenceError> {
        let guard = self.collections.read().map_err(|_| poisoned("collection"))?;
        Self::resolve(identity)
            .and_then(|id| guard.get(&id).cloned())
            .ok_or_else(|| PersistenceError::not_found(identity))
    }

    async fn insert_collection(&self, input: CollectionIn) -> Result<Collection, PersistenceError> {
        let collection = Collection::new(self.assign_id(), input);
        let mut guard = self.collections.write().map_err(|_| poisoned("collection"))?;
        guard.insert(collection.id, collection.clone());
        Ok(collection)
    }

    async fn update_collection(
        &self,
        identity: &str,
        input: CollectionIn,
    ) -> Result<Collection, PersistenceError> {
        let mut guard = self.collections.write().map_err(|_| poisoned("collection"))?;
        let id = Self::resolve(identity)
            .filter(|id| guard.contains_key(id))
            .ok_or_else(|| PersistenceError::not_found(identity))?;
        let collection = Collection::new(id, input);
        guard.insert(id, collection.clone());
        Ok(collection)
    }

    async fn delete_collection(&self, identity: &str) -> Result<(), PersistenceError> {
        let mut guard = self.collections.write().map_err(|_| poisoned("collection"))?;
        if let Some(id) = Self::resolve(identity) {
            guard.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/categories/7", Some(7))]
    #[case("/api/categories/7/", Some(7))]
    #[case("/categories/abc", None)]
    #[case("/categories/", None)]
    fn identities_resolve_from_the_trailing_segment(
        #[case] identity: &str,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(MemoryRepository::resolve(identity), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryRepository::new();
        let first = store
            .insert_category(CategoryIn { name: "Births".into() })
            .await
            .expect("insert succeeds");
        let second = store
            .insert_category(CategoryIn { name: "Deaths".into() })
            .await
            .expect("insert succeeds");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[rstest]
    #[actix_web::test]
    async fn update_of_unknown_identity_is_not_found() {
        let store = MemoryRepository::new();
        let result = store
            .update_category("/categories/9", CategoryIn { name: "Deaths".into() })
            .await;
        assert_eq!(
            result,
            Err(PersistenceError::not_found("/categories/9"))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_of_unknown_identity_is_a_no_op() {
        let store = MemoryRepository::new();
        assert_eq!(store.delete_category("/categories/9").await, Ok(()));
        assert_eq!(store.delete_category("/categories/abc").await, Ok(()));
    }

    #[rstest]
    #[actix_web::test]
    async fn select_one_resolves_across_a_base_path() {
        let store = MemoryRepository::new();
        let created = store
            .insert_collection(CollectionIn {
                name: "Census".into(),
                category: None,
            })
            .await
            .expect("insert succeeds");
        let found = store
            .select_one_collection(&format!("/api/v1/collections/{}", created.id))
            .await
            .expect("select succeeds");
        assert_eq!(found, created);
    }
}
