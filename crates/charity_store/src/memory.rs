//! In-memory document store.

use crate::backend::{DocumentIter, DocumentStore, InsertResult, UpdateResult};
use crate::document::{Document, ID_FIELD};
use crate::error::{StoreError, StoreResult};
use crate::filter::FieldFilter;
use crate::value::Value;
use mongodb::bson::oid::ObjectId;
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory document store.
///
/// Collections are created on first insert. Store-native order is
/// insertion order. Suitable for:
/// - Unit and integration tests
/// - Running the console without a database server
///
/// # Example
///
/// ```rust
/// use charity_store::{Document, DocumentStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// store.insert_one("Donors", Document::from_pairs([("name", "Alice")])).unwrap();
/// assert_eq!(store.count("Donors"), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-existing documents in one collection.
    ///
    /// Documents are stored as [`insert_one`](DocumentStore::insert_one)
    /// would store them.
    #[must_use]
    pub fn with_documents(collection: &str, documents: Vec<Document>) -> Self {
        let store = Self::new();
        {
            let mut collections = store.collections.write();
            let docs = collections.entry(collection.to_string()).or_default();
            docs.extend(documents.into_iter().map(stored));
        }
        store
    }

    /// Returns a copy of every document in a collection.
    #[must_use]
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of documents in a collection.
    #[must_use]
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }
}

/// Narrows integers and assigns an identifier when missing.
fn stored(document: Document) -> Document {
    let mut document = document.into_stored();
    if !document.contains_key(ID_FIELD) {
        document.insert_first(ID_FIELD, ObjectId::new());
    }
    document
}

impl DocumentStore for InMemoryStore {
    fn sample_one(&self, collection: &str) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.first().cloned()))
    }

    fn iter_all(&self, collection: &str) -> StoreResult<DocumentIter<'_>> {
        // Snapshot so the lock is not held while the caller consumes.
        let snapshot = self.documents(collection);
        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }

    fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertResult> {
        let document = stored(document);
        let inserted_id = document.id().cloned();
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(InsertResult {
            inserted_id,
            acknowledged: true,
        })
    }

    fn find_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        changes: Document,
    ) -> StoreResult<UpdateResult> {
        let mut collections = self.collections.write();
        let Some(target) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter.matches(doc)))
        else {
            return Ok(UpdateResult {
                matched: 0,
                modified: 0,
            });
        };

        let changes = changes.into_stored();
        if let Some(new_id) = changes.id() {
            if target.id() != Some(new_id) {
                return Err(StoreError::ImmutableId {
                    collection: collection.to_string(),
                });
            }
        }

        let mut changed = false;
        for (field, value) in changes {
            if target.get(&field) != Some(&value) {
                target.insert(field, value);
                changed = true;
            }
        }

        Ok(UpdateResult {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    fn delete_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<u64> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(pos) => {
                docs.remove(pos);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_all(&self, collection: &str) -> StoreResult<u64> {
        let mut collections = self.collections.write();
        let removed = collections
            .get_mut(collection)
            .map_or(0, |docs| std::mem::take(docs).len());
        Ok(removed as u64)
    }
}
