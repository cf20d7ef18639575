//! Fault injection for store error paths.
//!
//! [`FaultyStore`] wraps an [`InMemoryStore`] and fails selected operations
//! with [`StoreError::Operation`], so tests can check that the console
//! reports store failures and returns to the menu.
//!
//! ## Usage
//!
//! ```rust
//! use charity_testkit::prelude::*;
//! use charity_store::DocumentStore;
//!
//! let store = FaultyStore::new(scenarios::charity_store());
//! store.fail(StoreOperation::DeleteAll);
//! assert!(store.delete_all("Donors").is_err());
//! ```

use charity_store::{
    Document, DocumentIter, DocumentStore, FieldFilter, InMemoryStore, InsertResult, StoreError,
    StoreResult, UpdateResult,
};
use parking_lot::Mutex;
use std::collections::HashSet;

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// [`DocumentStore::sample_one`]
    SampleOne,
    /// [`DocumentStore::iter_all`], failing before the first document.
    IterAll,
    /// [`DocumentStore::iter_all`], failing after the first document.
    IterAllMidway,
    /// [`DocumentStore::insert_one`]
    InsertOne,
    /// [`DocumentStore::find_one`]
    FindOne,
    /// [`DocumentStore::update_one`]
    UpdateOne,
    /// [`DocumentStore::delete_one`]
    DeleteOne,
    /// [`DocumentStore::delete_all`]
    DeleteAll,
}

impl StoreOperation {
    fn name(self) -> &'static str {
        match self {
            Self::SampleOne => "sample",
            Self::IterAll | Self::IterAllMidway => "find",
            Self::InsertOne => "insert",
            Self::FindOne => "find_one",
            Self::UpdateOne => "update",
            Self::DeleteOne => "delete",
            Self::DeleteAll => "delete_many",
        }
    }
}

/// Message carried by every injected error.
pub const INJECTED_FAILURE: &str = "injected failure";

/// An in-memory store with switchable failures.
pub struct FaultyStore {
    inner: InMemoryStore,
    failing: Mutex<HashSet<StoreOperation>>,
    unacknowledged: Mutex<bool>,
}

impl FaultyStore {
    /// Wraps a store with no failures enabled.
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            failing: Mutex::new(HashSet::new()),
            unacknowledged: Mutex::new(false),
        }
    }

    /// Makes `operation` fail until [`FaultyStore::heal`] is called.
    pub fn fail(&self, operation: StoreOperation) -> &Self {
        self.failing.lock().insert(operation);
        self
    }

    /// Clears every injected failure.
    pub fn heal(&self) {
        self.failing.lock().clear();
        *self.unacknowledged.lock() = false;
    }

    /// Makes inserts succeed but report an unacknowledged write.
    pub fn withhold_acknowledgement(&self) -> &Self {
        *self.unacknowledged.lock() = true;
        self
    }

    /// The wrapped store.
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    fn check(&self, operation: StoreOperation) -> StoreResult<()> {
        if self.failing.lock().contains(&operation) {
            return Err(StoreError::operation(operation.name(), INJECTED_FAILURE));
        }
        Ok(())
    }

    fn is_failing(&self, operation: StoreOperation) -> bool {
        self.failing.lock().contains(&operation)
    }
}

impl DocumentStore for FaultyStore {
    fn sample_one(&self, collection: &str) -> StoreResult<Option<Document>> {
        self.check(StoreOperation::SampleOne)?;
        self.inner.sample_one(collection)
    }

    fn iter_all(&self, collection: &str) -> StoreResult<DocumentIter<'_>> {
        self.check(StoreOperation::IterAll)?;
        let documents = self.inner.iter_all(collection)?;
        if !self.is_failing(StoreOperation::IterAllMidway) {
            return Ok(documents);
        }
        let failure = StoreError::operation(
            StoreOperation::IterAllMidway.name(),
            INJECTED_FAILURE,
        );
        Ok(Box::new(documents.take(1).chain(std::iter::once(Err(failure)))))
    }

    fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertResult> {
        self.check(StoreOperation::InsertOne)?;
        let mut result = self.inner.insert_one(collection, document)?;
        if *self.unacknowledged.lock() {
            result.acknowledged = false;
            result.inserted_id = None;
        }
        Ok(result)
    }

    fn find_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<Option<Document>> {
        self.check(StoreOperation::FindOne)?;
        self.inner.find_one(collection, filter)
    }

    fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        changes: Document,
    ) -> StoreResult<UpdateResult> {
        self.check(StoreOperation::UpdateOne)?;
        self.inner.update_one(collection, filter, changes)
    }

    fn delete_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<u64> {
        self.check(StoreOperation::DeleteOne)?;
        self.inner.delete_one(collection, filter)
    }

    fn delete_all(&self, collection: &str) -> StoreResult<u64> {
        self.check(StoreOperation::DeleteAll)?;
        self.inner.delete_all(collection)
    }
}
