//! Document store trait definition.

use crate::document::Document;
use crate::error::StoreResult;
use crate::filter::FieldFilter;
use crate::value::Value;

/// A lazy, store-ordered sequence of documents.
pub type DocumentIter<'a> = Box<dyn Iterator<Item = StoreResult<Document>> + 'a>;

/// Outcome of [`DocumentStore::insert_one`].
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    /// Identifier of the inserted document, when the store reports one.
    pub inserted_id: Option<Value>,
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
}

/// Outcome of [`DocumentStore::update_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// Number of documents that matched the filter (0 or 1).
    pub matched: u64,
    /// Number of documents whose stored content actually changed.
    pub modified: u64,
}

/// A backing document store.
///
/// Stores hold named collections of schema-less [`Document`]s. The trait
/// covers exactly the operations the console engine consumes; it does not
/// expose wire protocols or connection management.
///
/// # Invariants
///
/// - "First" means first in store-native order; no sorting is applied
/// - `update_one` merges the given fields into the matched document and
///   never touches the identifier
/// - `modified` counts only documents whose stored values changed
/// - Stores must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::InMemoryStore`] - For testing and offline use
/// - [`super::MongoStore`] - For a MongoDB server
pub trait DocumentStore: Send + Sync {
    /// Returns an arbitrary document from the collection, or `None` if it
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn sample_one(&self, collection: &str) -> StoreResult<Option<Document>>;

    /// Iterates every document in the collection in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be started. Errors while
    /// advancing are yielded by the iterator.
    fn iter_all(&self, collection: &str) -> StoreResult<DocumentIter<'_>>;

    /// Inserts one document. The store assigns the identifier if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertResult>;

    /// Returns the first document matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<Option<Document>>;

    /// Merges `changes` into the first document matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected, including attempts to
    /// change the identifier.
    fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        changes: Document,
    ) -> StoreResult<UpdateResult>;

    /// Deletes the first document matching the filter.
    ///
    /// Returns the number of deleted documents (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<u64>;

    /// Deletes every document in the collection, returning the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_all(&self, collection: &str) -> StoreResult<u64>;
}
