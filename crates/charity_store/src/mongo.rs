//! MongoDB document store.

use crate::backend::{DocumentIter, DocumentStore, InsertResult, UpdateResult};
use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::filter::FieldFilter;
use crate::value::Value;
use mongodb::bson::spec::BinarySubtype;
use mongodb::bson::{self, doc, Bson};
use mongodb::sync::{Client, Collection, Database};
use tracing::{debug, info, warn};

/// A document store backed by a MongoDB server.
///
/// Uses the driver's blocking API. The client is created once by
/// [`MongoStore::connect`] and reused for every operation; the driver
/// pools the underlying connections.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to `uri` and selects `database`.
    ///
    /// The server is pinged once so that an unreachable store is reported
    /// at startup rather than on the first menu action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URI is invalid or the
    /// server does not answer the ping.
    pub fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client =
            Client::with_uri_str(uri).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(database);
        database
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        info!(database = database.name(), "connected to document store");
        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<bson::Document> {
        self.database.collection(name)
    }
}

impl DocumentStore for MongoStore {
    fn sample_one(&self, collection: &str) -> StoreResult<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(doc! {})
            .run()
            .map_err(|e| StoreError::operation("find_one", e))?;
        Ok(found.map(from_bson_document))
    }

    fn iter_all(&self, collection: &str) -> StoreResult<DocumentIter<'_>> {
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .run()
            .map_err(|e| StoreError::operation("find", e))?;
        Ok(Box::new(cursor.map(|next| {
            next.map(from_bson_document)
                .map_err(|e| StoreError::operation("find", e))
        })))
    }

    fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertResult> {
        let result = self
            .collection(collection)
            .insert_one(to_bson_document(document))
            .run()
            .map_err(|e| StoreError::operation("insert_one", e))?;
        debug!(collection, "insert_one acknowledged");
        Ok(InsertResult {
            inserted_id: Some(from_bson(result.inserted_id)),
            acknowledged: true,
        })
    }

    fn find_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(to_bson_filter(filter))
            .run()
            .map_err(|e| StoreError::operation("find_one", e))?;
        Ok(found.map(from_bson_document))
    }

    fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        changes: Document,
    ) -> StoreResult<UpdateResult> {
        let update = doc! { "$set": to_bson_document(changes) };
        let result = self
            .collection(collection)
            .update_one(to_bson_filter(filter), update)
            .run()
            .map_err(|e| StoreError::operation("update_one", e))?;
        Ok(UpdateResult {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    fn delete_one(&self, collection: &str, filter: &FieldFilter) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .delete_one(to_bson_filter(filter))
            .run()
            .map_err(|e| StoreError::operation("delete_one", e))?;
        Ok(result.deleted_count)
    }

    fn delete_all(&self, collection: &str) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .delete_many(doc! {})
            .run()
            .map_err(|e| StoreError::operation("delete_many", e))?;
        Ok(result.deleted_count)
    }
}

fn to_bson_filter(filter: &FieldFilter) -> bson::Document {
    let mut query = bson::Document::new();
    query.insert(filter.field.clone(), to_bson(filter.value.clone()));
    query
}

fn to_bson_document(document: Document) -> bson::Document {
    document
        .into_iter()
        .map(|(k, v)| (k, to_bson(v)))
        .collect()
}

fn from_bson_document(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(k, v)| (k, from_bson(v)))
        .collect()
}

/// Converts a value to BSON.
///
/// Integers that fit in 32 bits are written as `Int32`, matching how
/// [`Value::into_stored`] narrows them for the in-memory store.
fn to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Int32(n) => Bson::Int32(n),
        Value::Integer(n) => i32::try_from(n).map_or(Bson::Int64(n), Bson::Int32),
        Value::Double(d) => Bson::Double(d),
        Value::Text(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(to_bson).collect()),
        Value::Document(doc) => Bson::Document(to_bson_document(doc)),
        Value::ObjectId(id) => Bson::ObjectId(id),
        Value::DateTime(ms) => Bson::DateTime(bson::DateTime::from_millis(ms)),
        Value::Binary(bytes) => Bson::Binary(bson::Binary {
            subtype: BinarySubtype::Generic,
            bytes,
        }),
    }
}

/// Converts BSON to a value.
///
/// BSON kinds without a [`Value`] counterpart are kept as their text
/// rendering; writing such a field back changes its stored type.
fn from_bson(bson: Bson) -> Value {
    match bson {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::Int32(n),
        Bson::Int64(n) => Value::Integer(n),
        Bson::Double(d) => Value::Double(d),
        Bson::String(s) => Value::Text(s),
        Bson::Array(items) => Value::Array(items.into_iter().map(from_bson).collect()),
        Bson::Document(doc) => Value::Document(from_bson_document(doc)),
        Bson::ObjectId(oid) => Value::ObjectId(oid),
        Bson::DateTime(dt) => Value::DateTime(dt.timestamp_millis()),
        Bson::Binary(bin) => Value::Binary(bin.bytes),
        other => {
            warn!(kind = ?other.element_type(), "unsupported BSON value kept as text");
            Value::Text(other.to_string())
        }
    }
}
