//! # Charity Store
//!
//! Document value model and store backends for the charity console.
//!
//! This crate is the lowest layer: it knows how documents are represented
//! and how to read and write them, but nothing about prompts or menus.
//!
//! ## Design Principles
//!
//! - Documents are schema-less, insertion-ordered field maps
//! - Backends expose only the handful of operations the console needs
//! - Backends must be `Send + Sync`
//! - "First match" means first in store-native order, never sorted
//!
//! ## Available Backends
//!
//! - [`InMemoryStore`] - For testing and offline use
//! - [`MongoStore`] - For a MongoDB server
//!
//! ## Example
//!
//! ```rust
//! use charity_store::{Document, DocumentStore, FieldFilter, InMemoryStore, Value};
//!
//! let store = InMemoryStore::new();
//! store
//!     .insert_one("Donors", Document::from_pairs([("Name", "Alice")]))
//!     .unwrap();
//! let found = store
//!     .find_one("Donors", &FieldFilter::new("Name", "Alice"))
//!     .unwrap();
//! assert_eq!(found.unwrap().get("Name"), Some(&Value::from("Alice")));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod document;
mod error;
mod filter;
mod memory;
mod mongo;
mod value;

pub use backend::{DocumentIter, DocumentStore, InsertResult, UpdateResult};
pub use document::{Document, ID_FIELD};
pub use error::{StoreError, StoreResult};
pub use filter::FieldFilter;
pub use mongodb::bson::oid::ObjectId;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use value::Value;
