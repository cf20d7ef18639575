//! # Charity Core
//!
//! Field-inference CRUD engine and menu controller for the charity console.
//!
//! This crate provides:
//! - Input coercion from console text to document values
//! - Field inference from a sampled document
//! - Create, read, update and delete over any collection name
//! - Numeric field totals, such as the sum of donation amounts
//! - The two-level interactive menu
//!
//! Collections have no declared schema. Create samples one existing
//! document and prompts for each of its fields; update prompts for each
//! field of the document it finds. Every operation re-reads the store.
//!
//! ## Usage
//!
//! ```rust
//! use charity_core::{Catalog, Menu, ScriptedConsole};
//! use charity_store::{Document, InMemoryStore};
//!
//! let alice = Document::from_pairs([("Name", "Alice")]);
//! let store = InMemoryStore::with_documents("Donors", vec![alice]);
//! let catalog = Catalog::default();
//! let mut console = ScriptedConsole::new(["1", "2", "6"]);
//! Menu::new(&store, &mut console, &catalog).run().unwrap();
//! assert!(console.saw("Name: \"Alice\""));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod coerce;
mod config;
mod console;
mod engine;
mod error;
mod menu;
mod seed;
mod template;

pub use catalog::{Catalog, CollectionEntry};
pub use coerce::{coerce, coerce_search_key};
pub use config::{Config, DEFAULT_DATABASE, DEFAULT_URI};
pub use console::{Console, ScriptedConsole};
pub use engine::{
    CreateOutcome, DeleteOutcome, Engine, ReadOutcome, Total, TotalOutcome, UpdateOutcome,
    CONFIRM_TOKEN,
};
pub use error::{CoreError, CoreResult};
pub use menu::{Action, Menu, CLOSING};
pub use seed::{sample_documents, seed_demo};
pub use template::FieldTemplate;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
