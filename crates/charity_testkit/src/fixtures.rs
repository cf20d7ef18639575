//! Test fixtures and session helpers.
//!
//! Provides convenience functions for setting up stores and scripted
//! console sessions.

use charity_core::{seed_demo, Catalog, Engine, Menu, ScriptedConsole};
use charity_store::{Document, InMemoryStore};

/// An in-memory store plus a scripted console.
pub struct TestSession {
    /// The store under test.
    pub store: InMemoryStore,
    /// The console; inspect its transcript after running.
    pub console: ScriptedConsole,
    /// The collection table used by [`TestSession::run_menu`].
    pub catalog: Catalog,
}

impl TestSession {
    /// Creates a session over an empty store.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_store(InMemoryStore::new(), inputs)
    }

    /// Creates a session over the sample charity data.
    pub fn seeded<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_store(scenarios::charity_store(), inputs)
    }

    /// Creates a session over an existing store.
    pub fn with_store<I, S>(store: InMemoryStore, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            store,
            console: ScriptedConsole::new(inputs),
            catalog: Catalog::default(),
        }
    }

    /// Returns an engine over this session's store and console.
    pub fn engine(&mut self) -> Engine<'_> {
        Engine::new(&self.store, &mut self.console)
    }

    /// Runs the full menu until exit or end of input.
    pub fn run_menu(&mut self) {
        Menu::new(&self.store, &mut self.console, &self.catalog)
            .run()
            .expect("menu should end cleanly");
    }

    /// Snapshot of a collection's documents.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.store.documents(collection)
    }
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use charity_store::Value;

    /// A store seeded with the sample charity collections.
    pub fn charity_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        seed_demo(&store, &Catalog::default()).expect("seeding an in-memory store cannot fail");
        store
    }

    /// A collection whose template fields are `name` and `amount`.
    pub fn name_amount_store(collection: &str) -> InMemoryStore {
        InMemoryStore::with_documents(
            collection,
            vec![Document::from_pairs([
                ("name", Value::from("Template")),
                ("amount", Value::Int32(1)),
            ])],
        )
    }

    /// A collection with `count` numbered documents (`id` field 1..=count).
    pub fn numbered_store(collection: &str, count: i32) -> InMemoryStore {
        InMemoryStore::with_documents(
            collection,
            (1..=count)
                .map(|i| {
                    Document::from_pairs([
                        ("id", Value::Int32(i)),
                        ("label", Value::from(format!("item {i}"))),
                    ])
                })
                .collect(),
        )
    }

    /// A collection whose documents have different shapes, in that order.
    pub fn mixed_shape_store(collection: &str) -> InMemoryStore {
        InMemoryStore::with_documents(
            collection,
            vec![
                Document::from_pairs([("Name", "Short")]),
                Document::from_pairs([("Name", "Long"), ("Email", "long@example.org")]),
            ],
        )
    }
}
