//! Interactive menu controller.

use crate::catalog::{Catalog, CollectionEntry};
use crate::console::Console;
use crate::engine::Engine;
use crate::error::CoreResult;
use charity_store::DocumentStore;
use tracing::debug;

/// Message printed when the session ends.
pub const CLOSING: &str = "Closing...";

/// An entry of the per-collection action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert a document.
    Create,
    /// List all documents.
    Read,
    /// Edit one document.
    Update,
    /// Delete one or all documents.
    Delete,
    /// Return to the collection menu.
    Back,
    /// Leave the program.
    Exit,
    /// Sum a numeric field over the collection.
    Total,
}

impl Action {
    /// Parses a menu choice.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Create),
            "2" => Some(Self::Read),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Back),
            "6" => Some(Self::Exit),
            "7" => Some(Self::Total),
            _ => None,
        }
    }
}

enum Flow {
    Back,
    Exit,
}

/// The two-level collection/action menu.
///
/// Runs until the user exits, interrupts, or input ends. Operation-level
/// failures are reported by the engine and never end the loop.
pub struct Menu<'a> {
    engine: Engine<'a>,
    catalog: &'a Catalog,
}

impl<'a> Menu<'a> {
    /// Creates a menu over a store, console and collection table.
    pub fn new(
        store: &'a dyn DocumentStore,
        console: &'a mut dyn Console,
        catalog: &'a Catalog,
    ) -> Self {
        Self {
            engine: Engine::new(store, console),
            catalog,
        }
    }

    /// Runs the menu loop.
    ///
    /// # Errors
    ///
    /// Interrupt and end of input end the session with a closing message
    /// and return `Ok`. Other console failures are returned.
    pub fn run(&mut self) -> CoreResult<()> {
        match self.collection_loop() {
            Err(e) if e.is_shutdown() => {
                debug!(reason = %e, "session ended");
                self.engine.say(format!("\n{CLOSING}"));
                Ok(())
            }
            other => other,
        }
    }

    fn collection_loop(&mut self) -> CoreResult<()> {
        let catalog = self.catalog;
        let exit_choice = catalog.exit_choice();
        let show_all_choice = catalog.show_all_choice();
        loop {
            self.print_collections();
            let choice = self.engine.ask("Choose an action: ")?;

            if let Some(entry) = catalog.select(&choice) {
                if let Flow::Exit = self.action_loop(entry)? {
                    return Ok(());
                }
            } else if choice == exit_choice {
                self.engine.say(CLOSING);
                return Ok(());
            } else if choice == show_all_choice {
                self.show_all()?;
            } else {
                self.engine.say("Invalid choice.");
            }
        }
    }

    fn print_collections(&mut self) {
        self.engine.say("\n--- Collections ---");
        for (i, entry) in self.catalog.entries().iter().enumerate() {
            self.engine.say(format!("{}. {}", i + 1, entry.label));
        }
        self.engine.say(format!("{}. Exit", self.catalog.exit_choice()));
        self.engine.say(format!("{}. Show all collections", self.catalog.show_all_choice()));
    }

    /// Lists every catalog collection in menu order.
    fn show_all(&mut self) -> CoreResult<()> {
        let catalog = self.catalog;
        for entry in catalog.entries() {
            self.engine.read(&entry.name)?;
        }
        Ok(())
    }

    fn action_loop(&mut self, entry: &CollectionEntry) -> CoreResult<Flow> {
        let collection = entry.name.as_str();
        loop {
            self.engine.say(format!("\n--- CRUD menu for {collection} ---"));
            self.engine.say("1. Create");
            self.engine.say("2. Read");
            self.engine.say("3. Update");
            self.engine.say("4. Delete");
            self.engine.say("5. Back to choose another collection");
            self.engine.say("6. Exit");
            self.engine.say("7. Total of a field");

            let choice = self.engine.ask("Choose an action: ")?;
            let Some(action) = Action::from_choice(&choice) else {
                self.engine.say("Invalid choice.");
                continue;
            };
            debug!(collection, ?action, "menu action");

            match action {
                Action::Create => {
                    self.engine.create(collection)?;
                }
                Action::Read => {
                    self.engine.read(collection)?;
                }
                Action::Update => {
                    self.engine.update(collection)?;
                }
                Action::Delete => {
                    self.engine.delete(collection)?;
                }
                Action::Total => {
                    self.engine.total(collection)?;
                }
                Action::Back => return Ok(Flow::Back),
                Action::Exit => {
                    self.engine.say(CLOSING);
                    return Ok(Flow::Exit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use charity_store::{Document, InMemoryStore, Value};

    fn store() -> InMemoryStore {
        InMemoryStore::with_documents("Donors", vec![Document::from_pairs([("Name", "Alice")])])
    }

    fn run(store: &InMemoryStore, inputs: &[&str]) -> ScriptedConsole {
        let catalog = Catalog::default();
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        Menu::new(store, &mut console, &catalog).run().unwrap();
        console
    }

    #[test]
    fn action_choices() {
        assert_eq!(Action::from_choice("1"), Some(Action::Create));
        assert_eq!(Action::from_choice("6"), Some(Action::Exit));
        assert_eq!(Action::from_choice("7"), Some(Action::Total));
        assert_eq!(Action::from_choice("8"), None);
        assert_eq!(Action::from_choice(""), None);
    }

    #[test]
    fn exit_from_collection_menu() {
        let console = run(&store(), &["6"]);
        assert!(console.saw("--- Collections ---"));
        assert!(console.saw("4. Volunteers"));
        assert_eq!(console.transcript().last().map(String::as_str), Some(CLOSING));
    }

    #[test]
    fn exit_from_action_menu() {
        let console = run(&store(), &["1", "6"]);
        assert!(console.saw("--- CRUD menu for Donors ---"));
        assert_eq!(console.transcript().last().map(String::as_str), Some(CLOSING));
    }

    #[test]
    fn back_returns_to_collection_menu() {
        let console = run(&store(), &["1", "5", "6"]);
        assert_eq!(console.count_of("--- Collections ---"), 2);
    }

    #[test]
    fn invalid_choices_reprompt() {
        let console = run(&store(), &["9", "1", "x", "6"]);
        assert_eq!(console.count_of("Invalid choice."), 2);
        assert_eq!(console.count_of("--- Collections ---"), 2);
        assert_eq!(console.count_of("--- CRUD menu for Donors ---"), 2);
    }

    #[test]
    fn volunteers_map_to_underlying_collection() {
        let console = run(&store(), &["4", "6"]);
        assert!(console.saw("--- CRUD menu for Volunteers2 ---"));
    }

    #[test]
    fn end_of_input_closes_gracefully() {
        let console = run(&store(), &["1"]);
        assert_eq!(
            console.transcript().last().map(String::as_str),
            Some("\nClosing...")
        );
    }

    #[test]
    fn operation_failure_does_not_end_loop() {
        let empty = InMemoryStore::new();
        let console = run(&empty, &["1", "1", "2", "6"]);
        assert!(console.saw("is empty"));
        assert!(console.saw("--- Read documents from collection: Donors ---"));
        assert_eq!(console.transcript().last().map(String::as_str), Some(CLOSING));
    }

    #[test]
    fn total_sums_a_field_and_returns_to_action_menu() {
        let store = InMemoryStore::with_documents(
            "Donations",
            vec![
                Document::from_pairs([("Amount", Value::Int32(500))]),
                Document::from_pairs([("Amount", Value::Int32(1200))]),
            ],
        );
        let console = run(&store, &["2", "7", "Amount", "6"]);
        assert!(console.saw("Total Amount: 1700"));
        assert_eq!(console.count_of("--- CRUD menu for Donations ---"), 2);
    }

    #[test]
    fn show_all_reads_every_collection() {
        let console = run(&store(), &["7", "6"]);
        assert!(console.saw("7. Show all collections"));
        for name in ["Donors", "Donations", "Projects", "Volunteers2", "VolunteerProjects"] {
            assert!(console.saw(&format!("--- Read documents from collection: {name} ---")));
        }
        assert!(console.saw("Name: \"Alice\""));
        assert_eq!(console.count_of("--- Collections ---"), 2);
    }
}
