//! Field-inference create.

use super::Engine;
use crate::coerce::coerce;
use crate::error::CoreResult;
use crate::template::FieldTemplate;
use charity_store::Document;
use tracing::{debug, warn};

/// Result of [`Engine::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// One document was inserted.
    Created,
    /// The collection had no document to infer fields from.
    EmptyCollection,
    /// The store did not acknowledge the insert.
    NotAcknowledged,
    /// A store error occurred; carries its text.
    Failed(String),
}

impl Engine<'_> {
    /// Inserts a document shaped like an existing one.
    ///
    /// Samples one document as the template, prompts for every field except
    /// the identifier, coerces each answer and inserts the result.
    ///
    /// # Errors
    ///
    /// Only console shutdown conditions are returned as errors.
    pub fn create(&mut self, collection: &str) -> CoreResult<CreateOutcome> {
        self.say(format!("\n--- Create a document in collection: {collection} ---"));

        let sample = match self.store.sample_one(collection) {
            Ok(Some(sample)) => sample,
            Ok(None) => {
                self.say(format!(
                    "The collection '{collection}' is empty. There is no document to infer fields from."
                ));
                return Ok(CreateOutcome::EmptyCollection);
            }
            Err(e) => {
                warn!(collection, error = %e, "failed to sample template document");
                self.say(format!("Error: {e}"));
                return Ok(CreateOutcome::Failed(e.to_string()));
            }
        };

        let template = FieldTemplate::from_sample(&sample);
        debug!(collection, fields = ?template.fields(), "inferred field template");

        let mut document = Document::new();
        for field in template.fields() {
            let raw = self.ask(format!("Enter value for '{field}': "))?;
            document.insert(field.clone(), coerce(&raw));
        }

        match self.store.insert_one(collection, document) {
            Ok(result) if result.acknowledged => {
                debug!(collection, id = ?result.inserted_id, "document inserted");
                self.say("Document created successfully!");
                Ok(CreateOutcome::Created)
            }
            Ok(_) => {
                self.say("Failed to create document.");
                Ok(CreateOutcome::NotAcknowledged)
            }
            Err(e) => {
                warn!(collection, error = %e, "insert failed");
                self.say(format!("Error: {e}"));
                Ok(CreateOutcome::Failed(e.to_string()))
            }
        }
    }
}
