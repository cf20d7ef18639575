//! Delete one document or the whole collection.

use super::Engine;
use crate::coerce::coerce_search_key;
use crate::error::CoreResult;
use charity_store::{FieldFilter, StoreError};
use tracing::{debug, info, warn};

/// Answer that confirms a bulk delete, compared case-insensitively.
pub const CONFIRM_TOKEN: &str = "y";

/// Result of [`Engine::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One matching document was deleted.
    Deleted,
    /// No document matched the lookup.
    NotFound,
    /// Every document was deleted; carries the count.
    DeletedAll(u64),
    /// The bulk delete was not confirmed.
    Cancelled,
    /// The mode selection was not recognized.
    InvalidChoice,
    /// A store error occurred; carries its text.
    Failed(String),
}

impl Engine<'_> {
    /// Deletes either the first document matching a field value or, after
    /// confirmation, every document in the collection.
    ///
    /// # Errors
    ///
    /// Only console shutdown conditions are returned as errors.
    pub fn delete(&mut self, collection: &str) -> CoreResult<DeleteOutcome> {
        self.say(format!("\n--- Delete document(s) from collection: {collection} ---"));
        self.say("1. Delete a specific document by field");
        self.say("2. Delete all documents in the collection");

        match self.ask("Choose an action: ")?.as_str() {
            "1" => self.delete_by_field(collection),
            "2" => self.delete_everything(collection),
            _ => {
                self.say("Invalid choice. Returning to the CRUD menu.");
                Ok(DeleteOutcome::InvalidChoice)
            }
        }
    }

    fn delete_by_field(&mut self, collection: &str) -> CoreResult<DeleteOutcome> {
        let field = self.ask("Enter field name to identify the document: ")?;
        let raw = self.ask(format!("Enter value for '{field}': "))?;
        let filter = FieldFilter::new(field.clone(), coerce_search_key(&raw));

        match self.store.delete_one(collection, &filter) {
            Ok(deleted) if deleted > 0 => {
                debug!(collection, %filter, "document deleted");
                self.say(format!("Document with {field} = {raw} was successfully deleted."));
                Ok(DeleteOutcome::Deleted)
            }
            Ok(_) => {
                self.say(format!("No document found with {field} = {raw}."));
                Ok(DeleteOutcome::NotFound)
            }
            Err(e) => Ok(self.report_delete_error(collection, &e)),
        }
    }

    fn delete_everything(&mut self, collection: &str) -> CoreResult<DeleteOutcome> {
        let answer = self.ask("Are you sure you want to delete all documents? (y/n): ")?;
        if !answer.eq_ignore_ascii_case(CONFIRM_TOKEN) {
            self.say("Operation canceled.");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.store.delete_all(collection) {
            Ok(count) => {
                info!(collection, count, "deleted all documents");
                self.say(format!("Deleted {count} documents from the collection."));
                Ok(DeleteOutcome::DeletedAll(count))
            }
            Err(e) => Ok(self.report_delete_error(collection, &e)),
        }
    }

    fn report_delete_error(&mut self, collection: &str, error: &StoreError) -> DeleteOutcome {
        warn!(collection, error = %error, "delete failed");
        self.say(format!("Error during deletion: {error}"));
        DeleteOutcome::Failed(error.to_string())
    }
}
