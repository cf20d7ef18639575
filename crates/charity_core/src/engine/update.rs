//! Update by field lookup.

use super::Engine;
use crate::coerce::{coerce, coerce_search_key};
use crate::error::CoreResult;
use charity_store::{Document, FieldFilter, ID_FIELD};
use tracing::{debug, warn};

/// Result of [`Engine::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The store reported a modified document.
    Updated,
    /// No document matched the lookup.
    NotFound,
    /// The store reported zero modifications, including the case where
    /// every field was kept. Reported to the user as a failure.
    Unchanged,
    /// The matched document had no fields besides its identifier.
    NoEditableFields,
    /// A store error occurred; carries its text.
    Failed(String),
}

impl Engine<'_> {
    /// Finds one document by a field value and rewrites its fields.
    ///
    /// The lookup value becomes an integer when it is all digits. Each
    /// non-identifier field is then prompted for; an empty answer keeps the
    /// current value, anything else is coerced. All fields are written back
    /// as one merge. Success requires the store to report a modification,
    /// so keeping every field reports failure.
    ///
    /// # Errors
    ///
    /// Only console shutdown conditions are returned as errors.
    pub fn update(&mut self, collection: &str) -> CoreResult<UpdateOutcome> {
        self.say(format!("\n--- Update document in collection: {collection} ---"));

        let field = self.ask("Enter field name to search by: ")?;
        let raw = self.ask(format!("Enter value for {field}: "))?;
        let filter = FieldFilter::new(field.clone(), coerce_search_key(&raw));

        let current = match self.store.find_one(collection, &filter) {
            Ok(Some(document)) => document,
            Ok(None) => {
                self.say(format!("No document found with {field} = {raw}"));
                return Ok(UpdateOutcome::NotFound);
            }
            Err(e) => return Ok(self.report_update_error(collection, &e)),
        };

        self.say("\nCurrent document:");
        self.say(format!("{current:#}"));

        let mut changes = Document::new();
        for (key, value) in current.iter().filter(|(key, _)| *key != ID_FIELD) {
            let input = self.ask(format!(
                "Enter new value for '{key}' (leave empty to keep current value): "
            ))?;
            let next = if input.is_empty() {
                value.clone()
            } else {
                coerce(&input)
            };
            changes.insert(key, next);
        }

        if changes.is_empty() {
            self.say("No fields were updated.");
            return Ok(UpdateOutcome::NoEditableFields);
        }

        match self.store.update_one(collection, &filter, changes) {
            Ok(result) if result.modified > 0 => {
                debug!(collection, %filter, "document updated");
                self.say("\nDocument updated successfully!");
                Ok(UpdateOutcome::Updated)
            }
            Ok(result) => {
                debug!(collection, %filter, matched = result.matched, "update modified nothing");
                self.say(format!("Failed to update the document with {field} = {raw}."));
                Ok(UpdateOutcome::Unchanged)
            }
            Err(e) => Ok(self.report_update_error(collection, &e)),
        }
    }

    fn report_update_error(
        &mut self,
        collection: &str,
        error: &charity_store::StoreError,
    ) -> UpdateOutcome {
        warn!(collection, error = %error, "update failed");
        self.say(format!("Error: {error}"));
        UpdateOutcome::Failed(error.to_string())
    }
}
