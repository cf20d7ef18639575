//! Read: dump every document.

use super::Engine;
use crate::error::CoreResult;
use tracing::{debug, warn};

/// Result of [`Engine::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// All documents were printed; carries how many.
    Listed(usize),
    /// A store error stopped the listing; carries its text.
    Failed(String),
}

impl Engine<'_> {
    /// Prints every document in store-native order.
    ///
    /// # Errors
    ///
    /// Only console shutdown conditions are returned as errors.
    pub fn read(&mut self, collection: &str) -> CoreResult<ReadOutcome> {
        self.say(format!("\n--- Read documents from collection: {collection} ---"));

        let store = self.store;
        let documents = match store.iter_all(collection) {
            Ok(documents) => documents,
            Err(e) => {
                warn!(collection, error = %e, "failed to start listing");
                self.say(format!("Error: {e}"));
                return Ok(ReadOutcome::Failed(e.to_string()));
            }
        };

        let mut listed = 0;
        for next in documents {
            match next {
                Ok(document) => {
                    self.say(format!("{document:#}"));
                    self.say("");
                    listed += 1;
                }
                Err(e) => {
                    warn!(collection, listed, error = %e, "listing interrupted");
                    self.say(format!("Error: {e}"));
                    return Ok(ReadOutcome::Failed(e.to_string()));
                }
            }
        }

        debug!(collection, listed, "listed documents");
        Ok(ReadOutcome::Listed(listed))
    }
}
