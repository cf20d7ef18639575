//! Generic CRUD engine.
//!
//! Each operation takes only a collection name, discovers what it needs from
//! the store, prompts through the [`Console`], prints its own result, and
//! returns an outcome the caller may ignore. Store failures are reported at
//! the operation boundary; only console shutdown conditions propagate.

mod aggregate;
mod create;
mod delete;
mod read;
mod update;

pub use aggregate::{Total, TotalOutcome};
pub use create::CreateOutcome;
pub use delete::{DeleteOutcome, CONFIRM_TOKEN};
pub use read::ReadOutcome;
pub use update::UpdateOutcome;

use crate::console::Console;
use crate::error::CoreResult;
use charity_store::DocumentStore;

/// Runs CRUD operations against one store through one console.
///
/// The store handle is opened once by the caller and passed in; the engine
/// never owns or closes it.
pub struct Engine<'a> {
    store: &'a dyn DocumentStore,
    console: &'a mut dyn Console,
}

impl<'a> Engine<'a> {
    /// Creates an engine over a store and console.
    pub fn new(store: &'a dyn DocumentStore, console: &'a mut dyn Console) -> Self {
        Self { store, console }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) {
        self.console.write_line(line.as_ref());
    }

    /// Prompts for one line and trims surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Propagates console interrupt, end of input and I/O errors.
    pub fn ask(&mut self, prompt: impl AsRef<str>) -> CoreResult<String> {
        Ok(self.console.read_line(prompt.as_ref())?.trim().to_string())
    }
}
