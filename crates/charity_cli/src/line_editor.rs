//! Terminal console backed by a line editor.

use charity_core::{Console, CoreError, CoreResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// A [`Console`] reading from the terminal with line editing and in-memory
/// history.
///
/// Ctrl-C maps to [`CoreError::Interrupted`] and Ctrl-D to
/// [`CoreError::EndOfInput`], which the menu turns into a graceful exit.
pub struct LineEditorConsole {
    editor: DefaultEditor,
}

impl LineEditorConsole {
    /// Creates a console on the current terminal.
    pub fn new() -> CoreResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| CoreError::console(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Console for LineEditorConsole {
    fn read_line(&mut self, prompt: &str) -> CoreResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(CoreError::Interrupted),
            Err(ReadlineError::Eof) => Err(CoreError::EndOfInput),
            Err(err) => Err(CoreError::console(err.to_string())),
        }
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
