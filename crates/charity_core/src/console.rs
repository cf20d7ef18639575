//! Line-based console abstraction.

use crate::error::{CoreError, CoreResult};
use std::collections::VecDeque;

/// A blocking, line-oriented console.
///
/// Every prompt blocks until one line is available. Implementations map a
/// user interrupt to [`CoreError::Interrupted`] and closed input to
/// [`CoreError::EndOfInput`].
pub trait Console {
    /// Shows `prompt` and reads one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error on interrupt, end of input, or I/O failure.
    fn read_line(&mut self, prompt: &str) -> CoreResult<String>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str);
}

/// A console driven by a fixed list of input lines.
///
/// Records every prompt and output line in a transcript. Once the inputs
/// run out, reads fail with [`CoreError::EndOfInput`].
///
/// # Example
///
/// ```rust
/// use charity_core::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["yes"]);
/// assert_eq!(console.read_line("Continue? ").unwrap(), "yes");
/// assert!(console.read_line("Again? ").is_err());
/// assert!(console.saw("Continue? "));
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and output line, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns true if any transcript entry contains `text`.
    pub fn saw(&self, text: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(text))
    }

    /// Number of transcript entries containing `text`.
    pub fn count_of(&self, text: &str) -> usize {
        self.transcript.iter().filter(|line| line.contains(text)).count()
    }

    /// Number of inputs not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> CoreResult<String> {
        self.transcript.push(prompt.to_string());
        self.inputs.pop_front().ok_or(CoreError::EndOfInput)
    }

    fn write_line(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}
