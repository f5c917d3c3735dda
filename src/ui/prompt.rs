//! Interactive confirmation prompts.

use dialoguer::Confirm;

/// Capability of asking the user a yes/no question.
pub trait ConfirmPrompt {
    /// Ask for confirmation; `false` means cancel.
    fn confirm(&self, message: &str) -> bool;
}

/// Console prompt backed by dialoguer.
pub struct ConsolePrompt;

impl ConsolePrompt {
    /// Create a console prompt.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        // A closed stdin or interrupted prompt counts as a negative answer.
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
