//! User confirmation prompts for destructive operations.

use crate::error::{NfoError, NfoResult};
use dialoguer::Confirm;

/// Trait for interactive confirmation, kept behind a trait object so
/// command handlers can be exercised without a terminal.
pub trait Prompter {
    /// Asks the user a yes/no question, defaulting to no.
    fn confirm(&self, prompt: &str) -> NfoResult<bool>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str) -> NfoResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| NfoError::ConfigError(e.to_string()))
    }
}
