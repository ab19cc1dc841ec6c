//! Interactive confirmation
//!
//! Asks on the terminal via dialoguer. A prompt that cannot be shown (no TTY,
//! Ctrl-C) counts as a decline.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use tracing::warn;

use crate::domain::ports::Confirmation;

pub struct DialoguerConfirmation {
    default: bool,
}

impl DialoguerConfirmation {
    pub fn new() -> Self {
        Self { default: false }
    }
}

impl Default for DialoguerConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmation for DialoguerConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(self.default)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed, treating as declined");
                false
            }
        }
    }
}
