//! Confirmation Port
//!
//! Asks the user to confirm a simulated action before its result message is
//! shown. Implementations can be interactive or fixed.

pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. Use this when `--yes` is passed.
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything. Used when no terminal is attached.
pub struct AutoDecline;

impl Confirmation for AutoDecline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
