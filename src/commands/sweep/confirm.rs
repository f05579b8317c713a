//! The confirmation gate in front of destructive runs.

use crate::error::{Result, SweepError};
use dialoguer::Confirm;

/// Something that can answer a yes/no question before branches are deleted.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt on the controlling terminal. Defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| {
                SweepError::UserError(format!(
                    "cannot ask for confirmation: {}\n\n\
                     Rerun with --yes to delete without a prompt.",
                    e
                ))
            })
    }
}

/// A canned answer, recording the questions it was asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FixedAnswer {
    pub(crate) answer: bool,
    pub(crate) asked: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl FixedAnswer {
    pub(crate) fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Default::default(),
        }
    }
}

#[cfg(test)]
impl Confirmation for FixedAnswer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answer)
    }
}
