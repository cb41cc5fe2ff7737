//! Draft form - the unsaved new-poll input

use crate::constants::INITIAL_DRAFT_OPTIONS;
use crate::error::ValidationError;
use crate::models::NewPoll;

#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub question: String,
    pub options: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Draft {
            question: String::new(),
            options: vec![String::new(); INITIAL_DRAFT_OPTIONS],
        }
    }
}

impl Draft {
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Replace the option at `index`; returns false (and changes nothing)
    /// when the index is out of range.
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                *option = text.into();
                true
            }
            None => false,
        }
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    /// Presence check: question and every option must be non-empty
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && self.options.iter().all(|o| !o.is_empty())
    }

    /// Build the creation request body, or reject an incomplete draft
    pub fn to_new_poll(&self) -> Result<NewPoll, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError);
        }
        Ok(NewPoll {
            question: self.question.clone(),
            options: self.options.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_shape() {
        let draft = Draft::default();
        assert!(draft.question.is_empty());
        assert_eq!(draft.options, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_set_option_replaces_only_that_index() {
        let mut draft = Draft::default();
        draft.add_option();
        assert!(draft.set_option(1, "Blue"));
        assert_eq!(draft.options, vec!["", "Blue", ""]);
        assert!(!draft.set_option(3, "Green"));
        assert_eq!(draft.options.len(), 3);
    }

    #[test]
    fn test_incomplete_drafts_rejected() {
        let mut draft = Draft::default();
        draft.set_option(0, "Yes");
        draft.set_option(1, "No");
        assert_eq!(draft.to_new_poll(), Err(ValidationError));

        draft.set_question("Ship it?");
        draft.add_option();
        assert_eq!(draft.to_new_poll(), Err(ValidationError));

        draft.set_option(2, "Later");
        let body = draft.to_new_poll().unwrap();
        assert_eq!(body.options, vec!["Yes", "No", "Later"]);
    }

    #[test]
    fn test_reset_restores_two_empty_options() {
        let mut draft = Draft::default();
        draft.set_question("Lunch?");
        draft.add_option();
        draft.add_option();
        draft.reset();
        assert_eq!(draft, Draft::default());
    }
}
