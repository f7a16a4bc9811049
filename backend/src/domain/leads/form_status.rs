//! Submission status of a lead form.

use serde::Serialize;

use crate::domain::foundation::StateMachine;

/// A form is edited until one successful submission, then shows its
/// acknowledgment for the rest of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

impl StateMachine for FormStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (FormStatus::Editing, FormStatus::Submitted))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            FormStatus::Editing => vec![FormStatus::Submitted],
            FormStatus::Submitted => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_moves_to_submitted() {
        assert_eq!(
            FormStatus::Editing.transition_to(FormStatus::Submitted),
            Ok(FormStatus::Submitted)
        );
    }

    #[test]
    fn submitted_is_terminal() {
        assert!(FormStatus::Submitted.is_terminal());
        assert!(FormStatus::Submitted
            .transition_to(FormStatus::Editing)
            .is_err());
    }
}
