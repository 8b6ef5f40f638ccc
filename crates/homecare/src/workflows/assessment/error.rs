use super::catalog::QuestionKey;
use super::contact::ContactError;

/// Failures raised while answering, navigating, or scoring an assessment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown question key '{0}'")]
    UnknownQuestion(String),
    #[error("option '{option}' is not valid for question '{key}'")]
    InvalidOptionSelected { key: QuestionKey, option: String },
    #[error("assessment incomplete, unanswered: {}", join_keys(.missing))]
    IncompleteAssessment { missing: Vec<QuestionKey> },
    #[error("no question is awaiting an answer while {phase}")]
    OutOfRangeNavigation { phase: &'static str },
    #[error("expected an answer for '{expected}' but received '{received}'")]
    QuestionOutOfOrder {
        expected: QuestionKey,
        received: QuestionKey,
    },
    #[error("cannot {event} while {phase}")]
    InvalidTransition {
        event: &'static str,
        phase: &'static str,
    },
    #[error("wizard state is inconsistent: {0}")]
    InconsistentState(String),
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl AssessmentError {
    /// Question the host should return the user to, when one applies.
    pub fn resume_at(&self) -> Option<QuestionKey> {
        match self {
            AssessmentError::IncompleteAssessment { missing } => missing.first().copied(),
            AssessmentError::QuestionOutOfOrder { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

fn join_keys(keys: &[QuestionKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
