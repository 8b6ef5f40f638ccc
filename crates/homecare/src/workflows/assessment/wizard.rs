use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{question_for, Question, QuestionKey};
use super::contact::{ContactDetails, ValidatedContact};
use super::error::AssessmentError;
use super::scoring::{self, AssessmentResult};

/// Where the visitor currently is in the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum WizardPhase {
    Answering { index: usize },
    ReviewingResult,
    CollectingContact,
    Submitted,
}

impl WizardPhase {
    pub const fn label(self) -> &'static str {
        match self {
            WizardPhase::Answering { .. } => "answering",
            WizardPhase::ReviewingResult => "reviewing-result",
            WizardPhase::CollectingContact => "collecting-contact",
            WizardPhase::Submitted => "submitted",
        }
    }
}

/// Input driving one wizard transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WizardEvent {
    Answer { key: QuestionKey, option: String },
    Back,
    Proceed,
    Submit { contact: ContactDetails },
}

impl WizardEvent {
    pub fn label(&self) -> &'static str {
        match self {
            WizardEvent::Answer { .. } => "answer",
            WizardEvent::Back => "go back",
            WizardEvent::Proceed => "proceed",
            WizardEvent::Submit { .. } => "submit",
        }
    }
}

/// Immutable snapshot of a wizard run.
///
/// Transitions borrow the current state and hand back a new one; a rejected
/// transition leaves the caller's value as it was. Every key before the
/// current question is always answered. Answers after it may linger after
/// `back` until they are overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    phase: WizardPhase,
    answers: AnswerSet,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    result: Option<AssessmentResult>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::start()
    }
}

impl WizardState {
    pub fn start() -> Self {
        Self {
            phase: WizardPhase::Answering { index: 0 },
            answers: AnswerSet::new(),
            result: None,
        }
    }

    /// Re-check a state received from outside (e.g. a client round trip) and
    /// recompute its result so a stale or forged score is never trusted.
    pub fn resume(self) -> Result<Self, AssessmentError> {
        let Self { phase, answers, .. } = self;

        let result = match phase {
            WizardPhase::Answering { index } => {
                if index >= QuestionKey::COUNT {
                    return Err(AssessmentError::InconsistentState(format!(
                        "question index {index} is past the last question"
                    )));
                }
                if let Some(gap) = QuestionKey::ordered()[..index]
                    .iter()
                    .find(|key| !answers.contains(**key))
                {
                    return Err(AssessmentError::InconsistentState(format!(
                        "question '{gap}' was skipped"
                    )));
                }
                None
            }
            _ => Some(scoring::score(&answers).map_err(|err| {
                AssessmentError::InconsistentState(format!("{} requires {err}", phase.label()))
            })?),
        };

        Ok(Self {
            phase,
            answers,
            result,
        })
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn current_key(&self) -> Option<QuestionKey> {
        match self.phase {
            WizardPhase::Answering { index } => QuestionKey::at(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_key().map(question_for)
    }

    /// Number of questions passed so far.
    pub fn progress(&self) -> usize {
        match self.phase {
            WizardPhase::Answering { index } => index,
            _ => QuestionKey::COUNT,
        }
    }

    /// Record `option_id` for the current question and move forward. Answering
    /// the last question scores the run and moves to review.
    pub fn answer(&self, key: QuestionKey, option_id: &str) -> Result<Self, AssessmentError> {
        let WizardPhase::Answering { index } = self.phase else {
            return Err(AssessmentError::OutOfRangeNavigation {
                phase: self.phase.label(),
            });
        };
        let expected = QuestionKey::at(index).ok_or(AssessmentError::OutOfRangeNavigation {
            phase: self.phase.label(),
        })?;
        if key != expected {
            return Err(AssessmentError::QuestionOutOfOrder {
                expected,
                received: key,
            });
        }

        let mut answers = self.answers.clone();
        answers.record(key, option_id)?;

        let next = index + 1;
        if next < QuestionKey::COUNT {
            return Ok(Self {
                phase: WizardPhase::Answering { index: next },
                answers,
                result: None,
            });
        }

        let result = scoring::score(&answers)?;
        Ok(Self {
            phase: WizardPhase::ReviewingResult,
            answers,
            result: Some(result),
        })
    }

    /// Step back one question. Outside `answering`, or at the first question,
    /// the state is returned unchanged.
    pub fn back(&self) -> Self {
        match self.phase {
            WizardPhase::Answering { index } if index > 0 => Self {
                phase: WizardPhase::Answering { index: index - 1 },
                answers: self.answers.clone(),
                result: None,
            },
            _ => self.clone(),
        }
    }

    pub fn proceed(&self) -> Result<Self, AssessmentError> {
        match self.phase {
            WizardPhase::ReviewingResult => Ok(Self {
                phase: WizardPhase::CollectingContact,
                ..self.clone()
            }),
            other => Err(AssessmentError::InvalidTransition {
                event: "proceed",
                phase: other.label(),
            }),
        }
    }

    /// Validate contact details and move to `submitted`. Forwarding the lead is
    /// left to the caller, who should keep the previous state if that fails.
    pub fn submit(
        &self,
        contact: &ContactDetails,
    ) -> Result<(Self, ValidatedContact), AssessmentError> {
        if self.phase != WizardPhase::CollectingContact {
            return Err(AssessmentError::InvalidTransition {
                event: "submit",
                phase: self.phase.label(),
            });
        }

        let validated = contact.validate()?;
        let next = Self {
            phase: WizardPhase::Submitted,
            ..self.clone()
        };
        Ok((next, validated))
    }

    /// Apply any event; `submit` discards the validated contact.
    pub fn apply(&self, event: &WizardEvent) -> Result<Self, AssessmentError> {
        match event {
            WizardEvent::Answer { key, option } => self.answer(*key, option),
            WizardEvent::Back => Ok(self.back()),
            WizardEvent::Proceed => self.proceed(),
            WizardEvent::Submit { contact } => self.submit(contact).map(|(next, _)| next),
        }
    }
}
