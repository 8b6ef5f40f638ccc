//! Care needs assessment: question catalog, wizard progression, scoring, and
//! the lead intake / ZIP lookup boundaries the website hands results to.

pub mod answers;
pub mod catalog;
pub mod contact;
pub mod directory;
mod error;
pub mod intake;
pub mod router;
pub mod scoring;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{catalog, question_for, AnswerOption, Question, QuestionKey, ScoredOption};
pub use contact::{ContactDetails, ContactError, ValidatedContact, ZipCode, ZipCodeError};
pub use directory::{StaticZipDirectory, ZipDirectoryError};
pub use error::AssessmentError;
pub use intake::{
    AssessmentSummary, IntakeError, LeadId, LeadIntake, LeadReceipt, LeadSubmission, ZipLocation,
    ZipLookup, ZipLookupError,
};
pub use router::assessment_router;
pub use scoring::{score, AssessmentResult, CareRecommendation, DimensionScore, ServiceCategory};
pub use service::{AssessmentService, AssessmentServiceError, LeadRequest, WizardTransition};
pub use wizard::{WizardEvent, WizardPhase, WizardState};
