use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::answers::AnswerSet;
use super::catalog::{catalog, Question};
use super::contact::{ContactDetails, ZipCode, ZipCodeError};
use super::error::AssessmentError;
use super::intake::{
    AssessmentSummary, IntakeError, LeadIntake, LeadReceipt, LeadSubmission, ZipLocation,
    ZipLookup, ZipLookupError,
};
use super::scoring::{self, AssessmentResult};
use super::wizard::{WizardEvent, WizardState};

/// Lead posted outside the wizard, e.g. from the find-care form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub contact: ContactDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<AnswerSet>,
}

/// New wizard state plus the intake receipt when the event submitted a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardTransition {
    pub state: WizardState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<LeadReceipt>,
}

/// Service composing the question catalog, scoring, and collaborator boundaries.
pub struct AssessmentService<L, Z> {
    intake: Arc<L>,
    zips: Arc<Z>,
}

impl<L, Z> AssessmentService<L, Z>
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    pub fn new(intake: Arc<L>, zips: Arc<Z>) -> Self {
        Self { intake, zips }
    }

    pub fn questions(&self) -> &'static [Question] {
        catalog()
    }

    pub fn score(&self, answers: &AnswerSet) -> Result<AssessmentResult, AssessmentServiceError> {
        Ok(scoring::score(answers)?)
    }

    /// Resume `state` (or start fresh) and apply `event`. A `submit` event also
    /// forwards the lead; if intake fails the error is returned and the caller
    /// keeps its previous state so the visitor can retry.
    pub fn advance(
        &self,
        state: Option<WizardState>,
        event: WizardEvent,
    ) -> Result<WizardTransition, AssessmentServiceError> {
        let current = match state {
            Some(state) => state.resume()?,
            None => WizardState::start(),
        };
        debug!(
            event = event.label(),
            phase = current.phase().label(),
            "applying wizard event"
        );

        let (next, contact) = match event {
            WizardEvent::Submit { contact } => current.submit(&contact)?,
            other => {
                let state = current.apply(&other)?;
                return Ok(WizardTransition {
                    state,
                    receipt: None,
                });
            }
        };

        let lead = LeadSubmission {
            contact,
            assessment: next.result().map(AssessmentSummary::from),
        };
        let receipt = self.forward(lead)?;

        Ok(WizardTransition {
            state: next,
            receipt: Some(receipt),
        })
    }

    /// Validate and forward a lead. Answers, when present, must be complete.
    pub fn submit_lead(&self, request: LeadRequest) -> Result<LeadReceipt, AssessmentServiceError> {
        let contact = request
            .contact
            .validate()
            .map_err(AssessmentError::from)?;
        let assessment = match request.answers {
            Some(answers) => Some(AssessmentSummary::from(&scoring::score(&answers)?)),
            None => None,
        };

        self.forward(LeadSubmission {
            contact,
            assessment,
        })
    }

    pub fn lookup_zip(&self, raw: &str) -> Result<ZipLocation, AssessmentServiceError> {
        let zip = ZipCode::parse(raw)?;
        self.zips
            .resolve(&zip)?
            .ok_or(AssessmentServiceError::UnknownZip(zip))
    }

    fn forward(&self, lead: LeadSubmission) -> Result<LeadReceipt, AssessmentServiceError> {
        let recommendation = lead
            .assessment
            .as_ref()
            .map(|summary| summary.recommendation.as_str());
        let zip = lead.contact.zip.clone();

        match self.intake.submit(lead) {
            Ok(receipt) => {
                info!(
                    lead_id = %receipt.lead_id.0,
                    %zip,
                    recommendation = recommendation.unwrap_or("none"),
                    "lead accepted"
                );
                Ok(receipt)
            }
            Err(err) => {
                warn!(%zip, error = %err, "lead intake failed");
                Err(err.into())
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    InvalidZip(#[from] ZipCodeError),
    #[error("no service area location for ZIP {0}")]
    UnknownZip(ZipCode),
    #[error(transparent)]
    ZipLookup(#[from] ZipLookupError),
}
