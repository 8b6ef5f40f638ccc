use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::{ValidatedContact, ZipCode};
use super::scoring::{AssessmentResult, CareRecommendation, ServiceCategory};

/// Identifier handed back by the intake collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl LeadId {
    /// Process-wide sequence used by in-memory adapters.
    pub fn next() -> Self {
        let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("lead-{id:06}"))
    }
}

/// Assessment outcome attached to a lead, when the visitor completed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub score: u8,
    pub recommendation: CareRecommendation,
    pub suggested_services: Vec<ServiceCategory>,
}

impl From<&AssessmentResult> for AssessmentSummary {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            score: result.score,
            recommendation: result.recommendation,
            suggested_services: result.suggested_services.clone(),
        }
    }
}

/// Payload forwarded to the lead intake collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub contact: ValidatedContact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentSummary>,
}

/// Acknowledgement returned once intake accepted a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub lead_id: LeadId,
    pub received_at: DateTime<Utc>,
}

impl LeadReceipt {
    pub fn issue() -> Self {
        Self {
            lead_id: LeadId::next(),
            received_at: Utc::now(),
        }
    }
}

/// Outbound boundary to whatever system stores and routes new leads (CRM, e-mail).
pub trait LeadIntake: Send + Sync {
    fn submit(&self, lead: LeadSubmission) -> Result<LeadReceipt, IntakeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("lead rejected by intake: {0}")]
    Rejected(String),
    #[error("lead intake unavailable: {0}")]
    Unavailable(String),
}

/// City and state resolved for a ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipLocation {
    pub zip: ZipCode,
    pub city: String,
    pub state: String,
}

/// Resolves ZIP codes for display and form pre-fill.
pub trait ZipLookup: Send + Sync {
    fn resolve(&self, zip: &ZipCode) -> Result<Option<ZipLocation>, ZipLookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZipLookupError {
    #[error("zip lookup unavailable: {0}")]
    Unavailable(String),
}
