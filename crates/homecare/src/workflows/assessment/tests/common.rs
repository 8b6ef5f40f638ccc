use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::answers::AnswerSet;
use crate::workflows::assessment::catalog::QuestionKey;
use crate::workflows::assessment::contact::{ContactDetails, ZipCode};
use crate::workflows::assessment::directory::StaticZipDirectory;
use crate::workflows::assessment::intake::{
    IntakeError, LeadIntake, LeadReceipt, LeadSubmission, ZipLocation, ZipLookup, ZipLookupError,
};
use crate::workflows::assessment::service::AssessmentService;
use crate::workflows::assessment::wizard::WizardState;
use crate::workflows::assessment::assessment_router;

pub(super) const LOWEST: [(&str, &str); 7] = [
    ("relationship", "self"),
    ("mobility", "independent"),
    ("hygiene", "independent"),
    ("medication", "no-support"),
    ("safety-concerns", "no"),
    ("memory-loss", "none"),
    ("social-engagement", "regular"),
];

pub(super) const HIGHEST: [(&str, &str); 7] = [
    ("relationship", "parent"),
    ("mobility", "bedbound"),
    ("hygiene", "unable-without-help"),
    ("medication", "unable-without-support"),
    ("safety-concerns", "yes"),
    ("memory-loss", "often"),
    ("social-engagement", "isolated"),
];

pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
    AnswerSet::from_pairs(pairs.iter().copied()).expect("fixture answers are valid")
}

pub(super) fn lowest_answers() -> AnswerSet {
    answers(&LOWEST)
}

pub(super) fn highest_answers() -> AnswerSet {
    answers(&HIGHEST)
}

/// Drive a fresh wizard through every question using `pairs` in catalog order.
pub(super) fn completed_wizard(pairs: &[(&str, &str)]) -> WizardState {
    pairs
        .iter()
        .fold(WizardState::start(), |state, (key, option)| {
            let key = QuestionKey::parse(key).expect("fixture key is valid");
            state.answer(key, option).expect("fixture answer accepted")
        })
}

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        first_name: "Maria".to_string(),
        last_name: "Lopez".to_string(),
        email: "maria.lopez@example.com".to_string(),
        phone: "515-555-0142".to_string(),
        zip: "50309".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryIntake {
    pub(super) leads: Arc<Mutex<Vec<LeadSubmission>>>,
}

impl MemoryIntake {
    pub(super) fn leads(&self) -> Vec<LeadSubmission> {
        self.leads.lock().expect("lock").clone()
    }
}

impl LeadIntake for MemoryIntake {
    fn submit(&self, lead: LeadSubmission) -> Result<LeadReceipt, IntakeError> {
        self.leads.lock().expect("lock").push(lead);
        Ok(LeadReceipt::issue())
    }
}

pub(super) struct UnavailableIntake;

impl LeadIntake for UnavailableIntake {
    fn submit(&self, _lead: LeadSubmission) -> Result<LeadReceipt, IntakeError> {
        Err(IntakeError::Unavailable("crm offline".to_string()))
    }
}

pub(super) struct FailingZipLookup;

impl ZipLookup for FailingZipLookup {
    fn resolve(&self, _zip: &ZipCode) -> Result<Option<ZipLocation>, ZipLookupError> {
        Err(ZipLookupError::Unavailable("geocoder timeout".to_string()))
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryIntake, StaticZipDirectory>,
    Arc<MemoryIntake>,
) {
    let intake = Arc::new(MemoryIntake::default());
    let zips = Arc::new(StaticZipDirectory::builtin());
    let service = AssessmentService::new(intake.clone(), zips);
    (service, intake)
}

pub(super) fn router_with_service<L, Z>(service: AssessmentService<L, Z>) -> axum::Router
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
