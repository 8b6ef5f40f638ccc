use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::answers::AnswerSet;
use super::error::AssessmentError;
use super::intake::{LeadIntake, ZipLookup};
use super::service::{AssessmentService, AssessmentServiceError, LeadRequest};
use super::wizard::{WizardEvent, WizardState};

/// Wizard round trip: the client holds the state and posts it back with each event.
#[derive(Debug, Deserialize)]
pub struct WizardRequest {
    #[serde(default)]
    pub state: Option<WizardState>,
    pub event: WizardEvent,
}

/// Router builder exposing the assessment, lead, and ZIP endpoints.
pub fn assessment_router<L, Z>(service: Arc<AssessmentService<L, Z>>) -> Router
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessment/questions",
            get(questions_handler::<L, Z>),
        )
        .route("/api/v1/assessment/score", post(score_handler::<L, Z>))
        .route("/api/v1/assessment/wizard", post(wizard_handler::<L, Z>))
        .route("/api/v1/assessment/leads", post(lead_handler::<L, Z>))
        .route("/api/v1/zip/:zip", get(zip_handler::<L, Z>))
        .with_state(service)
}

pub(crate) async fn questions_handler<L, Z>(
    State(service): State<Arc<AssessmentService<L, Z>>>,
) -> Response
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    (StatusCode::OK, Json(service.questions())).into_response()
}

pub(crate) async fn score_handler<L, Z>(
    State(service): State<Arc<AssessmentService<L, Z>>>,
    Json(raw): Json<BTreeMap<String, String>>,
) -> Response
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    let scored = AnswerSet::from_pairs(&raw)
        .map_err(AssessmentServiceError::from)
        .and_then(|answers| service.score(&answers));

    match scored {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn wizard_handler<L, Z>(
    State(service): State<Arc<AssessmentService<L, Z>>>,
    Json(request): Json<WizardRequest>,
) -> Response
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    let WizardRequest { state, event } = request;
    let previous = state.clone().unwrap_or_default();

    match service.advance(state, event) {
        Ok(transition) => (StatusCode::OK, Json(transition)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            let payload = json!({
                "error": err.to_string(),
                "resume_at": resume_at(&err),
                "state": previous,
            });
            (status, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lead_handler<L, Z>(
    State(service): State<Arc<AssessmentService<L, Z>>>,
    Json(request): Json<LeadRequest>,
) -> Response
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    match service.submit_lead(request) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn zip_handler<L, Z>(
    State(service): State<Arc<AssessmentService<L, Z>>>,
    Path(zip): Path<String>,
) -> Response
where
    L: LeadIntake + 'static,
    Z: ZipLookup + 'static,
{
    match service.lookup_zip(&zip) {
        Ok(location) => (StatusCode::OK, Json(location)).into_response(),
        Err(err) => error_response(err),
    }
}

fn status_for(err: &AssessmentServiceError) -> StatusCode {
    match err {
        AssessmentServiceError::Assessment(_) | AssessmentServiceError::InvalidZip(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentServiceError::UnknownZip(_) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Intake(_) => StatusCode::BAD_GATEWAY,
        AssessmentServiceError::ZipLookup(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn resume_at(err: &AssessmentServiceError) -> Option<&'static str> {
    match err {
        AssessmentServiceError::Assessment(inner) => inner.resume_at().map(|key| key.as_str()),
        _ => None,
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = status_for(&err);
    let mut payload = json!({ "error": err.to_string() });

    if let AssessmentServiceError::Assessment(AssessmentError::IncompleteAssessment { missing }) =
        &err
    {
        payload["missing"] = json!(missing);
    }
    if let Some(key) = resume_at(&err) {
        payload["resume_at"] = json!(key);
    }

    (status, Json(payload)).into_response()
}
