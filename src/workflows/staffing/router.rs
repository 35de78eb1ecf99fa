use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::directory::EmployeeDirectory;
use super::domain::{
    CandidateResponse, EmployeeId, ProposalId, RequestId, UrgencyTier, ValidationDecision,
};
use super::error::StaffingError;
use super::ledger::EvaluationDecision;
use super::notification::NotificationPublisher;
use super::repository::{RepositoryError, StaffingRepository};
use super::service::{NewRequest, StaffingService};
use super::validation::NewCandidate;

type Service<R, D, S, N> = Arc<StaffingService<R, D, S, N>>;

/// Router builder exposing the staffing workflow over HTTP.
pub fn staffing_router<R, D, S, N>(service: Service<R, D, S, N>) -> Router
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/staffing/requests", post(create_request::<R, D, S, N>))
        .route(
            "/api/v1/staffing/requests/:request_id",
            get(request_status::<R, D, S, N>),
        )
        .route(
            "/api/v1/staffing/requests/:request_id/proposals",
            post(propose::<R, D, S, N>),
        )
        .route(
            "/api/v1/staffing/proposals/:proposal_id/evaluation",
            post(evaluate::<R, D, S, N>),
        )
        .route(
            "/api/v1/staffing/requests/:request_id/validations",
            post(validate::<R, D, S, N>),
        )
        .route(
            "/api/v1/staffing/requests/:request_id/response",
            post(respond::<R, D, S, N>),
        )
        .route(
            "/api/v1/staffing/requests/:request_id/ranking",
            get(ranking::<R, D, S, N>),
        )
        .with_state(service)
}

fn error_response(error: StaffingError) -> Response {
    let status = match &error {
        StaffingError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        StaffingError::NotFound { .. } => StatusCode::NOT_FOUND,
        StaffingError::DuplicateProposal => StatusCode::CONFLICT,
        StaffingError::ProposalsClosed
        | StaffingError::LimitExceeded { .. }
        | StaffingError::CandidateInactive
        | StaffingError::InvalidState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        StaffingError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        StaffingError::Repository(_) | StaffingError::Directory(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let body = Json(json!({
        "code": error.code(),
        "error": error.to_string(),
    }));
    (status, body).into_response()
}

#[derive(Debug, Deserialize)]
struct CreateRequestBody {
    requester: String,
    position: String,
    department: String,
    site: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    urgency: UrgencyTier,
}

async fn create_request<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Json(body): Json<CreateRequestBody>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    let payload = NewRequest {
        position: body.position,
        department: body.department,
        site: body.site,
        start_date: body.start_date,
        end_date: body.end_date,
        urgency: body.urgency,
    };
    match service.create_request(&EmployeeId(body.requester), payload) {
        Ok(request) => (StatusCode::CREATED, Json(request.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

async fn request_status<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    match service.get_request(&RequestId(request_id)) {
        Ok(request) => (StatusCode::OK, Json(request.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct ProposeBody {
    proposer: String,
    candidate: String,
    justification: String,
}

async fn propose<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(request_id): Path<String>,
    Json(body): Json<ProposeBody>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    match service.propose(
        &RequestId(request_id),
        &EmployeeId(body.proposer),
        &EmployeeId(body.candidate),
        body.justification,
    ) {
        Ok(proposal) => {
            let payload = json!({
                "proposal_id": proposal.id.0,
                "status": proposal.status.label(),
                "origin": proposal.origin.label(),
                "final_score": proposal.final_score(),
            });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct EvaluateBody {
    evaluator: String,
    adjusted_score: Option<u8>,
    comment: String,
    decision: EvaluationDecision,
}

async fn evaluate<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(proposal_id): Path<String>,
    Json(body): Json<EvaluateBody>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    match service.evaluate(
        &ProposalId(proposal_id),
        &EmployeeId(body.evaluator),
        body.adjusted_score,
        body.comment,
        body.decision,
    ) {
        Ok(proposal) => {
            let payload = json!({
                "proposal_id": proposal.id.0,
                "status": proposal.status.label(),
                "final_score": proposal.final_score(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct NewCandidateBody {
    candidate: String,
    justification: String,
}

#[derive(Debug, Deserialize)]
struct ValidateBody {
    validator: String,
    #[serde(default)]
    retained: Vec<String>,
    decision: ValidationDecision,
    #[serde(default)]
    comment: String,
    new_candidate: Option<NewCandidateBody>,
}

async fn validate<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(request_id): Path<String>,
    Json(body): Json<ValidateBody>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    let new_candidate = body.new_candidate.map(|payload| NewCandidate {
        candidate: EmployeeId(payload.candidate),
        justification: payload.justification,
    });
    match service.record_validation(
        &RequestId(request_id),
        &EmployeeId(body.validator),
        body.retained.into_iter().map(ProposalId).collect(),
        body.decision,
        body.comment,
        new_candidate,
    ) {
        Ok(record) => {
            let payload = json!({
                "level": record.level,
                "decision": record.decision.label(),
                "retained": record.retained.iter().map(|id| id.0.clone()).collect::<Vec<_>>(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    response: CandidateResponse,
    reason: Option<String>,
}

async fn respond<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(request_id): Path<String>,
    Json(body): Json<ResponseBody>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    match service.record_response(&RequestId(request_id), body.response, body.reason) {
        Ok(request) => (StatusCode::OK, Json(request.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

async fn ranking<R, D, S, N>(
    State(service): State<Service<R, D, S, N>>,
    Path(request_id): Path<String>,
) -> Response
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: super::directory::SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    match service.ranked_proposals(&RequestId(request_id)) {
        Ok(ranked) => {
            let payload: Vec<_> = ranked
                .iter()
                .map(|entry| {
                    json!({
                        "proposal_id": entry.proposal.id.0,
                        "candidate": entry.proposal.candidate.0,
                        "final_score": entry.final_score,
                        "currently_available": entry.currently_available,
                        "status": entry.proposal.status.label(),
                    })
                })
                .collect();
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
