use super::domain::{CandidateResponse, CandidateResponseWindow, EmployeeId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Reason recorded when a window expires without an answer.
pub const NO_RESPONSE_REASON: &str = "no response";

pub(crate) fn close_window(
    window: &mut CandidateResponseWindow,
    response: CandidateResponse,
    reason: Option<String>,
) {
    window.response = response;
    window.refusal_reason = match response {
        CandidateResponse::Refused | CandidateResponse::Expired => reason,
        _ => None,
    };
}

pub(crate) fn is_expired(window: &CandidateResponseWindow, now: DateTime<Utc>) -> bool {
    window.is_open() && now > window.deadline
}

/// Candidates that already had their chance on this request: anyone with a
/// resolved window must not be selected again.
pub(crate) fn exhausted_candidates(
    windows: &[CandidateResponseWindow],
) -> HashSet<EmployeeId> {
    windows
        .iter()
        .filter(|window| !window.is_open())
        .map(|window| window.candidate.clone())
        .collect()
}
