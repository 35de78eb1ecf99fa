use super::domain::{EmployeeId, ProposalId, RequestId, UrgencyTier};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Business event behind a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ProposalSubmitted,
    ProposalEvaluated,
    ValidationRequested,
    RequestRefused,
    CandidateSelected,
    CandidateAccepted,
    CandidateRefused,
    SelectionFailed,
    MissionStarted,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::ProposalSubmitted => "proposal_submitted",
            NotificationKind::ProposalEvaluated => "proposal_evaluated",
            NotificationKind::ValidationRequested => "validation_requested",
            NotificationKind::RequestRefused => "request_refused",
            NotificationKind::CandidateSelected => "candidate_selected",
            NotificationKind::CandidateAccepted => "candidate_accepted",
            NotificationKind::CandidateRefused => "candidate_refused",
            NotificationKind::SelectionFailed => "selection_failed",
            NotificationKind::MissionStarted => "mission_started",
        }
    }
}

/// Directed message emitted at a workflow transition. Purely informational;
/// delivery carries no back-pressure on the state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub urgency: UrgencyTier,
    pub title: String,
    pub body: String,
    pub sender: Option<EmployeeId>,
    pub recipient: EmployeeId,
    pub request_id: RequestId,
    pub proposal_id: Option<ProposalId>,
}

/// Outbound delivery hook (in-app feed, e-mail adapter, ...).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, event: NotificationEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Best-effort fan-out. The acting user never receives their own action's
/// notification, and delivery failures are logged, never propagated.
pub(crate) fn dispatch<N: NotificationPublisher + ?Sized>(
    publisher: &N,
    actor: &EmployeeId,
    events: Vec<NotificationEvent>,
) {
    for event in events {
        if &event.recipient == actor {
            continue;
        }
        if let Err(err) = publisher.publish(event.clone()) {
            warn!(
                kind = event.kind.label(),
                recipient = %event.recipient.0,
                error = %err,
                "notification delivery failed"
            );
        }
    }
}
