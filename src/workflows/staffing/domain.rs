use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for staffing requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Identifier wrapper for candidate proposals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProposalId(pub String);

/// Identifier wrapper for employees sourced from the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Identifier wrapper for candidate response windows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

/// Closed role hierarchy; the discriminant order is the authority for every
/// tier comparison in scoring and permission checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    Worker,
    TeamLead,
    Manager,
    Director,
    HumanResources,
    Admin,
}

impl RoleTier {
    pub fn label(&self) -> &'static str {
        match self {
            RoleTier::Worker => "worker",
            RoleTier::TeamLead => "team_lead",
            RoleTier::Manager => "manager",
            RoleTier::Director => "director",
            RoleTier::HumanResources => "human_resources",
            RoleTier::Admin => "admin",
        }
    }
}

/// Employee record consumed read-only from the directory provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub display_name: String,
    pub role_tier: RoleTier,
    pub department: String,
    pub site: String,
    pub manager: Option<EmployeeId>,
    pub active: bool,
    pub available: bool,
}

/// Urgency tier attached to a staffing request at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Normal,
    Medium,
    High,
    Critical,
}

impl UrgencyTier {
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Normal => "normal",
            UrgencyTier::Medium => "medium",
            UrgencyTier::High => "high",
            UrgencyTier::Critical => "critical",
        }
    }
}

/// Lifecycle of a staffing request. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Submitted,
    AwaitingValidation,
    CandidateSelected,
    InProgress,
    Completed,
    Refused,
    Cancelled,
    SelectionFailed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => "submitted",
            RequestStatus::AwaitingValidation => "awaiting_validation",
            RequestStatus::CandidateSelected => "candidate_selected",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Refused => "refused",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::SelectionFailed => "selection_failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStatus::Completed
                | RequestStatus::Refused
                | RequestStatus::Cancelled
                | RequestStatus::SelectionFailed
        )
    }
}

/// A need to temporarily cover an absent employee's role.
///
/// `current_validation_level` starts at 0 and only ever moves forward, one
/// level at a time, up to `required_validation_levels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequest {
    pub id: RequestId,
    pub number: String,
    pub position: String,
    pub department: String,
    pub site: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub urgency: UrgencyTier,
    pub status: RequestStatus,
    pub current_validation_level: u8,
    pub required_validation_levels: u8,
    pub requester: EmployeeId,
    pub selected_candidate: Option<EmployeeId>,
    pub accepts_proposals: bool,
    pub effective_start: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl StaffingRequest {
    /// Whether new proposals may still be attached to this request.
    pub fn open_for_proposals(&self) -> bool {
        self.accepts_proposals && !self.status.is_terminal()
    }

    /// Whether every required validation level has been recorded.
    pub fn fully_validated(&self) -> bool {
        self.current_validation_level >= self.required_validation_levels
    }
}

/// Classification of who nominated a candidate for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalOrigin {
    SelfNomination,
    DirectManager,
    TeamLead,
    DepartmentManager,
    Director,
    HumanResources,
    System,
    Other,
}

impl ProposalOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            ProposalOrigin::SelfNomination => "self_nomination",
            ProposalOrigin::DirectManager => "direct_manager",
            ProposalOrigin::TeamLead => "team_lead",
            ProposalOrigin::DepartmentManager => "department_manager",
            ProposalOrigin::Director => "director",
            ProposalOrigin::HumanResources => "human_resources",
            ProposalOrigin::System => "system",
            ProposalOrigin::Other => "other",
        }
    }
}

/// Lifecycle of a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Submitted,
    Evaluated,
    Retained,
    Rejected,
    Validated,
}

impl ProposalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Submitted => "submitted",
            ProposalStatus::Evaluated => "evaluated",
            ProposalStatus::Retained => "retained",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Validated => "validated",
        }
    }

    /// Statuses that participate in the ranking used for selection.
    pub fn is_rankable(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Evaluated | ProposalStatus::Retained | ProposalStatus::Validated
        )
    }
}

/// Who produced a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrigin {
    Automatic,
    HumanAdjusted,
}

/// Scoring breakdown backing a proposal. Every field is a point value; the
/// total is clamped to 0..=100 by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedScore {
    pub competence: u8,
    pub experience: u8,
    pub availability: u8,
    pub proximity: u8,
    pub human_proposal_bonus: u8,
    pub similar_experience_bonus: u8,
    pub recommendation_bonus: u8,
    pub hierarchy_bonus: u8,
    pub unavailability_penalty: u8,
    pub total: u8,
    pub origin: ScoreOrigin,
}

/// A single person's nomination for a staffing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProposal {
    pub id: ProposalId,
    pub request_id: RequestId,
    pub candidate: EmployeeId,
    pub proposer: EmployeeId,
    pub origin: ProposalOrigin,
    pub justification: String,
    pub score: DetailedScore,
    pub adjusted_score: Option<u8>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}

impl CandidateProposal {
    /// Human-adjusted score wins over the automatic one when present.
    pub fn final_score(&self) -> u8 {
        self.adjusted_score.unwrap_or(self.score.total)
    }
}

/// Decision taken by a validator at one hierarchical level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationDecision {
    Approve,
    Refuse,
    AddCandidate,
}

impl ValidationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            ValidationDecision::Approve => "approve",
            ValidationDecision::Refuse => "refuse",
            ValidationDecision::AddCandidate => "add_candidate",
        }
    }
}

/// One hierarchical approval decision. Levels for a given request, in
/// creation order, form a strictly increasing sequence starting at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub request_id: RequestId,
    pub level: u8,
    pub validator: EmployeeId,
    pub decision: ValidationDecision,
    pub comment: String,
    pub retained: Vec<ProposalId>,
    pub requested_at: DateTime<Utc>,
    pub decided_at: DateTime<Utc>,
}

/// The selected candidate's answer, or the lack of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateResponse {
    Pending,
    Accepted,
    Refused,
    Expired,
}

impl CandidateResponse {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateResponse::Pending => "pending",
            CandidateResponse::Accepted => "accepted",
            CandidateResponse::Refused => "refused",
            CandidateResponse::Expired => "expired",
        }
    }
}

/// Tracks the selected candidate's pending confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResponseWindow {
    pub id: WindowId,
    pub request_id: RequestId,
    pub candidate: EmployeeId,
    pub opened_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub response: CandidateResponse,
    pub refusal_reason: Option<String>,
}

impl CandidateResponseWindow {
    pub fn is_open(&self) -> bool {
        self.response == CandidateResponse::Pending
    }
}

/// Immutable audit trail entry appended by every state-changing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: &'static str,
    pub actor: EmployeeId,
    pub request_id: RequestId,
    pub before: String,
    pub after: String,
    pub at: DateTime<Utc>,
}

/// Sanitized representation of a request's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct RequestStatusView {
    pub request_id: RequestId,
    pub number: String,
    pub status: &'static str,
    pub current_validation_level: u8,
    pub required_validation_levels: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_candidate: Option<EmployeeId>,
}

impl StaffingRequest {
    pub fn status_view(&self) -> RequestStatusView {
        RequestStatusView {
            request_id: self.id.clone(),
            number: self.number.clone(),
            status: self.status.label(),
            current_validation_level: self.current_validation_level,
            required_validation_levels: self.required_validation_levels,
            selected_candidate: self.selected_candidate.clone(),
        }
    }
}
