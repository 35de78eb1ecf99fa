//! Temporary-staffing workflow core: candidate scoring, the proposal ledger,
//! the sequential three-level validation state machine, and the candidate
//! response loop, behind pluggable storage, directory, and notification
//! seams.

pub mod directory;
pub mod domain;
mod error;
pub mod ledger;
pub mod memory;
pub mod notification;
pub mod repository;
mod response;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use directory::{CandidateSignals, DirectoryError, EmployeeDirectory, SignalSource};
pub use domain::{
    AuditEntry, CandidateProposal, CandidateResponse, CandidateResponseWindow, DetailedScore,
    Employee, EmployeeId, ProposalId, ProposalOrigin, ProposalStatus, RequestId, RequestStatus,
    RequestStatusView, RoleTier, ScoreOrigin, StaffingRequest, UrgencyTier, ValidationDecision,
    ValidationRecord, WindowId,
};
pub use error::StaffingError;
pub use ledger::{EvaluationDecision, RankedProposal};
pub use notification::{NotificationEvent, NotificationKind, NotificationPublisher, NotifyError};
pub use repository::{RepositoryError, StaffingRepository};
pub use response::NO_RESPONSE_REASON;
pub use router::staffing_router;
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{NewRequest, StaffingService};
pub use validation::{determine_next_validators, NewCandidate};
