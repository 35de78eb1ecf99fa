use super::directory::DirectoryError;
use super::repository::RepositoryError;

/// Typed failures returned by workflow operations. Validation-rule
/// violations surface here so the API layer can render them; infrastructure
/// failures propagate through the `Repository`/`Directory` variants and abort
/// the enclosing operation.
#[derive(Debug, thiserror::Error)]
pub enum StaffingError {
    #[error("permission denied: {reason}")]
    PermissionDenied { reason: String },
    #[error("request no longer accepts proposals")]
    ProposalsClosed,
    #[error("proposal limit of {limit} per proposer reached for this request")]
    LimitExceeded { limit: u32 },
    #[error("candidate already proposed by this proposer for this request")]
    DuplicateProposal,
    #[error("candidate is not in an active employment status")]
    CandidateInactive,
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl StaffingError {
    /// Stable machine-readable code for every rejected operation.
    pub fn code(&self) -> &'static str {
        match self {
            StaffingError::PermissionDenied { .. } => "permission_denied",
            StaffingError::ProposalsClosed => "proposals_closed",
            StaffingError::LimitExceeded { .. } => "limit_exceeded",
            StaffingError::DuplicateProposal => "duplicate_proposal",
            StaffingError::CandidateInactive => "candidate_inactive",
            StaffingError::InvalidState { .. } => "invalid_state",
            StaffingError::NotFound { .. } => "not_found",
            StaffingError::Repository(_) => "repository_error",
            StaffingError::Directory(_) => "directory_error",
        }
    }
}
