use super::domain::{
    AuditEntry, CandidateProposal, CandidateResponseWindow, ProposalId, RequestId,
    StaffingRequest, ValidationRecord,
};

/// Storage abstraction so the service can be exercised in isolation. One
/// request and its child rows form an aggregate; implementations persist each
/// call atomically.
///
/// The service issues several calls per workflow transition (proposal
/// updates, then the validation record, then the request row), all under the
/// per-request lock. A backend whose individual calls can fail mid-sequence
/// must wrap the calls of one transition in its own transaction, keyed by
/// the request aggregate, so a transition commits fully or not at all.
pub trait StaffingRepository: Send + Sync {
    fn insert_request(&self, request: StaffingRequest) -> Result<StaffingRequest, RepositoryError>;
    fn update_request(&self, request: StaffingRequest) -> Result<(), RepositoryError>;
    fn fetch_request(&self, id: &RequestId) -> Result<Option<StaffingRequest>, RepositoryError>;

    fn insert_proposal(
        &self,
        proposal: CandidateProposal,
    ) -> Result<CandidateProposal, RepositoryError>;
    fn update_proposal(&self, proposal: CandidateProposal) -> Result<(), RepositoryError>;
    fn fetch_proposal(&self, id: &ProposalId)
        -> Result<Option<CandidateProposal>, RepositoryError>;
    fn proposals_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<CandidateProposal>, RepositoryError>;

    fn insert_validation(&self, record: ValidationRecord) -> Result<(), RepositoryError>;
    fn validations_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<ValidationRecord>, RepositoryError>;

    fn insert_window(
        &self,
        window: CandidateResponseWindow,
    ) -> Result<CandidateResponseWindow, RepositoryError>;
    fn update_window(&self, window: CandidateResponseWindow) -> Result<(), RepositoryError>;
    fn windows_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<CandidateResponseWindow>, RepositoryError>;
    /// Every window still awaiting a response, across all requests.
    fn open_windows(&self) -> Result<Vec<CandidateResponseWindow>, RepositoryError>;

    fn append_audit(&self, entry: AuditEntry) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
