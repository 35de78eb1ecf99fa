use super::domain::{Employee, EmployeeId, RoleTier, StaffingRequest};
use chrono::NaiveDate;

/// Read-only view over the external HR directory. The bulk refresh from the
/// upstream system happens elsewhere; this trait sees already-materialized
/// employee records.
pub trait EmployeeDirectory: Send + Sync {
    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, DirectoryError>;

    /// Active employees of the given tier scoped to one department.
    fn active_in_department(
        &self,
        tier: RoleTier,
        department: &str,
    ) -> Result<Vec<Employee>, DirectoryError>;

    /// Active employees of the given tier across the whole organization.
    fn active_by_tier(&self, tier: RoleTier) -> Result<Vec<Employee>, DirectoryError>;

    /// Live availability check over a date range.
    fn is_available(
        &self,
        id: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("employee {0} not found in directory")]
    UnknownEmployee(String),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Raw matching signals for one candidate against one request, each in
/// 0..=100. Supplied by external matching logic; the scoring engine only
/// weights and combines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSignals {
    pub competence: u8,
    pub experience: u8,
    pub availability: u8,
    pub proximity: u8,
    pub available_for_period: bool,
    pub similar_experience: bool,
    pub recommended: bool,
}

/// Source of raw matching signals consumed by the scoring engine.
pub trait SignalSource: Send + Sync {
    fn signals(
        &self,
        candidate: &Employee,
        request: &StaffingRequest,
    ) -> Result<CandidateSignals, SignalError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("signal source unavailable: {0}")]
    Unavailable(String),
}
