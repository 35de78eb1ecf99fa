//! In-memory reference implementations of the storage and collaborator
//! seams. They back the demo CLI and the test suites; a database-backed
//! repository would slot in behind the same traits.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use super::directory::{
    CandidateSignals, DirectoryError, EmployeeDirectory, SignalError, SignalSource,
};
use super::domain::{
    AuditEntry, CandidateProposal, CandidateResponseWindow, Employee, EmployeeId, ProposalId,
    RequestId, RoleTier, StaffingRequest, ValidationRecord, WindowId,
};
use super::notification::{NotificationEvent, NotificationPublisher, NotifyError};
use super::repository::{RepositoryError, StaffingRepository};

#[derive(Default)]
struct Store {
    requests: HashMap<RequestId, StaffingRequest>,
    proposals: HashMap<ProposalId, CandidateProposal>,
    validations: Vec<ValidationRecord>,
    windows: HashMap<WindowId, CandidateResponseWindow>,
    audit: Vec<AuditEntry>,
}

/// Mutex-guarded store keyed by aggregate ids.
#[derive(Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit trail snapshot, in append order.
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.store.lock().expect("store lock").audit.clone()
    }
}

impl StaffingRepository for InMemoryRepository {
    fn insert_request(&self, request: StaffingRequest) -> Result<StaffingRequest, RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if store.requests.contains_key(&request.id) {
            return Err(RepositoryError::Conflict);
        }
        store.requests.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn update_request(&self, request: StaffingRequest) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if !store.requests.contains_key(&request.id) {
            return Err(RepositoryError::NotFound);
        }
        store.requests.insert(request.id.clone(), request);
        Ok(())
    }

    fn fetch_request(&self, id: &RequestId) -> Result<Option<StaffingRequest>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        Ok(store.requests.get(id).cloned())
    }

    fn insert_proposal(
        &self,
        proposal: CandidateProposal,
    ) -> Result<CandidateProposal, RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if store.proposals.contains_key(&proposal.id) {
            return Err(RepositoryError::Conflict);
        }
        store.proposals.insert(proposal.id.clone(), proposal.clone());
        Ok(proposal)
    }

    fn update_proposal(&self, proposal: CandidateProposal) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if !store.proposals.contains_key(&proposal.id) {
            return Err(RepositoryError::NotFound);
        }
        store.proposals.insert(proposal.id.clone(), proposal);
        Ok(())
    }

    fn fetch_proposal(
        &self,
        id: &ProposalId,
    ) -> Result<Option<CandidateProposal>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        Ok(store.proposals.get(id).cloned())
    }

    fn proposals_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<CandidateProposal>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        let mut proposals: Vec<_> = store
            .proposals
            .values()
            .filter(|proposal| &proposal.request_id == request_id)
            .cloned()
            .collect();
        proposals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(proposals)
    }

    fn insert_validation(&self, record: ValidationRecord) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        store.validations.push(record);
        Ok(())
    }

    fn validations_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<ValidationRecord>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        Ok(store
            .validations
            .iter()
            .filter(|record| &record.request_id == request_id)
            .cloned()
            .collect())
    }

    fn insert_window(
        &self,
        window: CandidateResponseWindow,
    ) -> Result<CandidateResponseWindow, RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if store.windows.contains_key(&window.id) {
            return Err(RepositoryError::Conflict);
        }
        store.windows.insert(window.id.clone(), window.clone());
        Ok(window)
    }

    fn update_window(&self, window: CandidateResponseWindow) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        if !store.windows.contains_key(&window.id) {
            return Err(RepositoryError::NotFound);
        }
        store.windows.insert(window.id.clone(), window);
        Ok(())
    }

    fn windows_for_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<CandidateResponseWindow>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        let mut windows: Vec<_> = store
            .windows
            .values()
            .filter(|window| &window.request_id == request_id)
            .cloned()
            .collect();
        windows.sort_by(|a, b| a.opened_at.cmp(&b.opened_at));
        Ok(windows)
    }

    fn open_windows(&self) -> Result<Vec<CandidateResponseWindow>, RepositoryError> {
        let store = self.store.lock().expect("store lock");
        Ok(store
            .windows
            .values()
            .filter(|window| window.is_open())
            .cloned()
            .collect())
    }

    fn append_audit(&self, entry: AuditEntry) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().expect("store lock");
        store.audit.push(entry);
        Ok(())
    }
}

/// Collects published notifications for inspection.
#[derive(Default)]
pub struct InMemoryPublisher {
    events: Mutex<Vec<NotificationEvent>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().expect("events lock").clone()
    }
}

impl NotificationPublisher for InMemoryPublisher {
    fn publish(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        self.events.lock().expect("events lock").push(event);
        Ok(())
    }
}

/// Directory stub over a fixed employee roster. Availability over a period
/// collapses to the employee's current availability flag.
pub struct InMemoryDirectory {
    employees: HashMap<EmployeeId, Employee>,
}

impl InMemoryDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.id.clone(), employee))
                .collect(),
        }
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, DirectoryError> {
        Ok(self.employees.get(id).cloned())
    }

    fn active_in_department(
        &self,
        tier: RoleTier,
        department: &str,
    ) -> Result<Vec<Employee>, DirectoryError> {
        let mut matches: Vec<_> = self
            .employees
            .values()
            .filter(|employee| {
                employee.active && employee.role_tier == tier && employee.department == department
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }

    fn active_by_tier(&self, tier: RoleTier) -> Result<Vec<Employee>, DirectoryError> {
        let mut matches: Vec<_> = self
            .employees
            .values()
            .filter(|employee| employee.active && employee.role_tier == tier)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }

    fn is_available(
        &self,
        id: &EmployeeId,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<bool, DirectoryError> {
        self.employees
            .get(id)
            .map(|employee| employee.available)
            .ok_or_else(|| DirectoryError::UnknownEmployee(id.0.clone()))
    }
}

/// Signal source over pre-seeded per-candidate signals, with a neutral
/// default for anyone unlisted.
pub struct StaticSignalSource {
    signals: HashMap<EmployeeId, CandidateSignals>,
    default: CandidateSignals,
}

impl StaticSignalSource {
    pub fn new(signals: HashMap<EmployeeId, CandidateSignals>) -> Self {
        Self {
            signals,
            default: CandidateSignals {
                competence: 60,
                experience: 60,
                availability: 60,
                proximity: 60,
                available_for_period: true,
                similar_experience: false,
                recommended: false,
            },
        }
    }
}

impl SignalSource for StaticSignalSource {
    fn signals(
        &self,
        candidate: &Employee,
        _request: &StaffingRequest,
    ) -> Result<CandidateSignals, SignalError> {
        Ok(self
            .signals
            .get(&candidate.id)
            .copied()
            .unwrap_or(self.default))
    }
}
