use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use crate::workflows::staffing::directory::{CandidateSignals, SignalError, SignalSource};
use crate::workflows::staffing::domain::{
    Employee, EmployeeId, RequestStatus, RoleTier, StaffingRequest, UrgencyTier,
};
use crate::workflows::staffing::memory::{
    InMemoryDirectory, InMemoryPublisher, InMemoryRepository, StaticSignalSource,
};
use crate::workflows::staffing::notification::{
    NotificationEvent, NotificationPublisher, NotifyError,
};
use crate::workflows::staffing::scoring::ScoringConfig;
use crate::workflows::staffing::service::{NewRequest, StaffingService};

pub(super) type TestService =
    StaffingService<InMemoryRepository, InMemoryDirectory, StaticSignalSource, InMemoryPublisher>;

pub(super) struct TestContext {
    pub service: Arc<TestService>,
    pub repository: Arc<InMemoryRepository>,
    pub publisher: Arc<InMemoryPublisher>,
}

pub(super) fn id(value: &str) -> EmployeeId {
    EmployeeId(value.to_string())
}

pub(super) fn employee(
    id_str: &str,
    tier: RoleTier,
    department: &str,
    manager: Option<&str>,
) -> Employee {
    Employee {
        id: id(id_str),
        display_name: id_str.replace('-', " "),
        role_tier: tier,
        department: department.to_string(),
        site: "Lyon".to_string(),
        manager: manager.map(id),
        active: true,
        available: true,
    }
}

pub(super) fn roster() -> Vec<Employee> {
    let mut employees = vec![
        employee("emp-req", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("emp-req2", RoleTier::Worker, "logistics", Some("emp-lead")),
        employee("emp-lead", RoleTier::TeamLead, "logistics", Some("emp-mgr")),
        employee("emp-mgr", RoleTier::Manager, "logistics", Some("emp-dir")),
        employee("emp-mgr2", RoleTier::Manager, "logistics", Some("emp-dir")),
        employee("emp-mgr-other", RoleTier::Manager, "maintenance", None),
        employee("emp-dir", RoleTier::Director, "operations", None),
        employee("emp-hr", RoleTier::HumanResources, "hr", None),
        employee("emp-admin", RoleTier::Admin, "it", None),
        employee("cand-a", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("cand-b", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("cand-c", RoleTier::Worker, "logistics", Some("emp-mgr")),
    ];

    let mut inactive = employee("cand-inactive", RoleTier::Worker, "logistics", None);
    inactive.active = false;
    employees.push(inactive);

    let mut busy = employee("cand-busy", RoleTier::Worker, "logistics", None);
    busy.available = false;
    employees.push(busy);

    employees
}

pub(super) fn signals() -> HashMap<EmployeeId, CandidateSignals> {
    let preset = |competence, experience, availability, proximity| CandidateSignals {
        competence,
        experience,
        availability,
        proximity,
        available_for_period: true,
        similar_experience: false,
        recommended: false,
    };
    let mut map = HashMap::new();
    map.insert(id("cand-a"), preset(90, 80, 85, 70));
    map.insert(id("cand-b"), preset(70, 60, 75, 65));
    map.insert(id("cand-c"), preset(50, 45, 60, 55));
    map
}

pub(super) fn context() -> TestContext {
    let repository = Arc::new(InMemoryRepository::new());
    let directory = Arc::new(InMemoryDirectory::new(roster()));
    let source = Arc::new(StaticSignalSource::new(signals()));
    let publisher = Arc::new(InMemoryPublisher::new());
    let service = Arc::new(StaffingService::new(
        repository.clone(),
        directory,
        source,
        publisher.clone(),
        ScoringConfig::default(),
    ));
    TestContext {
        service,
        repository,
        publisher,
    }
}

pub(super) fn new_request_payload() -> NewRequest {
    let start = NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date");
    NewRequest {
        position: "Forklift operator".to_string(),
        department: "logistics".to_string(),
        site: "Lyon".to_string(),
        start_date: start,
        end_date: start + Duration::days(30),
        urgency: UrgencyTier::High,
    }
}

pub(super) fn open_request(ctx: &TestContext) -> StaffingRequest {
    let request = ctx
        .service
        .create_request(&id("emp-req"), new_request_payload())
        .expect("request creation succeeds");
    assert_eq!(request.status, RequestStatus::Submitted);
    assert_eq!(request.current_validation_level, 0);
    request
}

pub(super) fn events_for(ctx: &TestContext, recipient: &str) -> Vec<NotificationEvent> {
    ctx.publisher
        .events()
        .into_iter()
        .filter(|event| event.recipient == id(recipient))
        .collect()
}

/// Signal source that always fails, to exercise the scoring fallback.
pub(super) struct FailingSignals;

impl SignalSource for FailingSignals {
    fn signals(
        &self,
        _candidate: &Employee,
        _request: &StaffingRequest,
    ) -> Result<CandidateSignals, SignalError> {
        Err(SignalError::Unavailable("matcher offline".to_string()))
    }
}

/// Publisher that always fails, to prove notification failures never abort a
/// workflow transition.
pub(super) struct FailingPublisher;

impl NotificationPublisher for FailingPublisher {
    fn publish(&self, _event: NotificationEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp offline".to_string()))
    }
}

pub(super) fn days_from_now(days: i64) -> chrono::DateTime<Utc> {
    Utc::now() + Duration::days(days)
}
