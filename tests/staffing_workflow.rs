//! End-to-end runs of the staffing workflow through the public API: from
//! request creation, over proposals and the three validation levels, to the
//! selected candidate's response.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use staffline::workflows::staffing::memory::{
    InMemoryDirectory, InMemoryPublisher, InMemoryRepository, StaticSignalSource,
};
use staffline::workflows::staffing::{
    CandidateResponse, CandidateSignals, Employee, EmployeeId, NewRequest, NotificationKind,
    ProposalStatus, RequestStatus, RoleTier, ScoringConfig, StaffingRepository, StaffingService,
    UrgencyTier, ValidationDecision,
};

type Service =
    StaffingService<InMemoryRepository, InMemoryDirectory, StaticSignalSource, InMemoryPublisher>;

struct Harness {
    service: Service,
    repository: Arc<InMemoryRepository>,
    publisher: Arc<InMemoryPublisher>,
}

fn id(value: &str) -> EmployeeId {
    EmployeeId(value.to_string())
}

fn employee(id_str: &str, tier: RoleTier, department: &str, manager: Option<&str>) -> Employee {
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

fn signals(competence: u8, experience: u8, availability: u8, proximity: u8) -> CandidateSignals {
    CandidateSignals {
        competence,
        experience,
        availability,
        proximity,
        available_for_period: true,
        similar_experience: false,
        recommended: false,
    }
}

fn harness() -> Harness {
    let roster = vec![
        employee("emp-req", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("emp-lead", RoleTier::TeamLead, "logistics", Some("emp-mgr")),
        employee("emp-mgr", RoleTier::Manager, "logistics", Some("emp-dir")),
        employee("emp-dir", RoleTier::Director, "operations", None),
        employee("emp-hr", RoleTier::HumanResources, "hr", None),
        employee("cand-top", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("cand-mid", RoleTier::Worker, "logistics", Some("emp-mgr")),
        employee("cand-low", RoleTier::Worker, "logistics", Some("emp-mgr")),
    ];
    let mut presets = HashMap::new();
    presets.insert(id("cand-top"), signals(90, 85, 80, 75));
    presets.insert(id("cand-mid"), signals(70, 65, 60, 55));
    presets.insert(id("cand-low"), signals(40, 35, 45, 30));

    let repository = Arc::new(InMemoryRepository::new());
    let publisher = Arc::new(InMemoryPublisher::new());
    let service = StaffingService::new(
        repository.clone(),
        Arc::new(InMemoryDirectory::new(roster)),
        Arc::new(StaticSignalSource::new(presets)),
        publisher.clone(),
        ScoringConfig::default(),
    );
    Harness {
        service,
        repository,
        publisher,
    }
}

fn mission_dates() -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2026, 10, 5).expect("valid mission start date");
    (start, start + Duration::days(45))
}

fn create_request(harness: &Harness) -> staffline::workflows::staffing::StaffingRequest {
    let (start, end) = mission_dates();
    harness
        .service
        .create_request(
            &id("emp-req"),
            NewRequest {
                position: "Warehouse picker".to_string(),
                department: "logistics".to_string(),
                site: "Lyon".to_string(),
                start_date: start,
                end_date: end,
                urgency: UrgencyTier::High,
            },
        )
        .expect("request creation succeeds")
}

fn notified(harness: &Harness, recipient: &str, kind: NotificationKind) -> bool {
    harness
        .publisher
        .events()
        .iter()
        .any(|event| event.recipient == id(recipient) && event.kind == kind)
}

#[test]
fn proposal_is_scored_and_announced() {
    let harness = harness();
    let request = create_request(&harness);

    let proposal = harness
        .service
        .propose(
            &request.id,
            &id("emp-mgr"),
            &id("cand-top"),
            "available".to_string(),
        )
        .expect("proposal accepted");

    assert_eq!(proposal.status, ProposalStatus::Submitted);
    assert!(proposal.score.total <= 100);
    assert!(notified(
        &harness,
        "emp-req",
        NotificationKind::ProposalSubmitted
    ));
}

#[test]
fn mid_chain_approval_moves_to_the_next_level() {
    let harness = harness();
    let request = create_request(&harness);
    let proposal = harness
        .service
        .propose(&request.id, &id("emp-mgr"), &id("cand-top"), "x".to_string())
        .expect("proposal accepted");

    harness
        .service
        .record_validation(
            &request.id,
            &id("emp-mgr"),
            vec![proposal.id.clone()],
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 1 approval accepted");

    let record = harness
        .service
        .record_validation(
            &request.id,
            &id("emp-dir"),
            Vec::new(),
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 2 approval accepted");

    assert_eq!(record.level, 2);
    assert_eq!(record.decision, ValidationDecision::Approve);

    let current = harness
        .service
        .get_request(&request.id)
        .expect("request exists");
    assert_eq!(current.current_validation_level, 2);
    assert_eq!(current.status, RequestStatus::AwaitingValidation);
    assert!(notified(
        &harness,
        "emp-hr",
        NotificationKind::ValidationRequested
    ));
}

#[test]
fn final_approval_selects_the_highest_scored_candidate() {
    let harness = harness();
    let request = create_request(&harness);
    let top = harness
        .service
        .propose(&request.id, &id("emp-mgr"), &id("cand-top"), "x".to_string())
        .expect("proposal accepted");
    let mid = harness
        .service
        .propose(&request.id, &id("emp-lead"), &id("cand-mid"), "x".to_string())
        .expect("proposal accepted");

    harness
        .service
        .record_validation(
            &request.id,
            &id("emp-mgr"),
            vec![top.id.clone(), mid.id.clone()],
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 1 approval accepted");
    for validator in ["emp-dir", "emp-hr"] {
        harness
            .service
            .record_validation(
                &request.id,
                &id(validator),
                Vec::new(),
                ValidationDecision::Approve,
                String::new(),
                None,
            )
            .expect("approval accepted");
    }

    let current = harness
        .service
        .get_request(&request.id)
        .expect("request exists");
    assert_eq!(current.status, RequestStatus::CandidateSelected);
    assert_eq!(current.selected_candidate, Some(id("cand-top")));

    let windows = harness
        .repository
        .windows_for_request(&request.id)
        .expect("windows readable");
    assert_eq!(windows.len(), 1);
    assert!(windows[0].is_open());
    assert_eq!(windows[0].deadline, windows[0].opened_at + Duration::days(3));
    assert!(notified(
        &harness,
        "cand-top",
        NotificationKind::CandidateSelected
    ));
}

#[test]
fn refusal_hands_the_mission_to_the_runner_up() {
    let harness = harness();
    let request = create_request(&harness);
    let mut retained = Vec::new();
    for (proposer, candidate) in [
        ("emp-mgr", "cand-top"),
        ("emp-lead", "cand-mid"),
        ("emp-mgr", "cand-low"),
    ] {
        let proposal = harness
            .service
            .propose(&request.id, &id(proposer), &id(candidate), "x".to_string())
            .expect("proposal accepted");
        retained.push(proposal.id);
    }

    harness
        .service
        .record_validation(
            &request.id,
            &id("emp-mgr"),
            retained,
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 1 approval accepted");
    for validator in ["emp-dir", "emp-hr"] {
        harness
            .service
            .record_validation(
                &request.id,
                &id(validator),
                Vec::new(),
                ValidationDecision::Approve,
                String::new(),
                None,
            )
            .expect("approval accepted");
    }

    let updated = harness
        .service
        .record_response(
            &request.id,
            CandidateResponse::Refused,
            Some("took another mission".to_string()),
        )
        .expect("refusal recorded");

    assert_eq!(updated.status, RequestStatus::CandidateSelected);
    assert_eq!(updated.selected_candidate, Some(id("cand-mid")));

    let windows = harness
        .repository
        .windows_for_request(&request.id)
        .expect("windows readable");
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].response, CandidateResponse::Refused);
    assert_eq!(
        windows[0].refusal_reason.as_deref(),
        Some("took another mission")
    );
    assert_eq!(windows[1].candidate, id("cand-mid"));
    assert!(windows[1].is_open());
}

#[test]
fn refusal_with_nobody_left_fails_the_selection() {
    let harness = harness();
    let request = create_request(&harness);
    let only = harness
        .service
        .propose(&request.id, &id("emp-mgr"), &id("cand-top"), "x".to_string())
        .expect("proposal accepted");

    harness
        .service
        .record_validation(
            &request.id,
            &id("emp-mgr"),
            vec![only.id],
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 1 approval accepted");
    for validator in ["emp-dir", "emp-hr"] {
        harness
            .service
            .record_validation(
                &request.id,
                &id(validator),
                Vec::new(),
                ValidationDecision::Approve,
                String::new(),
                None,
            )
            .expect("approval accepted");
    }

    let updated = harness
        .service
        .record_response(&request.id, CandidateResponse::Refused, None)
        .expect("refusal recorded");

    assert_eq!(updated.status, RequestStatus::SelectionFailed);
    assert!(updated.selected_candidate.is_none());
    assert!(notified(
        &harness,
        "emp-req",
        NotificationKind::SelectionFailed
    ));
}

#[test]
fn acceptance_completes_the_selection_loop() {
    let harness = harness();
    let request = create_request(&harness);
    let only = harness
        .service
        .propose(&request.id, &id("emp-mgr"), &id("cand-top"), "x".to_string())
        .expect("proposal accepted");

    harness
        .service
        .record_validation(
            &request.id,
            &id("emp-mgr"),
            vec![only.id],
            ValidationDecision::Approve,
            String::new(),
            None,
        )
        .expect("level 1 approval accepted");
    for validator in ["emp-dir", "emp-hr"] {
        harness
            .service
            .record_validation(
                &request.id,
                &id(validator),
                Vec::new(),
                ValidationDecision::Approve,
                String::new(),
                None,
            )
            .expect("approval accepted");
    }

    let (start, _) = mission_dates();
    let updated = harness
        .service
        .record_response(&request.id, CandidateResponse::Accepted, None)
        .expect("acceptance recorded");

    assert_eq!(updated.status, RequestStatus::InProgress);
    assert_eq!(updated.effective_start, Some(start));
    assert!(notified(
        &harness,
        "emp-req",
        NotificationKind::CandidateAccepted
    ));
}
