use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::directory::{EmployeeDirectory, SignalSource};
use super::domain::{
    AuditEntry, CandidateProposal, CandidateResponse, CandidateResponseWindow, Employee,
    EmployeeId, ProposalId, ProposalOrigin, ProposalStatus, RequestId, RequestStatus, ScoreOrigin,
    StaffingRequest, UrgencyTier, ValidationDecision, ValidationRecord, WindowId,
};
use super::error::StaffingError;
use super::ledger::{self, EvaluationDecision, RankedProposal};
use super::notification::{
    dispatch, NotificationEvent, NotificationKind, NotificationPublisher,
};
use super::repository::StaffingRepository;
use super::response::{self, NO_RESPONSE_REASON};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::validation::{self, determine_next_validators, NewCandidate};

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PROPOSAL_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static WINDOW_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> (RequestId, String) {
    let seq = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let id = RequestId(format!("req-{seq:06}"));
    let number = format!("INT-{}-{seq:04}", Utc::now().year());
    (id, number)
}

fn next_proposal_id() -> ProposalId {
    let seq = PROPOSAL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProposalId(format!("prop-{seq:06}"))
}

fn next_window_id() -> WindowId {
    let seq = WINDOW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    WindowId(format!("win-{seq:06}"))
}

/// Payload for opening a staffing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRequest {
    pub position: String,
    pub department: String,
    pub site: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub urgency: UrgencyTier,
}

/// Facade composing the scoring engine, proposal ledger, validation state
/// machine, and response loop over pluggable storage and collaborators.
///
/// Each state-changing operation runs under a per-request lock so two
/// concurrent validations can never both observe the same
/// `current_validation_level`.
pub struct StaffingService<R, D, S, N> {
    repository: Arc<R>,
    directory: Arc<D>,
    signals: Arc<S>,
    publisher: Arc<N>,
    engine: ScoringEngine,
    response_window_days: i64,
    max_proposals_per_proposer: u32,
    locks: Mutex<HashMap<RequestId, Arc<Mutex<()>>>>,
}

impl<R, D, S, N> StaffingService<R, D, S, N>
where
    R: StaffingRepository + 'static,
    D: EmployeeDirectory + 'static,
    S: SignalSource + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(
        repository: Arc<R>,
        directory: Arc<D>,
        signals: Arc<S>,
        publisher: Arc<N>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            repository,
            directory,
            signals,
            publisher,
            engine: ScoringEngine::new(scoring),
            response_window_days: 3,
            max_proposals_per_proposer: 3,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_limits(mut self, response_window_days: i64, max_proposals_per_proposer: u32) -> Self {
        self.response_window_days = response_window_days;
        self.max_proposals_per_proposer = max_proposals_per_proposer;
        self
    }

    fn request_lock(&self, id: &RequestId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock map poisoned");
        locks.entry(id.clone()).or_default().clone()
    }

    fn employee(&self, id: &EmployeeId) -> Result<Employee, StaffingError> {
        self.directory
            .fetch(id)?
            .ok_or(StaffingError::NotFound { entity: "employee" })
    }

    fn request(&self, id: &RequestId) -> Result<StaffingRequest, StaffingError> {
        self.repository
            .fetch_request(id)?
            .ok_or(StaffingError::NotFound { entity: "request" })
    }

    fn audit(
        &self,
        action: &'static str,
        actor: &EmployeeId,
        request: &StaffingRequest,
        before: String,
    ) -> Result<(), StaffingError> {
        self.repository.append_audit(AuditEntry {
            action,
            actor: actor.clone(),
            request_id: request.id.clone(),
            before,
            after: snapshot(request),
            at: Utc::now(),
        })?;
        Ok(())
    }

    /// Open a new staffing request at validation level 0 and notify the
    /// level 1 validators that a review is pending.
    pub fn create_request(
        &self,
        requester_id: &EmployeeId,
        payload: NewRequest,
    ) -> Result<StaffingRequest, StaffingError> {
        let requester = self.employee(requester_id)?;
        if !requester.active {
            return Err(StaffingError::PermissionDenied {
                reason: format!("requester {} is not active", requester.id.0),
            });
        }

        let (id, number) = next_request_id();
        let request = StaffingRequest {
            id,
            number,
            position: payload.position,
            department: payload.department,
            site: payload.site,
            start_date: payload.start_date,
            end_date: payload.end_date,
            urgency: payload.urgency,
            status: RequestStatus::Submitted,
            current_validation_level: 0,
            required_validation_levels: 3,
            requester: requester.id.clone(),
            selected_candidate: None,
            accepts_proposals: true,
            effective_start: None,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert_request(request)?;
        self.audit("create_request", requester_id, &stored, String::new())?;

        let validators = determine_next_validators(self.directory.as_ref(), &stored, 1)?;
        let events = validators
            .iter()
            .map(|validator| {
                notification(
                    NotificationKind::ValidationRequested,
                    &stored,
                    Some(requester_id.clone()),
                    validator.id.clone(),
                    None,
                    format!(
                        "Staffing request {} awaits level 1 validation",
                        stored.number
                    ),
                )
            })
            .collect();
        dispatch(self.publisher.as_ref(), requester_id, events);

        info!(request = %stored.id.0, number = %stored.number, "staffing request created");
        Ok(stored)
    }

    /// Nominate a candidate for a request. Runs the full rule chain, scores
    /// the candidate, and fans out to the requester and the pending level's
    /// validators.
    pub fn propose(
        &self,
        request_id: &RequestId,
        proposer_id: &EmployeeId,
        candidate_id: &EmployeeId,
        justification: String,
    ) -> Result<CandidateProposal, StaffingError> {
        let lock = self.request_lock(request_id);
        let _guard: MutexGuard<'_, ()> = lock.lock().expect("request lock poisoned");

        let request = self.request(request_id)?;
        let proposer = self.employee(proposer_id)?;
        let candidate = self.employee(candidate_id)?;
        let existing = self.repository.proposals_for_request(request_id)?;

        ledger::check_proposal_rules(
            &request,
            &proposer,
            &candidate,
            &existing,
            self.max_proposals_per_proposer,
        )?;

        let origin = ledger::derive_origin(&proposer, &candidate, &request);
        let proposal = self.build_proposal(&request, &proposer, &candidate, origin, justification);
        let stored = self.repository.insert_proposal(proposal)?;
        self.audit(
            "propose_candidate",
            proposer_id,
            &request,
            format!("candidate={}", candidate.id.0),
        )?;

        let mut events = vec![notification(
            NotificationKind::ProposalSubmitted,
            &request,
            Some(proposer_id.clone()),
            request.requester.clone(),
            Some(stored.id.clone()),
            format!(
                "{} proposed {} for request {}",
                proposer.display_name, candidate.display_name, request.number
            ),
        )];
        let pending_level = request.current_validation_level + 1;
        let validators =
            determine_next_validators(self.directory.as_ref(), &request, pending_level)?;
        for validator in &validators {
            events.push(notification(
                NotificationKind::ProposalSubmitted,
                &request,
                Some(proposer_id.clone()),
                validator.id.clone(),
                Some(stored.id.clone()),
                format!(
                    "New proposal on request {} awaiting level {} review",
                    request.number, pending_level
                ),
            ));
        }
        dispatch(self.publisher.as_ref(), proposer_id, events);

        Ok(stored)
    }

    fn build_proposal(
        &self,
        request: &StaffingRequest,
        proposer: &Employee,
        candidate: &Employee,
        origin: ProposalOrigin,
        justification: String,
    ) -> CandidateProposal {
        let score = self.engine.score(
            candidate,
            request,
            origin,
            proposer,
            self.signals.as_ref(),
        );
        CandidateProposal {
            id: next_proposal_id(),
            request_id: request.id.clone(),
            candidate: candidate.id.clone(),
            proposer: proposer.id.clone(),
            origin,
            justification,
            score,
            adjusted_score: None,
            status: ProposalStatus::Submitted,
            created_at: Utc::now(),
        }
    }

    /// Record an evaluator's decision on one proposal, optionally adjusting
    /// the score. The original proposer is notified of the outcome.
    pub fn evaluate(
        &self,
        proposal_id: &ProposalId,
        evaluator_id: &EmployeeId,
        adjusted_score: Option<u8>,
        comment: String,
        decision: EvaluationDecision,
    ) -> Result<CandidateProposal, StaffingError> {
        let request_id = self
            .repository
            .fetch_proposal(proposal_id)?
            .ok_or(StaffingError::NotFound { entity: "proposal" })?
            .request_id;

        let lock = self.request_lock(&request_id);
        let _guard = lock.lock().expect("request lock poisoned");

        let mut proposal = self
            .repository
            .fetch_proposal(proposal_id)?
            .ok_or(StaffingError::NotFound { entity: "proposal" })?;
        let request = self.request(&request_id)?;
        let evaluator = self.employee(evaluator_id)?;
        let requester = self.employee(&request.requester)?;

        ledger::check_evaluable(&proposal)?;
        ledger::check_evaluator(&evaluator, &proposal, &requester)?;

        let before = format!("status={}", proposal.status.label());
        if let Some(score) = adjusted_score {
            proposal.adjusted_score = Some(score.min(100));
            proposal.score.origin = ScoreOrigin::HumanAdjusted;
        }
        proposal.status = decision.next_status();
        self.repository.update_proposal(proposal.clone())?;
        self.audit("evaluate_proposal", evaluator_id, &request, before)?;

        let events = vec![notification(
            NotificationKind::ProposalEvaluated,
            &request,
            Some(evaluator_id.clone()),
            proposal.proposer.clone(),
            Some(proposal.id.clone()),
            format!(
                "Your proposal on request {} was {}: {}",
                request.number,
                proposal.status.label(),
                comment
            ),
        )];
        dispatch(self.publisher.as_ref(), evaluator_id, events);

        Ok(proposal)
    }

    /// Record one hierarchical validation decision and advance the state
    /// machine. Progression is strict: the record's level is always
    /// `current_validation_level + 1`, and finalization only happens when
    /// that level equals the required count.
    pub fn record_validation(
        &self,
        request_id: &RequestId,
        validator_id: &EmployeeId,
        retained: Vec<ProposalId>,
        decision: ValidationDecision,
        comment: String,
        new_candidate: Option<NewCandidate>,
    ) -> Result<ValidationRecord, StaffingError> {
        let lock = self.request_lock(request_id);
        let _guard = lock.lock().expect("request lock poisoned");

        let mut request = self.request(request_id)?;
        let level = validation::next_level(&request)?;
        let validators = determine_next_validators(self.directory.as_ref(), &request, level)?;
        validation::check_validator(&validators, validator_id, level)?;

        // Build the added proposal before any mutation so its rule failures
        // reject the whole validation.
        let added = match (&decision, new_candidate) {
            (ValidationDecision::Refuse, _) => None,
            (_, Some(payload)) => {
                Some(self.prepare_added_proposal(&request, validator_id, payload)?)
            }
            (ValidationDecision::AddCandidate, None) => {
                return Err(StaffingError::InvalidState {
                    reason: "add_candidate decision requires a candidate payload".to_string(),
                })
            }
            _ => None,
        };

        let before = snapshot(&request);
        let now = Utc::now();
        let mut retained_ids = Vec::new();

        if decision != ValidationDecision::Refuse {
            for proposal_id in &retained {
                match self.repository.fetch_proposal(proposal_id)? {
                    Some(mut proposal) if proposal.request_id == request.id => {
                        match proposal.status {
                            ProposalStatus::Rejected | ProposalStatus::Validated => {
                                warn!(
                                    proposal = %proposal_id.0,
                                    status = proposal.status.label(),
                                    "retention skipped for non-retainable proposal"
                                );
                            }
                            _ => {
                                proposal.status = ProposalStatus::Retained;
                                self.repository.update_proposal(proposal)?;
                                retained_ids.push(proposal_id.clone());
                            }
                        }
                    }
                    _ => {
                        warn!(
                            proposal = %proposal_id.0,
                            request = %request.id.0,
                            "retention skipped for unknown proposal id"
                        );
                    }
                }
            }

            if let Some(mut proposal) = added {
                proposal.status = ProposalStatus::Retained;
                let stored = self.repository.insert_proposal(proposal)?;
                retained_ids.push(stored.id);
            }
        }

        // Level 1 is pending from creation; every later level became pending
        // when the level below approved.
        let requested_at = self
            .repository
            .validations_for_request(&request.id)?
            .into_iter()
            .find(|prior| {
                prior.level + 1 == level && prior.decision == ValidationDecision::Approve
            })
            .map(|prior| prior.decided_at)
            .unwrap_or(request.created_at);

        let record = ValidationRecord {
            request_id: request.id.clone(),
            level,
            validator: validator_id.clone(),
            decision,
            comment: comment.clone(),
            retained: retained_ids,
            requested_at,
            decided_at: now,
        };
        self.repository.insert_validation(record.clone())?;

        let mut events = Vec::new();
        match decision {
            ValidationDecision::Approve => {
                request.current_validation_level = level;
                if level < request.required_validation_levels {
                    request.status = RequestStatus::AwaitingValidation;
                    let next =
                        determine_next_validators(self.directory.as_ref(), &request, level + 1)?;
                    for validator in &next {
                        events.push(notification(
                            NotificationKind::ValidationRequested,
                            &request,
                            Some(validator_id.clone()),
                            validator.id.clone(),
                            None,
                            format!(
                                "Request {} awaits level {} validation",
                                request.number,
                                level + 1
                            ),
                        ));
                    }
                } else {
                    events.extend(self.finalize_selection(&mut request, validator_id)?);
                }
            }
            ValidationDecision::Refuse => {
                request.status = RequestStatus::Refused;
                request.accepts_proposals = false;
                events.push(notification(
                    NotificationKind::RequestRefused,
                    &request,
                    Some(validator_id.clone()),
                    request.requester.clone(),
                    None,
                    format!(
                        "Request {} was refused at level {}: {}",
                        request.number, level, comment
                    ),
                ));
            }
            ValidationDecision::AddCandidate => {
                // Level and status untouched; only Approve advances.
            }
        }

        self.repository.update_request(request.clone())?;
        self.audit("record_validation", validator_id, &request, before)?;
        dispatch(self.publisher.as_ref(), validator_id, events);

        Ok(record)
    }

    fn prepare_added_proposal(
        &self,
        request: &StaffingRequest,
        validator_id: &EmployeeId,
        payload: NewCandidate,
    ) -> Result<CandidateProposal, StaffingError> {
        let proposer = self.employee(validator_id)?;
        let candidate = self.employee(&payload.candidate)?;
        let existing = self.repository.proposals_for_request(&request.id)?;
        ledger::check_proposal_rules(
            request,
            &proposer,
            &candidate,
            &existing,
            self.max_proposals_per_proposer,
        )?;
        let origin = ledger::derive_origin(&proposer, &candidate, request);
        Ok(self.build_proposal(request, &proposer, &candidate, origin, payload.justification))
    }

    /// Pick the best retained proposal, select its candidate, and open the
    /// response window. Called once the final level approves.
    fn finalize_selection(
        &self,
        request: &mut StaffingRequest,
        actor: &EmployeeId,
    ) -> Result<Vec<NotificationEvent>, StaffingError> {
        let proposals = self.repository.proposals_for_request(&request.id)?;
        let Some(winner) = validation::pick_winner(&proposals) else {
            request.status = RequestStatus::SelectionFailed;
            request.accepts_proposals = false;
            return Ok(vec![notification(
                NotificationKind::SelectionFailed,
                request,
                Some(actor.clone()),
                request.requester.clone(),
                None,
                format!(
                    "No retained candidate remains on request {}; restart the search",
                    request.number
                ),
            )]);
        };

        let mut winner = winner.clone();
        winner.status = ProposalStatus::Validated;
        self.repository.update_proposal(winner.clone())?;

        request.selected_candidate = Some(winner.candidate.clone());
        request.status = RequestStatus::CandidateSelected;
        request.accepts_proposals = false;

        let window = self.open_window(request, &winner.candidate)?;

        Ok(vec![
            notification(
                NotificationKind::CandidateSelected,
                request,
                Some(actor.clone()),
                winner.candidate.clone(),
                Some(winner.id.clone()),
                format!(
                    "You were selected for request {}; respond before {}",
                    request.number,
                    window.deadline.date_naive()
                ),
            ),
            notification(
                NotificationKind::CandidateSelected,
                request,
                Some(actor.clone()),
                request.requester.clone(),
                Some(winner.id.clone()),
                format!(
                    "A candidate was selected for request {} (score {})",
                    request.number,
                    winner.final_score()
                ),
            ),
        ])
    }

    fn open_window(
        &self,
        request: &StaffingRequest,
        candidate: &EmployeeId,
    ) -> Result<CandidateResponseWindow, StaffingError> {
        let opened_at = Utc::now();
        let window = CandidateResponseWindow {
            id: next_window_id(),
            request_id: request.id.clone(),
            candidate: candidate.clone(),
            opened_at,
            deadline: opened_at + Duration::days(self.response_window_days),
            response: CandidateResponse::Pending,
            refusal_reason: None,
        };
        Ok(self.repository.insert_window(window)?)
    }

    /// Record the selected candidate's answer on the open window. Refusal
    /// and expiry fall back to the next-best retained candidate, or close
    /// the request as failed when none remains.
    pub fn record_response(
        &self,
        request_id: &RequestId,
        response: CandidateResponse,
        reason: Option<String>,
    ) -> Result<StaffingRequest, StaffingError> {
        let lock = self.request_lock(request_id);
        let _guard = lock.lock().expect("request lock poisoned");
        self.resolve_open_window(request_id, response, reason)
    }

    fn resolve_open_window(
        &self,
        request_id: &RequestId,
        response: CandidateResponse,
        reason: Option<String>,
    ) -> Result<StaffingRequest, StaffingError> {
        if response == CandidateResponse::Pending {
            return Err(StaffingError::InvalidState {
                reason: "a response cannot be recorded as pending".to_string(),
            });
        }

        let mut request = self.request(request_id)?;
        if request.status != RequestStatus::CandidateSelected {
            return Err(StaffingError::InvalidState {
                reason: format!(
                    "request is {}, no response is awaited",
                    request.status.label()
                ),
            });
        }

        let windows = self.repository.windows_for_request(request_id)?;
        let mut window = windows
            .iter()
            .find(|window| window.is_open())
            .cloned()
            .ok_or(StaffingError::NotFound {
                entity: "response window",
            })?;
        let candidate_id = window.candidate.clone();

        let before = snapshot(&request);
        response::close_window(&mut window, response, reason);
        self.repository.update_window(window)?;

        let mut events = Vec::new();
        match response {
            CandidateResponse::Accepted => {
                request.status = RequestStatus::InProgress;
                request.effective_start = Some(request.start_date);
                let candidate = self.employee(&candidate_id)?;
                events.push(notification(
                    NotificationKind::CandidateAccepted,
                    &request,
                    Some(candidate_id.clone()),
                    request.requester.clone(),
                    None,
                    format!(
                        "{} accepted request {}; mission starts {}",
                        candidate.display_name, request.number, request.start_date
                    ),
                ));
                if let Some(manager) = candidate.manager.clone() {
                    events.push(notification(
                        NotificationKind::MissionStarted,
                        &request,
                        Some(candidate_id.clone()),
                        manager,
                        None,
                        format!(
                            "{} starts on request {} from {}",
                            candidate.display_name, request.number, request.start_date
                        ),
                    ));
                }
            }
            CandidateResponse::Refused | CandidateResponse::Expired => {
                events.extend(self.reselect(&mut request, &candidate_id)?);
            }
            CandidateResponse::Pending => unreachable!("rejected above"),
        }

        self.repository.update_request(request.clone())?;
        self.audit("record_response", &candidate_id, &request, before)?;
        dispatch(self.publisher.as_ref(), &candidate_id, events);

        Ok(request)
    }

    /// Re-run selection over the ranked remainder after a refusal.
    fn reselect(
        &self,
        request: &mut StaffingRequest,
        refusing: &EmployeeId,
    ) -> Result<Vec<NotificationEvent>, StaffingError> {
        let windows = self.repository.windows_for_request(&request.id)?;
        let exhausted = response::exhausted_candidates(&windows);

        let proposals = self.repository.proposals_for_request(&request.id)?;
        let ranked = ledger::rank(proposals);
        let next = ranked.iter().find(|proposal| {
            proposal.status == ProposalStatus::Retained && !exhausted.contains(&proposal.candidate)
        });

        let mut events = vec![notification(
            NotificationKind::CandidateRefused,
            request,
            Some(refusing.clone()),
            request.requester.clone(),
            None,
            format!(
                "The selected candidate declined request {}",
                request.number
            ),
        )];

        match next {
            Some(proposal) => {
                let mut winner = proposal.clone();
                winner.status = ProposalStatus::Validated;
                self.repository.update_proposal(winner.clone())?;

                request.selected_candidate = Some(winner.candidate.clone());
                let window = self.open_window(request, &winner.candidate)?;
                events.push(notification(
                    NotificationKind::CandidateSelected,
                    request,
                    None,
                    winner.candidate.clone(),
                    Some(winner.id.clone()),
                    format!(
                        "You were selected for request {}; respond before {}",
                        request.number,
                        window.deadline.date_naive()
                    ),
                ));
            }
            None => {
                request.status = RequestStatus::SelectionFailed;
                request.selected_candidate = None;
                events.push(notification(
                    NotificationKind::SelectionFailed,
                    request,
                    None,
                    request.requester.clone(),
                    None,
                    format!(
                        "No candidate remains on request {}; restart the search",
                        request.number
                    ),
                ));
            }
        }

        Ok(events)
    }

    /// Scheduler callback: resolve every open window past its deadline as an
    /// expiry. Returns how many windows were closed.
    pub fn expire_windows(&self, now: DateTime<Utc>) -> Result<usize, StaffingError> {
        let open = self.repository.open_windows()?;
        let mut expired = 0;
        for window in open {
            if !response::is_expired(&window, now) {
                continue;
            }
            let lock = self.request_lock(&window.request_id);
            let _guard = lock.lock().expect("request lock poisoned");
            match self.resolve_open_window(
                &window.request_id,
                CandidateResponse::Expired,
                Some(NO_RESPONSE_REASON.to_string()),
            ) {
                Ok(_) => expired += 1,
                Err(err) => {
                    warn!(
                        request = %window.request_id.0,
                        error = %err,
                        "expiry resolution failed"
                    );
                }
            }
        }
        Ok(expired)
    }

    /// Ranked view of a request's proposals, enriched with a live
    /// availability check. Idempotent between writes.
    pub fn ranked_proposals(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<RankedProposal>, StaffingError> {
        let request = self.request(request_id)?;
        let proposals = self.repository.proposals_for_request(request_id)?;
        let ranked = ledger::rank(proposals);

        let mut views = Vec::with_capacity(ranked.len());
        for proposal in ranked {
            let currently_available = self
                .directory
                .is_available(&proposal.candidate, request.start_date, request.end_date)
                .unwrap_or(false);
            views.push(RankedProposal {
                final_score: proposal.final_score(),
                currently_available,
                proposal,
            });
        }
        Ok(views)
    }

    pub fn get_request(&self, request_id: &RequestId) -> Result<StaffingRequest, StaffingError> {
        self.request(request_id)
    }

    pub fn validations(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<ValidationRecord>, StaffingError> {
        Ok(self.repository.validations_for_request(request_id)?)
    }
}

fn snapshot(request: &StaffingRequest) -> String {
    format!(
        "status={} level={}",
        request.status.label(),
        request.current_validation_level
    )
}

fn notification(
    kind: NotificationKind,
    request: &StaffingRequest,
    sender: Option<EmployeeId>,
    recipient: EmployeeId,
    proposal_id: Option<ProposalId>,
    body: String,
) -> NotificationEvent {
    NotificationEvent {
        kind,
        urgency: request.urgency,
        title: format!("[{}] {}", request.number, kind.label()),
        body,
        sender,
        recipient,
        request_id: request.id.clone(),
        proposal_id,
    }
}
