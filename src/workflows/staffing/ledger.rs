use super::domain::{
    CandidateProposal, Employee, ProposalOrigin, ProposalStatus, RoleTier, StaffingRequest,
};
use super::error::StaffingError;
use serde::{Deserialize, Serialize};

/// Rule chain guarding proposal creation. Checks run in a fixed order so the
/// first violated rule is the one reported.
pub(crate) fn check_proposal_rules(
    request: &StaffingRequest,
    proposer: &Employee,
    candidate: &Employee,
    existing: &[CandidateProposal],
    limit: u32,
) -> Result<(), StaffingError> {
    if !proposer.active {
        return Err(StaffingError::PermissionDenied {
            reason: format!("proposer {} is not active", proposer.id.0),
        });
    }

    if !request.open_for_proposals() {
        return Err(StaffingError::ProposalsClosed);
    }

    let proposed_by_same = existing
        .iter()
        .filter(|proposal| proposal.proposer == proposer.id)
        .count() as u32;
    if proposed_by_same >= limit {
        return Err(StaffingError::LimitExceeded { limit });
    }

    let duplicate = existing.iter().any(|proposal| {
        proposal.candidate == candidate.id && proposal.proposer == proposer.id
    });
    if duplicate {
        return Err(StaffingError::DuplicateProposal);
    }

    if !candidate.active {
        return Err(StaffingError::CandidateInactive);
    }

    Ok(())
}

/// Classify the proposer's relationship to the request and candidate.
pub(crate) fn derive_origin(
    proposer: &Employee,
    candidate: &Employee,
    request: &StaffingRequest,
) -> ProposalOrigin {
    if proposer.id == candidate.id {
        return ProposalOrigin::SelfNomination;
    }
    if candidate.manager.as_ref() == Some(&proposer.id) {
        return ProposalOrigin::DirectManager;
    }
    match proposer.role_tier {
        RoleTier::TeamLead => ProposalOrigin::TeamLead,
        RoleTier::Manager if proposer.department == request.department => {
            ProposalOrigin::DepartmentManager
        }
        RoleTier::Director => ProposalOrigin::Director,
        RoleTier::HumanResources | RoleTier::Admin => ProposalOrigin::HumanResources,
        _ => ProposalOrigin::Other,
    }
}

/// Outcome chosen by an evaluator for one proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationDecision {
    /// Score recorded, proposal stays in the running.
    Hold,
    Retain,
    Reject,
}

impl EvaluationDecision {
    pub(crate) fn next_status(&self) -> ProposalStatus {
        match self {
            EvaluationDecision::Hold => ProposalStatus::Evaluated,
            EvaluationDecision::Retain => ProposalStatus::Retained,
            EvaluationDecision::Reject => ProposalStatus::Rejected,
        }
    }
}

/// Evaluator eligibility: never the proposer themselves, and either
/// Manager-tier or above, or the requester's direct manager.
pub(crate) fn check_evaluator(
    evaluator: &Employee,
    proposal: &CandidateProposal,
    requester: &Employee,
) -> Result<(), StaffingError> {
    if evaluator.id == proposal.proposer {
        return Err(StaffingError::PermissionDenied {
            reason: "evaluator cannot evaluate their own proposal".to_string(),
        });
    }

    let is_requesters_manager = requester.manager.as_ref() == Some(&evaluator.id);
    if evaluator.role_tier < RoleTier::Manager && !is_requesters_manager {
        return Err(StaffingError::PermissionDenied {
            reason: format!(
                "evaluator {} lacks the required tier",
                evaluator.id.0
            ),
        });
    }

    Ok(())
}

/// Proposals open to evaluation decisions.
pub(crate) fn check_evaluable(proposal: &CandidateProposal) -> Result<(), StaffingError> {
    match proposal.status {
        ProposalStatus::Submitted | ProposalStatus::Evaluated => Ok(()),
        other => Err(StaffingError::InvalidState {
            reason: format!("proposal is {} and cannot be evaluated", other.label()),
        }),
    }
}

/// Order rankable proposals by final score descending, ties broken by the
/// earliest proposal so ordering stays deterministic.
pub(crate) fn rank(mut proposals: Vec<CandidateProposal>) -> Vec<CandidateProposal> {
    proposals.retain(|proposal| proposal.status.is_rankable());
    proposals.sort_by(|a, b| {
        b.final_score()
            .cmp(&a.final_score())
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    proposals
}

/// Ranked proposal enriched with a live availability check for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProposal {
    pub proposal: CandidateProposal,
    pub final_score: u8,
    pub currently_available: bool,
}
