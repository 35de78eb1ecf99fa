use super::directory::{DirectoryError, EmployeeDirectory};
use super::domain::{
    CandidateProposal, Employee, EmployeeId, ProposalStatus, RoleTier, StaffingRequest,
};
use super::error::StaffingError;
use serde::{Deserialize, Serialize};

/// The single authority for validator resolution. Level 1 is scoped to the
/// request's department; level 2 deliberately is not (directors review
/// organization-wide); level 3 is the HR/Admin population.
pub fn determine_next_validators(
    directory: &dyn EmployeeDirectory,
    request: &StaffingRequest,
    level: u8,
) -> Result<Vec<Employee>, DirectoryError> {
    match level {
        1 => directory.active_in_department(RoleTier::Manager, &request.department),
        2 => directory.active_by_tier(RoleTier::Director),
        3 => {
            let mut validators = directory.active_by_tier(RoleTier::HumanResources)?;
            let admins = directory.active_by_tier(RoleTier::Admin)?;
            for admin in admins {
                if !validators.iter().any(|existing| existing.id == admin.id) {
                    validators.push(admin);
                }
            }
            Ok(validators)
        }
        _ => Ok(Vec::new()),
    }
}

/// The level the next validation record must carry. Progression is strict:
/// always `current + 1`, never jumped, and never past the required levels.
pub(crate) fn next_level(request: &StaffingRequest) -> Result<u8, StaffingError> {
    if request.status.is_terminal() {
        return Err(StaffingError::InvalidState {
            reason: format!("request is {}", request.status.label()),
        });
    }
    if request.fully_validated() {
        return Err(StaffingError::InvalidState {
            reason: "request already passed every validation level".to_string(),
        });
    }
    Ok(request.current_validation_level + 1)
}

pub(crate) fn check_validator(
    validators: &[Employee],
    validator: &EmployeeId,
    level: u8,
) -> Result<(), StaffingError> {
    if validators.iter().any(|eligible| &eligible.id == validator) {
        return Ok(());
    }
    Err(StaffingError::PermissionDenied {
        reason: format!(
            "employee {} is not a level {} validator for this request",
            validator.0, level
        ),
    })
}

/// Winner among retained proposals: maximum final score, earliest proposal
/// on a tie.
pub(crate) fn pick_winner(proposals: &[CandidateProposal]) -> Option<&CandidateProposal> {
    proposals
        .iter()
        .filter(|proposal| proposal.status == ProposalStatus::Retained)
        .max_by(|a, b| {
            a.final_score()
                .cmp(&b.final_score())
                .then_with(|| b.created_at.cmp(&a.created_at))
        })
}

/// Candidate supplied inline by a validator alongside their decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub candidate: EmployeeId,
    pub justification: String,
}
