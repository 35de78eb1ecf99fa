use crate::workflows::staffing::domain::RoleTier;
use serde::{Deserialize, Serialize};

/// Scoring configuration: sub-score weights, bonus table, and caps.
///
/// The bonus cap and the fallback score live here and only here; call sites
/// must never hard-code either value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub competence_weight: f32,
    pub experience_weight: f32,
    pub availability_weight: f32,
    pub proximity_weight: f32,
    pub human_proposal_bonus: u8,
    pub similar_experience_bonus: u8,
    pub recommendation_bonus: u8,
    pub unavailability_penalty: u8,
    /// Ceiling applied to the sum of all bonuses before they are added.
    pub bonus_cap: u8,
    /// Conservative total returned when signal acquisition fails.
    pub fallback_score: u8,
}

impl Default for ScoringConfig {
    /// Default bonus table used when no active scoring configuration exists.
    fn default() -> Self {
        Self {
            competence_weight: 0.40,
            experience_weight: 0.25,
            availability_weight: 0.20,
            proximity_weight: 0.15,
            human_proposal_bonus: 10,
            similar_experience_bonus: 5,
            recommendation_bonus: 5,
            unavailability_penalty: 30,
            bonus_cap: 50,
            fallback_score: 50,
        }
    }
}

impl ScoringConfig {
    /// Bonus awarded for the proposer's position in the hierarchy. Strictly
    /// increasing with the tier, per the closed `RoleTier` order.
    pub fn hierarchy_bonus(&self, tier: RoleTier) -> u8 {
        match tier {
            RoleTier::Worker => 0,
            RoleTier::TeamLead => 4,
            RoleTier::Manager => 8,
            RoleTier::Director => 12,
            RoleTier::HumanResources => 16,
            RoleTier::Admin => 20,
        }
    }
}
