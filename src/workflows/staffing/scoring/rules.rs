use super::config::ScoringConfig;
use crate::workflows::staffing::directory::CandidateSignals;
use crate::workflows::staffing::domain::{DetailedScore, ProposalOrigin, RoleTier, ScoreOrigin};

fn clamp_signal(value: u8) -> u8 {
    value.min(100)
}

/// Combine raw signals, bonuses, and penalties into a detailed breakdown.
/// The bonus sum is capped before it is added; the total is clamped to
/// 0..=100.
pub(crate) fn compose(
    signals: &CandidateSignals,
    origin: ProposalOrigin,
    proposer_tier: RoleTier,
    config: &ScoringConfig,
) -> DetailedScore {
    let competence = clamp_signal(signals.competence);
    let experience = clamp_signal(signals.experience);
    let availability = clamp_signal(signals.availability);
    let proximity = clamp_signal(signals.proximity);

    let weighted = competence as f32 * config.competence_weight
        + experience as f32 * config.experience_weight
        + availability as f32 * config.availability_weight
        + proximity as f32 * config.proximity_weight;
    let base = weighted.round().clamp(0.0, 100.0) as u8;

    let human_proposal_bonus = if origin == ProposalOrigin::System {
        0
    } else {
        config.human_proposal_bonus
    };
    let similar_experience_bonus = if signals.similar_experience {
        config.similar_experience_bonus
    } else {
        0
    };
    let recommendation_bonus = if signals.recommended {
        config.recommendation_bonus
    } else {
        0
    };
    let hierarchy_bonus = config.hierarchy_bonus(proposer_tier);

    let bonus_total = (human_proposal_bonus as u16
        + similar_experience_bonus as u16
        + recommendation_bonus as u16
        + hierarchy_bonus as u16)
        .min(config.bonus_cap as u16);

    let unavailability_penalty = if signals.available_for_period {
        0
    } else {
        config.unavailability_penalty
    };

    let total = (base as i16 + bonus_total as i16 - unavailability_penalty as i16).clamp(0, 100);

    DetailedScore {
        competence,
        experience,
        availability,
        proximity,
        human_proposal_bonus,
        similar_experience_bonus,
        recommendation_bonus,
        hierarchy_bonus,
        unavailability_penalty,
        total: total as u8,
        origin: ScoreOrigin::Automatic,
    }
}

/// Conservative breakdown used when signal acquisition fails. Scoring must
/// never block proposal creation.
pub(crate) fn fallback(config: &ScoringConfig) -> DetailedScore {
    let score = config.fallback_score.min(100);
    DetailedScore {
        competence: score,
        experience: score,
        availability: score,
        proximity: score,
        human_proposal_bonus: 0,
        similar_experience_bonus: 0,
        recommendation_bonus: 0,
        hierarchy_bonus: 0,
        unavailability_penalty: 0,
        total: score,
        origin: ScoreOrigin::Automatic,
    }
}
