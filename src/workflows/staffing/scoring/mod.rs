mod config;
mod rules;

pub use config::ScoringConfig;

use super::directory::{SignalSource, SignalError};
use super::domain::{DetailedScore, Employee, ProposalOrigin, StaffingRequest};
use tracing::warn;

/// Stateless engine that turns raw matching signals into a 0..=100 composite
/// suitability score. Pure over its inputs; callers persist the result.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate against one request. Never fails: a signal
    /// acquisition error degrades to the configured fallback score.
    pub fn score(
        &self,
        candidate: &Employee,
        request: &StaffingRequest,
        origin: ProposalOrigin,
        proposer: &Employee,
        signals: &dyn SignalSource,
    ) -> DetailedScore {
        match signals.signals(candidate, request) {
            Ok(signals) => rules::compose(&signals, origin, proposer.role_tier, &self.config),
            Err(SignalError::Unavailable(reason)) => {
                warn!(
                    candidate = %candidate.id.0,
                    request = %request.id.0,
                    %reason,
                    "signal acquisition failed, falling back to default score"
                );
                rules::fallback(&self.config)
            }
        }
    }
}
