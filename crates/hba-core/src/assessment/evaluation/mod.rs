mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::Decision;

use super::domain::AssessmentInput;
use policy::decide_outcome;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to a validated input.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Recompute all sub-scores and the decision from scratch.
    ///
    /// Pure and deterministic: identical inputs yield bit-identical results.
    pub fn evaluate(&self, input: &AssessmentInput) -> ScoreResult {
        let scores = rules::score_input(input, &self.config);
        let decision = decide_outcome(input, &self.config, &scores);

        ScoreResult {
            suitability_score: scores.suitability,
            strain_score: scores.strain,
            interest_score: scores.interest,
            decision,
        }
    }
}

/// Derived measures plus the categorical recommendation.
///
/// A fresh value is produced on every evaluation; it has no identity of its
/// own and is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub suitability_score: f64,
    pub strain_score: f64,
    pub interest_score: f64,
    pub decision: Decision,
}

/// Evaluate with the published rubric constants.
pub fn compute_scores(input: &AssessmentInput) -> ScoreResult {
    ScoringEngine::new(ScoringConfig::default()).evaluate(input)
}
