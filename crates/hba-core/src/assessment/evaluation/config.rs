use serde::{Deserialize, Serialize};

/// Rubric constants applied by the scoring engine.
///
/// The defaults are the published rubric; they live in one place so that
/// audits and tests reference a single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Strain added per selected nonpathocentric factor.
    pub nonpathocentric_weight: f64,
    /// Interest added per selected societal interest category.
    pub interest_weight: f64,
    /// Minimum suitability score required for an unconditional approval.
    pub suitability_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            nonpathocentric_weight: 0.5,
            interest_weight: 0.25,
            suitability_threshold: 1.5,
        }
    }
}
