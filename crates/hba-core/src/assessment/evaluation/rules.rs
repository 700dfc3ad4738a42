use super::super::domain::AssessmentInput;
use super::config::ScoringConfig;

pub(crate) struct SubScores {
    pub suitability: f64,
    pub strain: f64,
    pub interest: f64,
}

pub(crate) fn score_input(input: &AssessmentInput, config: &ScoringConfig) -> SubScores {
    let suitability = f64::from(
        input.construct_validity.value()
            + input.internal_validity.value()
            + input.external_validity.value(),
    ) / 3.0;

    let strain = f64::from(input.severity_grade.value())
        + config.nonpathocentric_weight * input.nonpathocentric_factors.len() as f64;

    // Gain and likelihood couple multiplicatively: a zero in either collapses
    // the product term regardless of the other. The per-category bonus stays
    // additive so it acts as a tie-breaker rather than a dominant term.
    let interest = f64::from(input.anticipated_gain.value() * input.likelihood.value()) / 3.0
        + config.interest_weight * input.societal_interests.len() as f64;

    SubScores {
        suitability,
        strain,
        interest,
    }
}
