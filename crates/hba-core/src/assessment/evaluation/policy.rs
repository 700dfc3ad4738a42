use serde::{Deserialize, Serialize};

use super::super::domain::AssessmentInput;
use super::config::ScoringConfig;
use super::rules::SubScores;

/// Categorical recommendation for an assessed proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    NotJustifiable,
    FavoursApproval,
    FavoursApprovalConditional,
    DoesNotFavourApproval,
}

impl Decision {
    /// Literal explanatory sentence carried into downstream document
    /// templates; must not be reworded.
    pub fn statement(self) -> &'static str {
        match self {
            Self::NotJustifiable => {
                "NOT JUSTIFIABLE — a fit-for-purpose non-animal alternative was indicated (Replace)."
            }
            Self::FavoursApproval => {
                "FAVOURS APPROVAL — anticipated gain appears proportionate to strain, with acceptable suitability and application of 3Rs."
            }
            Self::FavoursApprovalConditional => {
                "FAVOURS APPROVAL (conditional) — proportionate on balance; strengthen suitability and 3R implementation."
            }
            Self::DoesNotFavourApproval => {
                "DOES NOT FAVOUR APPROVAL — anticipated gain does not outweigh expected strain."
            }
        }
    }
}

/// Ordered guards; the first match wins and later guards are not consulted.
/// The ordering is part of the contract: an available replacement overrides
/// every score, and ties between interest and strain favour approval.
pub(crate) fn decide_outcome(
    input: &AssessmentInput,
    config: &ScoringConfig,
    scores: &SubScores,
) -> Decision {
    if input.replacement_available {
        return Decision::NotJustifiable;
    }

    if scores.interest >= scores.strain {
        if scores.suitability >= config.suitability_threshold
            && input.reduction_justified
            && input.refinement_implemented
        {
            return Decision::FavoursApproval;
        }
        return Decision::FavoursApprovalConditional;
    }

    Decision::DoesNotFavourApproval
}
