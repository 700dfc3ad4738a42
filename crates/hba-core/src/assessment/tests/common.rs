use std::collections::BTreeSet;

use crate::assessment::domain::{
    AssessmentDraft, AssessmentInput, NonpathocentricFactor, Rating, SeverityGrade,
    SocietalInterest,
};

/// Worked reference case: strong validity, moderate severity, moderate gain.
pub(super) fn reference_input() -> AssessmentInput {
    AssessmentInput {
        title: "Cortical plasticity under enriched housing".to_string(),
        objective: "Quantify dendritic remodeling after four weeks of enrichment".to_string(),
        questions: "Does enrichment change spine density in adult mice?".to_string(),
        construct_validity: Rating::Strong,
        internal_validity: Rating::Strong,
        external_validity: Rating::Moderate,
        replacement_available: false,
        reduction_justified: true,
        refinement_implemented: true,
        severity_grade: SeverityGrade::Moderate,
        nonpathocentric_factors: BTreeSet::new(),
        societal_interests: interests([SocietalInterest::LifeHealth]),
        anticipated_gain: Rating::Moderate,
        likelihood: Rating::Moderate,
    }
}

pub(super) fn all_zero_input() -> AssessmentInput {
    AssessmentInput {
        title: String::new(),
        objective: String::new(),
        questions: String::new(),
        construct_validity: Rating::Absent,
        internal_validity: Rating::Absent,
        external_validity: Rating::Absent,
        replacement_available: false,
        reduction_justified: false,
        refinement_implemented: false,
        severity_grade: SeverityGrade::None,
        nonpathocentric_factors: BTreeSet::new(),
        societal_interests: BTreeSet::new(),
        anticipated_gain: Rating::Absent,
        likelihood: Rating::Absent,
    }
}

pub(super) fn all_max_input() -> AssessmentInput {
    AssessmentInput {
        title: "Maximal case".to_string(),
        objective: "Upper bounds".to_string(),
        questions: String::new(),
        construct_validity: Rating::Strong,
        internal_validity: Rating::Strong,
        external_validity: Rating::Strong,
        replacement_available: false,
        reduction_justified: true,
        refinement_implemented: true,
        severity_grade: SeverityGrade::Severe,
        nonpathocentric_factors: NonpathocentricFactor::ordered().into_iter().collect(),
        societal_interests: SocietalInterest::ordered().into_iter().collect(),
        anticipated_gain: Rating::Strong,
        likelihood: Rating::Strong,
    }
}

/// Draft equivalent of [`reference_input`], as the presentation layer would
/// submit it.
pub(super) fn complete_draft() -> AssessmentDraft {
    AssessmentDraft {
        title: Some("Cortical plasticity under enriched housing".to_string()),
        objective: Some(
            "Quantify dendritic remodeling after four weeks of enrichment".to_string(),
        ),
        questions: Some("Does enrichment change spine density in adult mice?".to_string()),
        construct_validity: Some(3),
        internal_validity: Some(3),
        external_validity: Some(2),
        replacement_available: Some(false),
        reduction_justified: Some(true),
        refinement_implemented: Some(true),
        severity_grade: Some(2),
        nonpathocentric_factors: BTreeSet::new(),
        societal_interests: interests([SocietalInterest::LifeHealth]),
        anticipated_gain: Some(2),
        likelihood: Some(2),
    }
}

pub(super) fn interests<const N: usize>(
    values: [SocietalInterest; N],
) -> BTreeSet<SocietalInterest> {
    values.into_iter().collect()
}
