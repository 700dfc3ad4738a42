use super::common::*;
use crate::assessment::domain::{AssessmentDraft, SocietalInterest, ValidationError};

#[test]
fn complete_draft_finalizes_into_the_reference_input() {
    let input = complete_draft().finalize().expect("complete draft");
    assert_eq!(input, reference_input());
}

#[test]
fn missing_required_answer_blocks_evaluation() {
    let mut draft = complete_draft();
    draft.replacement_available = None;

    let error = draft.finalize().expect_err("incomplete draft");
    assert_eq!(
        error,
        ValidationError::MissingField {
            field: "replacement_available"
        }
    );
}

#[test]
fn out_of_range_scale_value_is_rejected() {
    let mut draft = complete_draft();
    draft.construct_validity = Some(4);

    let error = draft.finalize().expect_err("out of range");
    assert_eq!(
        error,
        ValidationError::OutOfRange {
            field: "construct_validity",
            value: 4
        }
    );

    let mut draft = complete_draft();
    draft.severity_grade = Some(17);

    let error = draft.finalize().expect_err("out of range");
    assert_eq!(
        error,
        ValidationError::OutOfRange {
            field: "severity_grade",
            value: 17
        }
    );
}

#[test]
fn free_text_fields_may_be_absent() {
    let mut draft = complete_draft();
    draft.title = None;
    draft.objective = None;
    draft.questions = None;

    let input = draft.finalize().expect("texts are optional");
    assert!(input.title.is_empty());
    assert!(input.objective.is_empty());
    assert!(input.questions.is_empty());
}

#[test]
fn draft_deserializes_from_the_wire_format() {
    let draft: AssessmentDraft = serde_json::from_value(serde_json::json!({
        "title": "Pilot",
        "construct_validity": 3,
        "internal_validity": 3,
        "external_validity": 2,
        "replacement_available": false,
        "reduction_justified": true,
        "refinement_implemented": true,
        "severity_grade": 2,
        "nonpathocentric_factors": ["humiliation_loss_of_control"],
        "societal_interests": ["life_health", "3r_methods"],
        "anticipated_gain": 2,
        "likelihood": 2
    }))
    .expect("valid wire draft");

    let input = draft.finalize().expect("complete draft");
    assert!(input
        .societal_interests
        .contains(&SocietalInterest::ThreeRMethods));
    assert_eq!(input.nonpathocentric_factors.len(), 1);
}

#[test]
fn unknown_enum_member_fails_deserialization() {
    let result = serde_json::from_value::<AssessmentDraft>(serde_json::json!({
        "societal_interests": ["world_peace"]
    }));

    assert!(result.is_err());
}
