use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Four-point rating scale shared by the validity questions and the
/// anticipated gain/likelihood questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Absent,
    Minimal,
    Moderate,
    Strong,
}

impl Rating {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Minimal),
            2 => Some(Self::Moderate),
            3 => Some(Self::Strong),
            _ => None,
        }
    }

    /// Anchor text shown next to the numeric value on forms and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Absent => "Absent/not justified",
            Self::Minimal => "Minimal/weak",
            Self::Moderate => "Moderate/partial",
            Self::Strong => "Strong/robust",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("rating must be 0-3, found {value}"))
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.value()
    }
}

/// Expected severity of the procedures on the animals involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeverityGrade {
    None,
    Mild,
    Moderate,
    Severe,
}

impl SeverityGrade {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Mild),
            2 => Some(Self::Moderate),
            3 => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl TryFrom<u8> for SeverityGrade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("severity grade must be 0-3, found {value}"))
    }
}

impl From<SeverityGrade> for u8 {
    fn from(value: SeverityGrade) -> Self {
        value.value()
    }
}

/// Harm to animal dignity that is not reducible to pain or suffering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonpathocentricFactor {
    ExcessiveInstrumentalization,
    HumiliationLossOfControl,
    MajorInterferenceAppearance,
}

impl NonpathocentricFactor {
    /// Declaration order, used wherever factors are listed.
    pub fn ordered() -> [Self; 3] {
        [
            Self::ExcessiveInstrumentalization,
            Self::HumiliationLossOfControl,
            Self::MajorInterferenceAppearance,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ExcessiveInstrumentalization => "Excessive instrumentalization",
            Self::HumiliationLossOfControl => "Humiliation or loss of control",
            Self::MajorInterferenceAppearance => "Major interference with appearance",
        }
    }
}

/// Societal interest categories the anticipated gain may serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocietalInterest {
    LifeHealth,
    FundamentalKnowledge,
    Environment,
    #[serde(rename = "3r_methods")]
    ThreeRMethods,
}

impl SocietalInterest {
    /// Declaration order, used wherever interests are listed.
    pub fn ordered() -> [Self; 4] {
        [
            Self::LifeHealth,
            Self::FundamentalKnowledge,
            Self::Environment,
            Self::ThreeRMethods,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LifeHealth => "Protection of life and health",
            Self::FundamentalKnowledge => "Gain of fundamental knowledge",
            Self::Environment => "Protection of the environment",
            Self::ThreeRMethods => "Advancement of 3R methods",
        }
    }
}

/// Fully validated description of a proposed animal experiment.
///
/// Constructed through [`AssessmentDraft::finalize`], so every scale value is
/// in range and every required answer is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentInput {
    pub title: String,
    pub objective: String,
    pub questions: String,
    pub construct_validity: Rating,
    pub internal_validity: Rating,
    pub external_validity: Rating,
    pub replacement_available: bool,
    pub reduction_justified: bool,
    pub refinement_implemented: bool,
    pub severity_grade: SeverityGrade,
    pub nonpathocentric_factors: BTreeSet<NonpathocentricFactor>,
    pub societal_interests: BTreeSet<SocietalInterest>,
    pub anticipated_gain: Rating,
    pub likelihood: Rating,
}

/// Partially filled assessment form as submitted by the presentation layer.
///
/// Scale answers arrive as raw integers so that an out-of-range value is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentDraft {
    pub title: Option<String>,
    pub objective: Option<String>,
    pub questions: Option<String>,
    pub construct_validity: Option<u8>,
    pub internal_validity: Option<u8>,
    pub external_validity: Option<u8>,
    pub replacement_available: Option<bool>,
    pub reduction_justified: Option<bool>,
    pub refinement_implemented: Option<bool>,
    pub severity_grade: Option<u8>,
    pub nonpathocentric_factors: BTreeSet<NonpathocentricFactor>,
    pub societal_interests: BTreeSet<SocietalInterest>,
    pub anticipated_gain: Option<u8>,
    pub likelihood: Option<u8>,
}

impl AssessmentDraft {
    /// Validate the draft into an [`AssessmentInput`].
    ///
    /// Fails on the first missing or out-of-range required field; free-text
    /// fields are optional and default to empty strings.
    pub fn finalize(self) -> Result<AssessmentInput, ValidationError> {
        Ok(AssessmentInput {
            title: self.title.unwrap_or_default(),
            objective: self.objective.unwrap_or_default(),
            questions: self.questions.unwrap_or_default(),
            construct_validity: rating_field("construct_validity", self.construct_validity)?,
            internal_validity: rating_field("internal_validity", self.internal_validity)?,
            external_validity: rating_field("external_validity", self.external_validity)?,
            replacement_available: required("replacement_available", self.replacement_available)?,
            reduction_justified: required("reduction_justified", self.reduction_justified)?,
            refinement_implemented: required(
                "refinement_implemented",
                self.refinement_implemented,
            )?,
            severity_grade: severity_field("severity_grade", self.severity_grade)?,
            nonpathocentric_factors: self.nonpathocentric_factors,
            societal_interests: self.societal_interests,
            anticipated_gain: rating_field("anticipated_gain", self.anticipated_gain)?,
            likelihood: rating_field("likelihood", self.likelihood)?,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

fn rating_field(field: &'static str, value: Option<u8>) -> Result<Rating, ValidationError> {
    let value = required(field, value)?;
    Rating::from_value(value).ok_or(ValidationError::OutOfRange { field, value })
}

fn severity_field(field: &'static str, value: Option<u8>) -> Result<SeverityGrade, ValidationError> {
    let value = required(field, value)?;
    SeverityGrade::from_value(value).ok_or(ValidationError::OutOfRange { field, value })
}

/// Raised by [`AssessmentDraft::finalize`] before any score is computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("field '{field}' must be an integer between 0 and 3, found {value}")]
    OutOfRange { field: &'static str, value: u8 },
}
