//! Harm–benefit assessment of proposed animal experiments.
//!
//! The module is split the same way the review proceeds: a validated input
//! domain, a scoring rubric with an ordered decision policy, a narrative
//! report, and a file export of that report. Everything is a pure function of
//! the input record; nothing here keeps state between evaluations.

pub mod domain;
mod evaluation;
mod export;
mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentDraft, AssessmentInput, NonpathocentricFactor, Rating, SeverityGrade,
    SocietalInterest, ValidationError,
};
pub use evaluation::{compute_scores, Decision, ScoreResult, ScoringConfig, ScoringEngine};
pub use export::{export_report, report_file_stem, ExportError};
pub use report::format_report;
