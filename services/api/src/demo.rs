use clap::Args;
use hba_core::assessment::{
    compute_scores, export_report, format_report, AssessmentDraft, AssessmentInput,
    NonpathocentricFactor, Rating, SeverityGrade, SocietalInterest,
};
use hba_core::error::AppError;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON assessment draft
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory to export the report document into
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory to export the demo reports into
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, export } = args;

    let raw = fs::read_to_string(&input)?;
    let draft: AssessmentDraft = serde_json::from_str(&raw)?;
    let input = draft.finalize()?;

    let result = compute_scores(&input);
    println!("{}", format_report(&input, &result));

    if let Some(dir) = export {
        fs::create_dir_all(&dir)?;
        let path = export_report(&input, &result, &dir)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { export } = args;

    println!("Harm-benefit assessment demo\n");

    for input in [
        proportionate_case(),
        disproportionate_case(),
        replacement_case(),
    ] {
        let result = compute_scores(&input);
        println!("{}", format_report(&input, &result));

        if let Some(dir) = &export {
            fs::create_dir_all(dir)?;
            let path = export_report(&input, &result, dir)?;
            println!("Report written to {}\n", path.display());
        }
    }

    Ok(())
}

fn proportionate_case() -> AssessmentInput {
    AssessmentInput {
        title: "Vaccine adjuvant efficacy in mice".to_string(),
        objective: "Compare seroconversion across three adjuvant formulations".to_string(),
        questions: "Which formulation yields protective titers at the lowest dose?".to_string(),
        construct_validity: Rating::Strong,
        internal_validity: Rating::Strong,
        external_validity: Rating::Moderate,
        replacement_available: false,
        reduction_justified: true,
        refinement_implemented: true,
        severity_grade: SeverityGrade::Mild,
        nonpathocentric_factors: BTreeSet::new(),
        societal_interests: [SocietalInterest::LifeHealth, SocietalInterest::ThreeRMethods]
            .into_iter()
            .collect(),
        anticipated_gain: Rating::Strong,
        likelihood: Rating::Moderate,
    }
}

fn disproportionate_case() -> AssessmentInput {
    AssessmentInput {
        title: "Exploratory stressor battery".to_string(),
        objective: String::new(),
        questions: String::new(),
        construct_validity: Rating::Minimal,
        internal_validity: Rating::Moderate,
        external_validity: Rating::Minimal,
        replacement_available: false,
        reduction_justified: false,
        refinement_implemented: true,
        severity_grade: SeverityGrade::Severe,
        nonpathocentric_factors: [NonpathocentricFactor::HumiliationLossOfControl]
            .into_iter()
            .collect(),
        societal_interests: [SocietalInterest::FundamentalKnowledge].into_iter().collect(),
        anticipated_gain: Rating::Minimal,
        likelihood: Rating::Moderate,
    }
}

fn replacement_case() -> AssessmentInput {
    AssessmentInput {
        title: "Hepatotoxicity screen with organoid alternative".to_string(),
        objective: "Rank candidate compounds by liver toxicity".to_string(),
        questions: String::new(),
        construct_validity: Rating::Strong,
        internal_validity: Rating::Strong,
        external_validity: Rating::Strong,
        replacement_available: true,
        reduction_justified: true,
        refinement_implemented: true,
        severity_grade: SeverityGrade::Moderate,
        nonpathocentric_factors: BTreeSet::new(),
        societal_interests: [SocietalInterest::LifeHealth].into_iter().collect(),
        anticipated_gain: Rating::Strong,
        likelihood: Rating::Strong,
    }
}
