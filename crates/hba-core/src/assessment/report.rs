use super::domain::{AssessmentInput, NonpathocentricFactor, Rating, SocietalInterest};
use super::evaluation::ScoreResult;

const UNTITLED: &str = "Untitled project";
const NO_OBJECTIVE: &str = "Objective not provided";
const BLANK: &str = "—";

/// Render the narrative assessment report.
///
/// Five fixed sections in fixed order; identical input yields an identical
/// document. List fields are rendered in enum declaration order, not
/// selection order, and all scores carry exactly two decimal places.
pub fn format_report(input: &AssessmentInput, result: &ScoreResult) -> String {
    let title = text_or(&input.title, UNTITLED);
    let mut out = String::new();

    out.push_str(&format!("# Harm–benefit assessment: {title}\n\n"));

    out.push_str("## Project\n");
    out.push_str(&format!("- Title: {title}\n"));
    out.push_str(&format!(
        "- Objective: {}\n",
        text_or(&input.objective, NO_OBJECTIVE)
    ));
    out.push_str(&format!(
        "- Research questions: {}\n\n",
        text_or(&input.questions, BLANK)
    ));

    out.push_str("## Instrumental indispensability\n");
    out.push_str(&rating_line("Construct validity", input.construct_validity));
    out.push_str(&rating_line("Internal validity", input.internal_validity));
    out.push_str(&rating_line("External validity", input.external_validity));
    out.push_str(&format!(
        "- Suitability score: {:.2}\n",
        result.suitability_score
    ));
    out.push_str(&format!(
        "- Replacement available: {}\n",
        yes_no(input.replacement_available)
    ));
    out.push_str(&format!(
        "- Reduction justified: {}\n",
        yes_no(input.reduction_justified)
    ));
    out.push_str(&format!(
        "- Refinement implemented: {}\n\n",
        yes_no(input.refinement_implemented)
    ));

    out.push_str("## Strain\n");
    out.push_str(&format!(
        "- Severity grade: {} ({})\n",
        input.severity_grade.value(),
        input.severity_grade.label()
    ));
    push_list(
        &mut out,
        "Nonpathocentric factors",
        NonpathocentricFactor::ordered()
            .into_iter()
            .filter(|factor| input.nonpathocentric_factors.contains(factor))
            .map(NonpathocentricFactor::label),
    );
    out.push_str(&format!("- Strain score: {:.2}\n\n", result.strain_score));

    out.push_str("## Societal interests and anticipated gain\n");
    push_list(
        &mut out,
        "Societal interests",
        SocietalInterest::ordered()
            .into_iter()
            .filter(|interest| input.societal_interests.contains(interest))
            .map(SocietalInterest::label),
    );
    out.push_str(&rating_line("Anticipated gain", input.anticipated_gain));
    out.push_str(&rating_line("Likelihood of success", input.likelihood));
    out.push_str(&format!(
        "- Interest score: {:.2}\n\n",
        result.interest_score
    ));

    out.push_str("## Overall decision\n");
    out.push_str(result.decision.statement());
    out.push('\n');

    out
}

fn text_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn rating_line(name: &str, rating: Rating) -> String {
    format!("- {name}: {} ({})\n", rating.value(), rating.label())
}

fn push_list<'a>(out: &mut String, name: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        out.push_str(&format!("- {name}: {BLANK}\n"));
        return;
    }

    out.push_str(&format!("- {name}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
