//! Interview evaluation sheet compilation.
//!
//! `compile` is deterministic and total: absent fields substitute documented
//! defaults (name "Unknown", date today, recommendation "Unspecified"), so
//! the report is always a complete document. Competencies render in
//! definition order; selected questions render verbatim in selection order.

use crate::config::EvalConfig;
use crate::text::or_placeholder;
use crate::types::{CompetencyScore, EvaluationModel};

/// Compile the evaluation model into the plain-text report.
pub fn compile(model: &EvaluationModel, config: &EvalConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Candidate: {}", or_placeholder(&model.candidate_name, "Unknown")));
    lines.push(format!("Role: {}", model.candidate_role.trim()));
    lines.push(format!("Date: {}", effective_date(model)));
    lines.push(format!("Interviewer: {}", model.interviewer.trim()));
    if !model.years_exp.trim().is_empty() {
        lines.push(format!("Years of experience: {}", model.years_exp.trim()));
    }
    if !model.start_time.trim().is_empty() {
        lines.push(format!("Start time: {}", model.start_time.trim()));
    }

    lines.push(String::new());
    lines.push("Ratings (1–5):".to_string());
    let unscored = CompetencyScore::default();
    for (index, competency) in config.competencies.iter().enumerate() {
        let score = model.scores.get(&competency.key).unwrap_or(&unscored);
        lines.push(format!(
            "{}. {}: {} ({})",
            index + 1,
            competency.title,
            score.rating.score_cell(),
            score.rating.label()
        ));
        if !score.notes.trim().is_empty() {
            lines.push(format!("   Notes: {}", score.notes.trim()));
        }
    }

    lines.push(String::new());
    lines.push("Questions covered:".to_string());
    if model.questions.is_empty() {
        lines.push("- (None marked)".to_string());
    } else {
        for question in &model.questions {
            lines.push(format!("- {}", question));
        }
    }

    lines.push(String::new());
    lines.push(format!("Overall recommendation: {}", model.recommendation.display()));

    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(or_placeholder(&model.summary, "(No summary)").to_string());

    lines.join("\n")
}

/// Suggested filename for the export path:
/// `PythonInterview_Eval_{Name_With_Underscores}_{YYYY-MM-DD}.txt`.
pub fn suggested_filename(model: &EvaluationModel) -> String {
    let name = or_placeholder(&model.candidate_name, "Candidate");
    let name = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("PythonInterview_Eval_{}_{}.txt", name, effective_date(model))
}

/// The session date, or today's local date (YYYY-MM-DD) when blank.
fn effective_date(model: &EvaluationModel) -> String {
    let date = model.session_date.trim();
    if date.is_empty() { chrono::Local::now().format("%Y-%m-%d").to_string() } else { date.to_string() }
}

#[cfg(test)]
#[path = "eval_test.rs"]
mod eval_test;
