//! Report rendering - the pure model-to-string transforms.
//!
//! Each renderer is a single-pass, stateless, idempotent transform: the
//! same model produces byte-identical output, no I/O, no shared state.
//!
//! # Module Organization
//!
//! - `eval` - plain-text interview evaluation sheet
//! - `bug` - bug report to Markdown / HTML fragment
//! - `feature` - feature request to Markdown / HTML fragment
//! - `html` - shared HTML fragment helpers (the escaping policy lives here)

pub mod bug;
pub mod eval;
pub mod feature;
mod html;

use crate::cli::{OutputFormat, Template};
use crate::config::RenderJob;
use crate::types::{BugModel, EvaluationModel, FeatureModel};

/// A rendered report plus the filename the export path should use.
pub struct Rendered {
    pub content: String,
    /// Set for the eval template only
    pub suggested_filename: Option<String>,
}

/// Render a resolved job.
///
/// Total over any field map: every template/format combination the CLI
/// admits produces a complete document, including for empty input.
pub fn render(job: &RenderJob) -> Rendered {
    match job.template {
        Template::Bug => {
            let model = BugModel::from_fields(&job.fields);
            let content = match job.format {
                OutputFormat::Html => bug::to_html(&model),
                _ => bug::to_markdown(&model),
            };
            Rendered { content, suggested_filename: None }
        }
        Template::Feature => {
            let model = FeatureModel::from_fields(&job.fields);
            let content = match job.format {
                OutputFormat::Html => feature::to_html(&model),
                _ => feature::to_markdown(&model),
            };
            Rendered { content, suggested_filename: None }
        }
        Template::Eval => {
            let model = EvaluationModel::from_fields(&job.fields, &job.eval);
            let content = eval::compile(&model, &job.eval);
            let suggested_filename = Some(eval::suggested_filename(&model));
            Rendered { content, suggested_filename }
        }
    }
}
