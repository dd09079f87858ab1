//! Feature request rendering: Markdown and HTML fragment.
//!
//! The acceptance field is newline-delimited criteria. On the HTML path,
//! standalone Given/When/Then keywords are re-cased to title case and
//! wrapped in emphasis - cosmetic normalization only, not Gherkin parsing.

use super::html;
use crate::text::{self, or_placeholder};
use crate::types::FeatureModel;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref GHERKIN_KEYWORD: Regex = Regex::new(r"(?i)\b(given|when|then)\b").unwrap();
}

/// Render the feature model as Jira-friendly Markdown.
pub fn to_markdown(model: &FeatureModel) -> String {
    let criteria = text::non_blank_lines(&model.acceptance)
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");
    let criteria = if criteria.is_empty() { "- Given ..., when ..., then ...".to_string() } else { criteria };

    let mut out = String::new();
    out.push_str("## ✨ Feature Request\n");
    out.push_str(&format!("**Summary:** {}\n", or_placeholder(&model.summary, "[Summary]")));
    out.push_str(&format!("**Type:** {}\n", or_placeholder(&model.feature_type, "Enhancement")));
    out.push_str(&format!("**Stakeholders:** {}\n", model.stakeholders.trim()));
    out.push_str(&format!("**Component:** {}\n\n", model.component.trim()));

    out.push_str("**User Story:**\n");
    out.push_str(model.user_story.trim());
    out.push_str("\n\n");

    out.push_str("**Acceptance Criteria (Gherkin):**\n");
    out.push_str(&criteria);
    out.push('\n');

    let scope_bullets = scope_lines(model);
    if !scope_bullets.is_empty() {
        out.push_str("\n**Scope / Constraints:**\n");
        for bullet in &scope_bullets {
            out.push_str(&format!("- {}\n", bullet));
        }
    }

    if !model.notes.trim().is_empty() {
        out.push_str(&format!("\n**UX / Tech Notes:**\n{}\n", model.notes.trim()));
    }

    if !model.impact.trim().is_empty() {
        out.push_str(&format!("\n**Impact / Value:** {}\n", model.impact.trim()));
    }

    out.push_str(&format!(
        "\n_Estimate:_ {} · _Assignee:_ {} · _Labels:_ {} · _Target Release:_ {}\n",
        model.estimate.trim(),
        model.assignee.trim(),
        or_placeholder(&model.labels, "feature"),
        model.release.trim()
    ));

    out
}

/// Render the feature model as an HTML card fragment.
pub fn to_html(model: &FeatureModel) -> String {
    let criteria: String = text::non_blank_lines(&model.acceptance)
        .iter()
        .map(|line| format!("<li>{}</li>", emphasize_gherkin(&html::escape(line))))
        .collect();
    let criteria = if criteria.is_empty() {
        "<li><em>Given</em> ..., <em>When</em> ..., <em>Then</em> ...</li>".to_string()
    } else {
        criteria
    };

    let mut out = String::new();
    out.push_str("<div class=\"template-wrap\">\n");
    out.push_str("  <div class=\"card\">\n");
    out.push_str("    <h2>✨ Feature Request</h2>\n");
    out.push_str("    <div class=\"sub\">Concise spec with acceptance criteria.</div>\n");

    out.push_str("    <div class=\"kv\">\n");
    out.push_str(&html::kv_row("Summary", &html::escaped_or(&model.summary, "[Summary]")));
    out.push_str(&html::kv_row("Type", &html::escaped_or(&model.feature_type, "Enhancement")));
    out.push_str(&html::kv_row("Stakeholders", &html::escape(&model.stakeholders)));
    out.push_str(&html::kv_row("Component", &html::escape(&model.component)));
    out.push_str("    </div>\n");

    out.push_str(&html::section_title("User Story"));
    out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.user_story)));

    out.push_str(&html::section_title("Acceptance Criteria (Gherkin)"));
    out.push_str(&format!("    <ul class=\"list\">{}</ul>\n", criteria));

    let scope_bullets = scope_lines(model);
    if !scope_bullets.is_empty() {
        out.push_str(&html::section_title("Scope / Constraints"));
        out.push_str("    <ul class=\"list\">");
        for bullet in &scope_bullets {
            out.push_str(&format!("<li>{}</li>", html::escape(bullet)));
        }
        out.push_str("</ul>\n");
    }

    if !model.notes.trim().is_empty() {
        out.push_str(&html::section_title("UX / Tech Notes"));
        out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.notes)));
    }

    if !model.impact.trim().is_empty() {
        out.push_str(&html::section_title("Impact / Value"));
        out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.impact)));
    }

    out.push_str("    <div class=\"hr\"></div>\n");
    out.push_str("    <div class=\"small\">\n");
    out.push_str(&format!("      Estimate: {} · Assignee: {} · Labels:\n", html::escape(&model.estimate), html::escape(&model.assignee)));
    out.push_str(&format!("      {}\n", html::tag_list(&model.labels, "feature")));
    out.push_str(&format!("      · Target Release: {}\n", html::escape(&model.release)));
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out.push_str("</div>\n");

    out
}

/// Title-case standalone Given/When/Then keywords and wrap them in `<em>`.
///
/// Operates on already-escaped text; word boundaries are unaffected by
/// entity escaping.
fn emphasize_gherkin(escaped: &str) -> String {
    GHERKIN_KEYWORD
        .replace_all(escaped, |caps: &Captures| {
            let word = &caps[1];
            let mut chars = word.chars();
            let title = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            };
            format!("<em>{}</em>", title)
        })
        .into_owned()
}

/// The Scope/Constraints bullet lines that have content, in fixed order.
fn scope_lines(model: &FeatureModel) -> Vec<String> {
    let mut bullets = Vec::new();
    if !model.scope_in.trim().is_empty() {
        bullets.push(format!("In scope: {}", model.scope_in.trim()));
    }
    if !model.scope_out.trim().is_empty() {
        bullets.push(format!("Out of scope: {}", model.scope_out.trim()));
    }
    if !model.dependencies.trim().is_empty() {
        bullets.push(format!("Dependencies: {}", model.dependencies.trim()));
    }
    bullets
}

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;
