//! Bug report rendering: Markdown and HTML fragment.
//!
//! Both renderers are total over the flat field model - missing fields
//! render as empty segments or documented placeholders, never errors.
//! Optional subsections (Scope/Impact, Notes, the logs block) appear only
//! when their source field is non-blank; no empty headings or bullets.

use super::html;
use crate::text::{self, or_placeholder};
use crate::types::{BugModel, Severity};

/// Render the bug model as Jira-friendly Markdown.
pub fn to_markdown(model: &BugModel) -> String {
    let steps = text::non_blank_lines(&model.steps)
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n");
    let steps = if steps.is_empty() { "1. [Step 1]\n2. [Step 2]".to_string() } else { steps };

    let mut out = String::new();
    out.push_str("## 🐞 Bug Report\n");
    out.push_str(&format!("**Summary:** {}\n", or_placeholder(&model.summary, "[Summary]")));
    out.push_str(&format!(
        "**Severity:** {} · **Priority:** {}\n",
        or_placeholder(&model.severity, "High"),
        or_placeholder(&model.priority, "P1")
    ));
    out.push_str(&format!("**Component:** {}\n", model.component.trim()));
    out.push_str(&format!("**Environment:** {}\n\n", model.environment.trim()));

    out.push_str("**Steps to Reproduce:**\n");
    out.push_str(&steps);
    out.push_str("\n\n");

    out.push_str(&format!("**Expected Result:** {}\n", model.expected.trim()));
    out.push_str(&format!("**Actual Result:** {}\n\n", model.actual.trim()));

    out.push_str(&format!("**Evidence:** {}\n", model.evidence.trim()));
    if !model.logs.trim().is_empty() {
        out.push_str(&format!("```\n{}\n```\n", model.logs.trim()));
    }

    let scope_bullets = scope_lines(model);
    if !scope_bullets.is_empty() {
        out.push_str("\n**Scope / Impact:**\n");
        for bullet in &scope_bullets {
            out.push_str(&format!("- {}\n", bullet));
        }
    }

    if !model.notes.trim().is_empty() {
        out.push_str(&format!("\n**Notes:** {}\n", model.notes.trim()));
    }

    out.push_str(&format!(
        "\n_Assignee:_ {} · _Labels:_ {} · _Affects Versions:_ {} · _Fix Version:_ {}\n",
        model.assignee.trim(),
        or_placeholder(&model.labels, "bug"),
        model.affects_version.trim(),
        model.fix_version.trim()
    ));

    out
}

/// Render the bug model as an HTML card fragment.
///
/// Free text is escaped; the severity badge class comes from the fixed
/// Critical/High/Medium/Low palette, defaulting to Medium's blue.
pub fn to_html(model: &BugModel) -> String {
    let steps = html::list_items(&model.steps);
    let steps = if steps.is_empty() { "<li>[Step 1]</li><li>[Step 2]</li>".to_string() } else { steps };

    let mut out = String::new();
    out.push_str("<div class=\"template-wrap\">\n");
    out.push_str("  <div class=\"card\">\n");
    out.push_str("    <h2>🐞 Bug Report</h2>\n");
    out.push_str("    <div class=\"sub\">Fill in under 5 minutes.</div>\n");

    out.push_str("    <div class=\"kv\">\n");
    out.push_str(&html::kv_row("Summary", &html::escaped_or(&model.summary, "[Summary]")));
    out.push_str(&html::kv_row(
        "Severity",
        &format!(
            "<span class=\"{}\">{}</span>",
            Severity::badge_class_for(&model.severity),
            html::escaped_or(&model.severity, "High")
        ),
    ));
    out.push_str(&html::kv_row("Priority", &html::escaped_or(&model.priority, "P1")));
    out.push_str(&html::kv_row("Component", &html::escape(&model.component)));
    out.push_str(&html::kv_row("Environment", &html::escape(&model.environment)));
    out.push_str("    </div>\n");

    out.push_str(&html::section_title("Steps to Reproduce"));
    out.push_str(&format!("    <ol class=\"list\">{}</ol>\n", steps));

    out.push_str(&html::section_title("Expected Result"));
    out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.expected)));
    out.push_str(&html::section_title("Actual Result"));
    out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.actual)));

    out.push_str(&html::section_title("Evidence"));
    out.push_str(&format!("    <div>{}", html::escape(&model.evidence)));
    if !model.logs.trim().is_empty() {
        out.push_str(&format!("<div class=\"code\">{}</div>", html::escape(&model.logs)));
    }
    out.push_str("</div>\n");

    let scope_bullets = scope_lines(model);
    if !scope_bullets.is_empty() {
        out.push_str(&html::section_title("Scope / Impact"));
        out.push_str("    <ul class=\"list\">");
        for bullet in &scope_bullets {
            out.push_str(&format!("<li>{}</li>", html::escape(bullet)));
        }
        out.push_str("</ul>\n");
    }

    if !model.notes.trim().is_empty() {
        out.push_str(&html::section_title("Notes"));
        out.push_str(&format!("    <div>{}</div>\n", html::escape(&model.notes)));
    }

    out.push_str("    <div class=\"hr\"></div>\n");
    out.push_str("    <div class=\"small\">\n");
    if !model.assignee.trim().is_empty() {
        out.push_str(&format!("      Assignee: {} ·\n", html::escape(&model.assignee)));
    }
    out.push_str(&format!("      Labels: {}\n", html::tag_list(&model.labels, "bug")));
    if !model.affects_version.trim().is_empty() {
        out.push_str(&format!("      · Affects Version(s): {}\n", html::escape(&model.affects_version)));
    }
    if !model.fix_version.trim().is_empty() {
        out.push_str(&format!("      · Fix Version: {}\n", html::escape(&model.fix_version)));
    }
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out.push_str("</div>\n");

    out
}

/// The Scope/Impact bullet lines that have content, in fixed order.
fn scope_lines(model: &BugModel) -> Vec<String> {
    let mut bullets = Vec::new();
    if !model.users_affected.trim().is_empty() {
        bullets.push(format!("Users affected: {}", model.users_affected.trim()));
    }
    if !model.frequency.trim().is_empty() {
        bullets.push(format!("Frequency: {}", model.frequency.trim()));
    }
    if !model.workaround.trim().is_empty() {
        bullets.push(format!("Workaround: {}", model.workaround.trim()));
    }
    bullets
}

#[cfg(test)]
#[path = "bug_test.rs"]
mod bug_test;
