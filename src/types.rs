//! Core model types shared across the renderers.
//!
//! Models are plain, flat records built fresh from a `FieldMap` on every
//! render and discarded afterwards - no identity, no mutation after
//! construction, no persistence. Extraction is the pure mapping step that
//! replaces the original form readers: given the labeled field values,
//! produce the model record. The renderers never reach into the input map.

use crate::config::EvalConfig;
use crate::fields::FieldMap;
use std::collections::BTreeMap;

/// A 1-5 competency rating, or unrated when the field is absent or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rating {
    #[default]
    Unrated,
    Scored(u8),
}

impl Rating {
    /// Parse a raw rating field. Anything outside 1-5 is unrated.
    pub fn from_field(raw: &str) -> Self {
        match raw.trim().parse::<u8>() {
            Ok(n) if (1..=5).contains(&n) => Rating::Scored(n),
            _ => Rating::Unrated,
        }
    }

    /// Fixed label table for the scoring sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Scored(1) => "Poor",
            Rating::Scored(2) => "Fair",
            Rating::Scored(3) => "Good",
            Rating::Scored(4) => "Very Good",
            Rating::Scored(5) => "Excellent",
            _ => "Unrated",
        }
    }

    /// The score cell for the report line: the digit, or "-" when unrated.
    pub fn score_cell(&self) -> String {
        match self {
            Rating::Scored(n) => n.to_string(),
            Rating::Unrated => "-".to_string(),
        }
    }
}

/// Overall hiring recommendation.
///
/// Recognized values parse to a variant; anything else non-blank is carried
/// through verbatim so the report never loses what the interviewer picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Recommendation {
    StrongHire,
    Hire,
    LeanHire,
    NoHire,
    Other(String),
    #[default]
    Unspecified,
}

impl Recommendation {
    pub fn from_field(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Recommendation::Unspecified;
        }
        match raw.to_ascii_lowercase().as_str() {
            "strong hire" => Recommendation::StrongHire,
            "hire" => Recommendation::Hire,
            "lean hire" => Recommendation::LeanHire,
            "no hire" => Recommendation::NoHire,
            _ => Recommendation::Other(raw.to_string()),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::LeanHire => "Lean Hire",
            Recommendation::NoHire => "No Hire",
            Recommendation::Other(raw) => raw,
            Recommendation::Unspecified => "Unspecified",
        }
    }
}

/// Bug severity, used only to pick the badge class on the HTML path.
///
/// The rendered text keeps the raw field value; unrecognized or absent
/// severities fall back to the Medium/blue badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn from_label(raw: &str) -> Option<Severity> {
        match raw.trim() {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Critical => "badge red",
            Severity::High => "badge orange",
            Severity::Medium => "badge blue",
            Severity::Low => "badge green",
        }
    }

    /// Badge class for a raw severity field, defaulting to Medium's blue.
    pub fn badge_class_for(raw: &str) -> &'static str {
        Severity::from_label(raw).unwrap_or(Severity::Medium).badge_class()
    }
}

/// Flat bug-report field record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugModel {
    pub summary: String,
    pub severity: String,
    pub priority: String,
    pub component: String,
    pub environment: String,
    pub steps: String,
    pub expected: String,
    pub actual: String,
    pub evidence: String,
    pub logs: String,
    pub users_affected: String,
    pub frequency: String,
    pub workaround: String,
    pub notes: String,
    pub affects_version: String,
    pub fix_version: String,
    pub assignee: String,
    pub labels: String,
}

impl BugModel {
    /// Extract the bug model from a flat field map.
    pub fn from_fields(fields: &FieldMap) -> Self {
        BugModel {
            summary: fields.get("summary").to_string(),
            severity: fields.get("severity").to_string(),
            priority: fields.get("priority").to_string(),
            component: fields.get("component").to_string(),
            environment: fields.get("environment").to_string(),
            steps: fields.get("steps").to_string(),
            expected: fields.get("expected").to_string(),
            actual: fields.get("actual").to_string(),
            evidence: fields.get("evidence").to_string(),
            logs: fields.get("logs").to_string(),
            users_affected: fields.get("usersAffected").to_string(),
            frequency: fields.get("frequency").to_string(),
            workaround: fields.get("workaround").to_string(),
            notes: fields.get("notes").to_string(),
            affects_version: fields.get("affectsVersion").to_string(),
            fix_version: fields.get("fixVersion").to_string(),
            assignee: fields.get("assignee").to_string(),
            labels: fields.get("labels").to_string(),
        }
    }
}

/// Flat feature-request field record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureModel {
    pub summary: String,
    pub feature_type: String,
    pub stakeholders: String,
    pub component: String,
    pub user_story: String,
    pub acceptance: String,
    pub scope_in: String,
    pub scope_out: String,
    pub dependencies: String,
    pub notes: String,
    pub impact: String,
    pub estimate: String,
    pub assignee: String,
    pub release: String,
    pub labels: String,
}

impl FeatureModel {
    /// Extract the feature model from a flat field map.
    pub fn from_fields(fields: &FieldMap) -> Self {
        FeatureModel {
            summary: fields.get("summary").to_string(),
            feature_type: fields.get("type").to_string(),
            stakeholders: fields.get("stakeholders").to_string(),
            component: fields.get("component").to_string(),
            user_story: fields.get("userStory").to_string(),
            acceptance: fields.get("acceptance").to_string(),
            scope_in: fields.get("scopeIn").to_string(),
            scope_out: fields.get("scopeOut").to_string(),
            dependencies: fields.get("dependencies").to_string(),
            notes: fields.get("notes").to_string(),
            impact: fields.get("impact").to_string(),
            estimate: fields.get("estimate").to_string(),
            assignee: fields.get("assignee").to_string(),
            release: fields.get("release").to_string(),
            labels: fields.get("labels").to_string(),
        }
    }
}

/// Rating and notes for one competency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetencyScore {
    pub rating: Rating,
    pub notes: String,
}

/// Candidate metadata plus per-competency scores for one evaluation session.
///
/// Built fresh on every export/copy action and discarded after. Competency
/// keys come from the `EvalConfig` in effect; the `questions` list preserves
/// selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationModel {
    pub candidate_name: String,
    pub candidate_role: String,
    pub session_date: String,
    pub interviewer: String,
    pub years_exp: String,
    pub start_time: String,
    pub scores: BTreeMap<String, CompetencyScore>,
    pub questions: Vec<String>,
    pub recommendation: Recommendation,
    pub summary: String,
}

impl EvaluationModel {
    /// Extract the evaluation model from a flat field map.
    ///
    /// Per-competency fields are looked up as `{key}_rating` / `{key}_notes`
    /// for each competency the config defines. Selected questions arrive as
    /// a newline-delimited field, order preserved.
    pub fn from_fields(fields: &FieldMap, config: &EvalConfig) -> Self {
        let mut scores = BTreeMap::new();
        for competency in &config.competencies {
            let rating = Rating::from_field(fields.get(&format!("{}_rating", competency.key)));
            let notes = fields.get(&format!("{}_notes", competency.key)).to_string();
            scores.insert(competency.key.clone(), CompetencyScore { rating, notes });
        }

        let questions =
            crate::text::non_blank_lines(fields.get("questions")).into_iter().map(|q| q.to_string()).collect();

        EvaluationModel {
            candidate_name: fields.get("candidateName").to_string(),
            candidate_role: fields.get("candidateRole").to_string(),
            session_date: fields.get("sessionDate").to_string(),
            interviewer: fields.get("interviewer").to_string(),
            years_exp: fields.get("yearsExp").to_string(),
            start_time: fields.get("startTime").to_string(),
            scores,
            questions,
            recommendation: Recommendation::from_field(fields.get("recommendation")),
            summary: fields.get("summary").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_parses_valid_range() {
        assert_eq!(Rating::from_field("3"), Rating::Scored(3));
        assert_eq!(Rating::from_field(" 5 "), Rating::Scored(5));
        assert_eq!(Rating::from_field("0"), Rating::Unrated);
        assert_eq!(Rating::from_field("6"), Rating::Unrated);
        assert_eq!(Rating::from_field("high"), Rating::Unrated);
        assert_eq!(Rating::from_field(""), Rating::Unrated);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::Scored(1).label(), "Poor");
        assert_eq!(Rating::Scored(4).label(), "Very Good");
        assert_eq!(Rating::Unrated.label(), "Unrated");
        assert_eq!(Rating::Unrated.score_cell(), "-");
    }

    #[test]
    fn test_recommendation_parsing() {
        assert_eq!(Recommendation::from_field("hire"), Recommendation::Hire);
        assert_eq!(Recommendation::from_field("Strong Hire"), Recommendation::StrongHire);
        assert_eq!(Recommendation::from_field(""), Recommendation::Unspecified);
        assert_eq!(
            Recommendation::from_field("Needs another round"),
            Recommendation::Other("Needs another round".to_string())
        );
        assert_eq!(Recommendation::from_field("Needs another round").display(), "Needs another round");
    }

    #[test]
    fn test_severity_badge_classes() {
        assert_eq!(Severity::badge_class_for("Critical"), "badge red");
        assert_eq!(Severity::badge_class_for("High"), "badge orange");
        assert_eq!(Severity::badge_class_for("Medium"), "badge blue");
        assert_eq!(Severity::badge_class_for("Low"), "badge green");
        assert_eq!(Severity::badge_class_for("Unknown"), "badge blue");
        assert_eq!(Severity::badge_class_for(""), "badge blue");
    }

    #[test]
    fn test_bug_model_from_empty_fields() {
        let model = BugModel::from_fields(&FieldMap::new());
        assert_eq!(model, BugModel::default());
    }

    #[test]
    fn test_eval_model_extracts_competency_fields() {
        let mut fields = FieldMap::new();
        fields.set("fundamentals_rating", "4");
        fields.set("fundamentals_notes", "solid on dunder methods");
        fields.set("questions", "Q one\n\nQ two");
        let config = EvalConfig::default();

        let model = EvaluationModel::from_fields(&fields, &config);
        let score = &model.scores["fundamentals"];
        assert_eq!(score.rating, Rating::Scored(4));
        assert_eq!(score.notes, "solid on dunder methods");
        assert_eq!(model.questions, vec!["Q one", "Q two"]);
    }
}
