/// Tests for the evaluation sheet compiler
#[cfg(test)]
mod tests {
    use crate::config::EvalConfig;
    use crate::fields::FieldMap;
    use crate::render::eval::{compile, suggested_filename};
    use crate::types::EvaluationModel;

    fn model_from(fields: &FieldMap) -> EvaluationModel {
        EvaluationModel::from_fields(fields, &EvalConfig::default())
    }

    fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_empty_model_substitutes_defaults() {
        let report = compile(&model_from(&FieldMap::new()), &EvalConfig::default());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Candidate: Unknown");
        assert_eq!(lines[1], "Role: ");
        assert_eq!(lines[2], format!("Date: {}", today()));
        assert!(report.contains("Overall recommendation: Unspecified"));
        assert!(report.contains("(No summary)"));
    }

    #[test]
    fn test_competencies_render_in_definition_order() {
        let config = EvalConfig::default();
        let report = compile(&model_from(&FieldMap::new()), &config);

        assert!(report.contains("1. Python Fundamentals: - (Unrated)"));
        assert!(report.contains("6. Debugging & Tooling: - (Unrated)"));

        let mut last = 0;
        for competency in &config.competencies {
            let pos = report.find(&competency.title).expect("competency line present");
            assert!(pos > last, "{} out of order", competency.title);
            last = pos;
        }
    }

    #[test]
    fn test_rated_competency_line_and_notes() {
        let mut fields = FieldMap::new();
        fields.set("fundamentals_rating", "5");
        fields.set("fundamentals_notes", "clean generator usage");
        fields.set("data_numerics_rating", "2");
        let report = compile(&model_from(&fields), &EvalConfig::default());

        assert!(report.contains("1. Python Fundamentals: 5 (Excellent)"));
        assert!(report.contains("   Notes: clean generator usage"));
        assert!(report.contains("5. Data & Numerics: 2 (Fair)"));
        // Unrated competencies carry no notes line
        assert!(!report.contains("2. Stdlib & Packaging: - (Unrated)\n   Notes:"));
    }

    #[test]
    fn test_header_omits_blank_optional_lines() {
        let mut fields = FieldMap::new();
        fields.set("candidateName", "Ada Lovelace");
        fields.set("yearsExp", "7");
        let report = compile(&model_from(&fields), &EvalConfig::default());
        assert!(report.contains("Years of experience: 7"));
        assert!(!report.contains("Start time:"));

        let bare = compile(&model_from(&FieldMap::new()), &EvalConfig::default());
        assert!(!bare.contains("Years of experience:"));
        assert!(!bare.contains("Start time:"));
    }

    #[test]
    fn test_questions_render_in_selection_order() {
        let mut fields = FieldMap::new();
        fields.set("questions", "What is the GIL?\nExplain list vs tuple trade-offs.");
        let report = compile(&model_from(&fields), &EvalConfig::default());

        let first = report.find("- What is the GIL?").expect("first question");
        let second = report.find("- Explain list vs tuple trade-offs.").expect("second question");
        assert!(first < second);
        assert!(!report.contains("- (None marked)"));
    }

    #[test]
    fn test_no_questions_renders_fallback_line() {
        let report = compile(&model_from(&FieldMap::new()), &EvalConfig::default());
        assert!(report.contains("Questions covered:\n- (None marked)"));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let mut fields = FieldMap::new();
        fields.set("candidateName", "Ada Lovelace");
        fields.set("sessionDate", "2024-06-01");
        fields.set("recommendation", "hire");
        let model = model_from(&fields);
        let config = EvalConfig::default();
        assert_eq!(compile(&model, &config), compile(&model, &config));
    }

    #[test]
    fn test_recommendation_renders_parsed_label() {
        let mut fields = FieldMap::new();
        fields.set("recommendation", "strong hire");
        let report = compile(&model_from(&fields), &EvalConfig::default());
        assert!(report.contains("Overall recommendation: Strong Hire"));
    }

    #[test]
    fn test_suggested_filename_underscores_and_date() {
        let mut fields = FieldMap::new();
        fields.set("candidateName", "Ada  Mary Lovelace");
        fields.set("sessionDate", "2024-06-01");
        let name = suggested_filename(&model_from(&fields));
        assert_eq!(name, "PythonInterview_Eval_Ada_Mary_Lovelace_2024-06-01.txt");
    }

    #[test]
    fn test_suggested_filename_defaults() {
        let name = suggested_filename(&model_from(&FieldMap::new()));
        assert_eq!(name, format!("PythonInterview_Eval_Candidate_{}.txt", today()));
    }

    #[test]
    fn test_custom_config_drives_competency_lines() {
        let config = EvalConfig {
            competencies: vec![crate::config::CompetencyDefinition {
                key: "ownership".to_string(),
                title: "Ownership & Borrowing".to_string(),
                help: String::new(),
            }],
            questions: vec![],
        };
        let mut fields = FieldMap::new();
        fields.set("ownership_rating", "3");
        let model = EvaluationModel::from_fields(&fields, &config);
        let report = compile(&model, &config);
        assert!(report.contains("1. Ownership & Borrowing: 3 (Good)"));
        assert!(!report.contains("Python Fundamentals"));
    }
}
