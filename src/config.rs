/// Configuration resolution module
///
/// This module handles:
/// - The built-in competency list and question bank for the evaluation sheet
/// - Loading a replacement evaluation config from a TOML file
/// - Building a RenderJob from CLI arguments (input loading, format defaults)
use crate::cli::{CliArgs, OutputFormat, Template};
use crate::fields::FieldMap;
use log::debug;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One fixed skill area rated 1-5 on the evaluation sheet.
///
/// Created at startup (or loaded from a config file), immutable afterwards.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CompetencyDefinition {
    /// Unique slug, used to derive the `{key}_rating` / `{key}_notes` fields
    pub key: String,
    /// Display title for the report line
    pub title: String,
    /// Interviewer-facing guidance, shown in the rating guide
    #[serde(default)]
    pub help: String,
}

/// Immutable evaluation-sheet configuration: competencies plus question bank.
///
/// The defaults mirror the original Python-interview sheet. Supplying a
/// different config substitutes or localizes the lists without touching any
/// formatting logic.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EvalConfig {
    pub competencies: Vec<CompetencyDefinition>,
    pub questions: Vec<String>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        let competencies = [
            (
                "fundamentals",
                "Python Fundamentals",
                "Syntax, data structures (list/dict/set/tuple), iteration, comprehensions, OOP & data model (dunder methods).",
            ),
            (
                "stdlib_packaging",
                "Stdlib & Packaging",
                "venv, pip, pyproject.toml, wheels; import system, modules, path management.",
            ),
            (
                "performance_concurrency",
                "Performance & Concurrency",
                "GIL impact; threading vs multiprocessing vs asyncio; profiling (cProfile), memory (tracemalloc).",
            ),
            (
                "testing_quality",
                "Testing & Code Quality",
                "pytest fixtures & parametrization; type hints, static checks; docstrings, linters.",
            ),
            (
                "data_numerics",
                "Data & Numerics",
                "NumPy broadcasting & vectorization; pandas pitfalls (chained assignment, indexes).",
            ),
            (
                "debug_tooling",
                "Debugging & Tooling",
                "Logging vs print; pdb/ipdb; profiling tools; exception hygiene.",
            ),
        ]
        .into_iter()
        .map(|(key, title, help)| CompetencyDefinition {
            key: key.to_string(),
            title: title.to_string(),
            help: help.to_string(),
        })
        .collect();

        let questions = [
            "Explain list vs tuple trade-offs and when immutability helps.",
            "Walk through Python data model and a practical use of __iter__/__enter__/__exit__.",
            "How do you manage environments and packaging? pyproject.toml vs requirements.txt vs setup.cfg.",
            "What is the GIL? Contrast threading, multiprocessing, and asyncio with examples.",
            "Approach to profiling and optimizing Python (cProfile, time complexity, vectorization).",
            "NumPy broadcasting rules and common performance pitfalls. Give a code example.",
            "Pandas: avoid chained assignment; groupby vs apply; index best practices.",
            "pytest best practices: fixtures, parametrization, mocking; property-based testing.",
            "Logging configuration and structured logging; when to use WARNING vs INFO.",
            "Safe serialization: pickle vs json; risks in unpickling; Parquet for tabular data.",
            "Iterators/generators, lazy evaluation; memory-efficient data pipelines.",
            "Dataclasses vs attrs/pydantic—trade-offs for validation and performance.",
        ]
        .into_iter()
        .map(|q| q.to_string())
        .collect();

        EvalConfig { competencies, questions }
    }
}

impl EvalConfig {
    /// Load a replacement config from a TOML file.
    ///
    /// The file must define `[[competencies]]` entries (key, title, optional
    /// help) and a `questions` array.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read eval config {}: {}", path.display(), e))?;
        let config: EvalConfig =
            toml::from_str(&raw).map_err(|e| format!("Invalid eval config {}: {}", path.display(), e))?;

        if config.competencies.is_empty() {
            return Err(format!("Eval config {} defines no competencies", path.display()));
        }
        debug!(
            "Loaded eval config with {} competencies and {} questions",
            config.competencies.len(),
            config.questions.len()
        );
        Ok(config)
    }
}

/// A fully resolved render job: template, format, input snapshot, and the
/// evaluation config in effect.
///
/// Resolving everything upfront means the renderers receive a validated,
/// immutable description of the work and perform no I/O themselves.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub template: Template,
    pub format: OutputFormat,
    pub fields: FieldMap,
    pub eval: EvalConfig,
}

/// Build a complete RenderJob from CLI arguments.
pub fn build_render_job(args: &CliArgs) -> Result<RenderJob, String> {
    debug!("Building render job from CLI args");

    let fields = load_fields(args)?;
    debug!("Render job: template {:?}", args.template);

    let eval = match args.eval_config {
        Some(ref path) => EvalConfig::from_path(path)?,
        None => EvalConfig::default(),
    };

    Ok(RenderJob { template: args.template, format: args.effective_format(), fields, eval })
}

/// Load the field map from the input file, stdin ("-"), or nothing.
///
/// Files are parsed by extension (.json is JSON, anything else TOML).
/// Stdin is tried as TOML first, then JSON. An omitted input renders the
/// empty form - every template has a complete default document.
fn load_fields(args: &CliArgs) -> Result<FieldMap, String> {
    let Some(ref input) = args.input else {
        debug!("No input file, rendering empty field map");
        return Ok(FieldMap::new());
    };

    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).map_err(|e| format!("Failed to read stdin: {}", e))?;
        return FieldMap::from_toml_str(&raw).or_else(|toml_err| {
            FieldMap::from_json_str(&raw).map_err(|json_err| {
                format!("Stdin is neither valid TOML nor JSON: {} / {}", toml_err, json_err)
            })
        });
    }

    let raw = std::fs::read_to_string(input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;
    let is_json = input.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json { FieldMap::from_json_str(&raw) } else { FieldMap::from_toml_str(&raw) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
