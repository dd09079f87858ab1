use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which report template to render.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Bug report (Markdown or HTML fragment)
    Bug,
    /// Feature request (Markdown or HTML fragment)
    Feature,
    /// Interview evaluation sheet (plain text)
    Eval,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Bug => "bug",
            Template::Feature => "feature",
            Template::Eval => "eval",
        }
    }
}

/// Output format for the rendered report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "reportgen")]
#[command(about = "Render bug/feature report templates and interview evaluation sheets from flat field files")]
#[command(version)]
pub struct CliArgs {
    /// Field file (TOML or JSON; "-" reads stdin). Omit to render an empty form.
    #[arg(value_name = "FIELDS")]
    pub input: Option<PathBuf>,

    /// Template to render
    #[arg(long, short = 't', value_enum, default_value = "bug")]
    pub template: Template,

    /// Output format (default: markdown for bug/feature, text for eval)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the rendered report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write an evaluation report into this directory under its suggested
    /// filename (PythonInterview_Eval_{Name}_{date}.txt)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Copy the rendered report to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Competency/question configuration file for the eval template
    #[arg(long, value_name = "PATH")]
    pub eval_config: Option<PathBuf>,

    /// Wrap the rendered report in a JSON envelope
    #[arg(long)]
    pub json: bool,

    /// Print the competency rating guide and question bank, then exit
    #[arg(long)]
    pub show_guide: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// The output format in effect: explicit flag, or the template default.
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or(match self.template {
            Template::Bug | Template::Feature => OutputFormat::Markdown,
            Template::Eval => OutputFormat::Text,
        })
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        match (self.template, self.effective_format()) {
            (Template::Eval, OutputFormat::Markdown | OutputFormat::Html) => {
                return Err("The eval template renders plain text only (use --format text)".to_string());
            }
            (Template::Bug | Template::Feature, OutputFormat::Text) => {
                return Err(format!(
                    "The {} template renders markdown or html (use --format markdown|html)",
                    self.template.as_str()
                ));
            }
            _ => {}
        }

        if self.export_dir.is_some() && self.template != Template::Eval {
            return Err("--export-dir applies to the eval template only".to_string());
        }

        Ok(())
    }
}
