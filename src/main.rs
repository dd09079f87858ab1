use reportgen::cli::CliArgs;
use reportgen::config::{self, EvalConfig};
use reportgen::render::{self, Rendered};
use reportgen::timer::SessionTimer;
use reportgen::types::Rating;
use reportgen::{export, ui};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Validate argument combinations
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Print the interviewer-facing guide instead of rendering
    if args.show_guide {
        let config = match args.eval_config {
            Some(ref path) => match EvalConfig::from_path(path) {
                Ok(config) => config,
                Err(e) => {
                    ui::print_error(&e);
                    std::process::exit(1);
                }
            },
            None => EvalConfig::default(),
        };
        print_guide(&config);
        return;
    }

    // Resolve the full render job upfront
    let job = match config::build_render_job(&args) {
        Ok(job) => job,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let rendered = render::render(&job);
    deliver(&args, &rendered);
}

/// Route the rendered report to its destinations: generated-filename export,
/// clipboard, output file, or stdout.
fn deliver(args: &CliArgs, rendered: &Rendered) {
    // The plain report text the preview/stdout path shows, or the JSON
    // envelope when requested
    let delivered = if args.json {
        let envelope = serde_json::json!({
            "template": args.template.as_str(),
            "format": args.effective_format().as_str(),
            "suggested_filename": rendered.suggested_filename,
            "content": rendered.content,
        });
        // Valid by construction: the envelope contains only strings
        serde_json::to_string_pretty(&envelope).unwrap_or_default()
    } else {
        rendered.content.clone()
    };

    if let Some(ref dir) = args.export_dir {
        // The export always writes the plain report under its suggested name
        let filename = rendered.suggested_filename.as_deref().unwrap_or("report.txt");
        match export::export_report(dir, filename, &rendered.content) {
            Ok(path) => ui::status(&format!("exported {}", path.display())),
            Err(e) => {
                ui::print_error(&format!("Failed to export report: {}", e));
                std::process::exit(1);
            }
        }
    }

    if args.copy {
        // Single attempt; failure is non-fatal and names the fallback
        match export::copy_to_clipboard(&delivered) {
            Ok(()) => ui::status("copied to clipboard"),
            Err(e) => ui::print_warning(&format!("{}. Use --output or --export-dir instead.", e)),
        }
    }

    if let Some(ref path) = args.output {
        if let Err(e) = export::write_output_file(path, &delivered) {
            ui::print_error(&format!("Failed to write {}: {}", path.display(), e));
            std::process::exit(1);
        }
        ui::status(&format!("wrote {}", path.display()));
        return;
    }

    // Default destination: stdout, unless another destination consumed it
    if args.export_dir.is_none() && !args.copy {
        println!("{}", delivered);
    }
}

/// Print the competency rating guide and question bank.
fn print_guide(config: &EvalConfig) {
    println!("Session length: {}", SessionTimer::for_session().display());
    println!();

    let scale: Vec<String> = (1..=5u8).map(|n| format!("{} {}", n, Rating::Scored(n).label())).collect();
    println!("Ratings (1–5): {}", scale.join(" · "));
    println!();

    println!("Competencies:");
    for (index, competency) in config.competencies.iter().enumerate() {
        println!("{}. {}", index + 1, competency.title);
        if !competency.help.is_empty() {
            println!("   {}", competency.help);
        }
    }
    println!();

    println!("Question bank:");
    for question in &config.questions {
        println!("- {}", question);
    }
}
