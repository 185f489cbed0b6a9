//! Batch command - analyze a set of document text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use ecrit_core::{ParseRequest, ParseResponse, SuggestionEngine};

use super::analyze::{OutputFormat, engine_from, format_response, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern selecting the input text files
    #[arg(required = true)]
    pattern: String,

    /// Directory for per-file outputs
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for per-file outputs
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write a summary.csv with one row per document
    #[arg(long)]
    summary: bool,

    /// Keep going when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// What happened to one input file.
struct FileOutcome {
    file: PathBuf,
    analysis: Option<ParseResponse>,
    failure: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let started = Instant::now();
    let engine = engine_from(&load_config(config_path)?);

    let files: Vec<PathBuf> = glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    if files.is_empty() {
        anyhow::bail!("Nothing matches pattern: {}", args.pattern);
    }
    println!(
        "{} Analyzing {} document(s)",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();
        progress.set_message(name);
        outcomes.push(analyze_file(&engine, file, &args)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    if args.summary {
        let summary = args
            .output_dir
            .as_deref()
            .unwrap_or(Path::new("."))
            .join("summary.csv");
        write_summary(&summary, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary.display()
        );
    }

    report(&outcomes, started);
    Ok(())
}

/// Read, analyze and (when an output directory is set) render one file.
/// Unreadable files become a recorded failure under --continue-on-error and
/// abort the batch otherwise.
fn analyze_file(
    engine: &SuggestionEngine,
    file: PathBuf,
    args: &BatchArgs,
) -> anyhow::Result<FileOutcome> {
    let text = match fs::read_to_string(&file) {
        Ok(text) => text,
        Err(err) if args.continue_on_error => {
            warn!("skipping {}: {}", file.display(), err);
            return Ok(FileOutcome {
                file,
                analysis: None,
                failure: Some(err.to_string()),
            });
        }
        Err(err) => anyhow::bail!("cannot read {}: {}", file.display(), err),
    };

    let analysis = engine.parse_text(&ParseRequest::from_text(text));

    if let Some(dir) = &args.output_dir {
        let stem = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("document");
        let target = dir.join(format!("{}.{}", stem, extension_for(args.format)));
        fs::write(&target, format_response(&analysis, args.format)?)?;
        debug!("wrote {}", target.display());
    }

    Ok(FileOutcome {
        file,
        analysis: Some(analysis),
        failure: None,
    })
}

fn extension_for(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    }
}

fn report(outcomes: &[FileOutcome], started: Instant) {
    let failed = outcomes.iter().filter(|o| o.failure.is_some()).count();
    println!();
    println!(
        "{} {} of {} document(s) analyzed in {:.1?}",
        style("✓").green(),
        outcomes.len() - failed,
        outcomes.len(),
        started.elapsed()
    );
    for outcome in outcomes.iter().filter(|o| o.failure.is_some()) {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            outcome.file.display(),
            outcome.failure.as_deref().unwrap_or("unknown error")
        );
    }
}

fn write_summary(path: &Path, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "filename",
        "status",
        "document_type",
        "date",
        "counterparty",
        "best_journal",
        "best_confidence",
        "suggestions",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();
        let row = match &outcome.analysis {
            Some(analysis) => {
                let best = analysis.suggestions.first();
                vec![
                    filename,
                    "success".to_string(),
                    format!("{:?}", analysis.detected.doc_type),
                    analysis.detected.date.clone().unwrap_or_default(),
                    analysis.detected.counterparty.clone().unwrap_or_default(),
                    best.map(|s| s.journal.as_str().to_string())
                        .unwrap_or_default(),
                    best.map(|s| format!("{:.2}", s.confidence))
                        .unwrap_or_default(),
                    analysis.suggestions.len().to_string(),
                    String::new(),
                ]
            }
            None => {
                let mut row = vec![filename, "error".to_string()];
                row.extend(std::iter::repeat_n(String::new(), 6));
                row.push(outcome.failure.clone().unwrap_or_default());
                row
            }
        };
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
