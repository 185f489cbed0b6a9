//! Analyze command - propose entries for a single document text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use ecrit_core::{
    DocumentAnalyzer, EcritConfig, ParseRequest, ParseResponse, SuggestionEngine, validate_lines,
};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show confidence scores per suggestion
    #[arg(long)]
    show_confidence: bool,

    /// Report suggestions whose lines do not balance
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per entry line)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!(
        "Analyzing {} characters from {}",
        text.len(),
        args.input.display()
    );

    let engine = engine_from(&config);
    let response = engine.parse_text(&ParseRequest::from_text(text));

    if args.validate {
        report_validation(&response);
    }

    let output = format_response(&response, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        for suggestion in &response.suggestions {
            println!(
                "{} {} confidence: {:.0}%",
                style("ℹ").blue(),
                suggestion.journal.as_str(),
                suggestion.confidence * 100.0
            );
        }
    }

    Ok(())
}

/// Load configuration, falling back to defaults when no file is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EcritConfig> {
    Ok(match config_path {
        Some(path) => EcritConfig::from_file(Path::new(path))?,
        None => EcritConfig::default(),
    })
}

/// Build an engine from configuration.
pub fn engine_from(config: &EcritConfig) -> SuggestionEngine {
    SuggestionEngine::new().with_analyzer(
        DocumentAnalyzer::new()
            .with_scan_lines(config.extraction.counterparty_scan_lines)
            .with_amount_window(config.extraction.amount_window),
    )
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

fn report_validation(response: &ParseResponse) {
    for suggestion in &response.suggestions {
        if let Err(issue) = validate_lines(&suggestion.lines) {
            eprintln!(
                "{} {} entry: {}",
                style("⚠").yellow(),
                suggestion.journal.as_str(),
                issue
            );
        }
    }
}

/// Render a response in the requested output format.
pub fn format_response(response: &ParseResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Csv => format_csv(response),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_csv(response: &ParseResponse) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "journal",
        "piece",
        "date",
        "account",
        "label",
        "debit",
        "credit",
        "confidence",
    ])?;

    for suggestion in &response.suggestions {
        for line in &suggestion.lines {
            let debit = line.debit.to_string();
            let credit = line.credit.to_string();
            let confidence = format!("{:.2}", suggestion.confidence);
            wtr.write_record([
                suggestion.journal.as_str(),
                suggestion.piece.as_str(),
                suggestion.date.as_str(),
                line.account.as_str(),
                line.label.as_str(),
                debit.as_str(),
                credit.as_str(),
                confidence.as_str(),
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(response: &ParseResponse) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {:?}\n", response.detected.doc_type));
    if let Some(date) = &response.detected.date {
        output.push_str(&format!("Date: {}\n", date));
    }
    if let Some(counterparty) = &response.detected.counterparty {
        output.push_str(&format!("Counterparty: {}\n", counterparty));
    }
    output.push('\n');

    for suggestion in &response.suggestions {
        output.push_str(&format!(
            "[{}] piece {} on {} (confidence {:.2})\n",
            suggestion.journal.as_str(),
            suggestion.piece,
            suggestion.date,
            suggestion.confidence
        ));
        for line in &suggestion.lines {
            output.push_str(&format!(
                "  {:<6} {:<24} D {:>12}  C {:>12}\n",
                line.account, line.label, line.debit, line.credit
            ));
        }
        output.push('\n');
    }

    output
}
