//! Config command - inspect and create configuration files.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use ecrit_core::EcritConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration the engine would run with
    Show,

    /// Write a configuration file with the default settings
    Init(InitArgs),

    /// Print the configuration file location
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Where to write the file (default: the standard location)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_override: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_override),
        ConfigCommand::Init(init) => init_file(init, config_override),
        ConfigCommand::Path => path(config_override),
    }
}

/// The file the engine reads: an explicit --config wins over the per-user
/// standard location.
fn config_file(config_override: Option<&str>) -> PathBuf {
    match config_override {
        Some(path) => PathBuf::from(path),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ecrit")
            .join("config.json"),
    }
}

fn show(config_override: Option<&str>) -> anyhow::Result<()> {
    let file = config_file(config_override);
    let config = if file.exists() {
        EcritConfig::from_file(&file)?
    } else {
        println!(
            "{} {} does not exist; showing the defaults.",
            style("ℹ").blue(),
            file.display()
        );
        EcritConfig::default()
    };
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_file(args: InitArgs, config_override: Option<&str>) -> anyhow::Result<()> {
    let target = args
        .output
        .unwrap_or_else(|| config_file(config_override));
    if target.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            target.display()
        );
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    EcritConfig::default().save(&target)?;
    println!(
        "{} Wrote default configuration to {}",
        style("✓").green(),
        target.display()
    );
    Ok(())
}

fn path(config_override: Option<&str>) -> anyhow::Result<()> {
    let file = config_file(config_override);
    if file.exists() {
        println!("{} ({})", file.display(), style("exists").green());
    } else {
        println!("{} ({})", file.display(), style("missing").yellow());
        println!("'ecrit config init' writes one with the default settings.");
    }
    Ok(())
}
