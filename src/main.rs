use clap::{Parser, Subcommand};
use recursica::audit::SnapshotEnvironment;
use recursica::{Mode, RecheckTrigger, RecursicaBuilder, RecursicaError};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Resolve design-token references, audit CSS variables, and recheck palette contrast.
#[derive(Parser, Debug)]
#[command(name = "recursica", version, about)]
struct Cli {
    /// Token document (JSON)
    #[arg(long, global = true)]
    tokens: Option<PathBuf>,

    /// Theme / brand document (JSON)
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    /// UI-kit document (JSON)
    #[arg(long = "ui-kit", global = true)]
    ui_kit: Option<PathBuf>,

    /// Resolver and audit configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Theme mode used for brand references: light or dark
    #[arg(long, global = true)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the CSS variable name and resolved value of a reference
    Resolve {
        reference: String,
        /// Only print the CSS variable name
        #[arg(long)]
        name_only: bool,
    },
    /// Audit a captured style environment snapshot for broken references
    Audit {
        snapshot: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recompute palette on-tones
    Recheck {
        /// Only recheck this palette family
        #[arg(long)]
        family: Option<String>,
        /// Write the updated theme document to this path
        #[arg(long)]
        write: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn builder(cli: &Cli) -> Result<RecursicaBuilder, RecursicaError> {
    let mut builder = RecursicaBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if let Some(path) = &cli.tokens {
        builder = builder.with_tokens_file(path)?;
    }
    if let Some(path) = &cli.theme {
        builder = builder.with_theme_file(path)?;
    }
    if let Some(path) = &cli.ui_kit {
        builder = builder.with_ui_kit_file(path)?;
    }
    if let Some(mode) = cli.mode {
        builder = builder.with_mode(mode);
    }
    Ok(builder)
}

fn main() -> Result<(), RecursicaError> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Resolve { reference, name_only } => {
            let engine = builder(&cli)?.build()?;
            match engine.css_var(reference) {
                Some(name) => println!("{}", name),
                None => eprintln!("No CSS variable for '{}'", reference),
            }
            if !name_only {
                let value = engine.try_resolve_value(&Value::String(reference.clone()))?;
                match value {
                    Value::String(s) => println!("{}", s),
                    other => println!("{}", other),
                }
            }
        }
        Command::Audit { snapshot, json } => {
            let source = fs::read_to_string(snapshot)?;
            let env = SnapshotEnvironment::from_json(&source)?;
            let mut config = recursica::RecursicaConfig::default();
            if let Some(path) = &cli.config {
                config = recursica::RecursicaConfig::from_json(&fs::read_to_string(path)?)?;
            }
            let report = recursica::audit::find_broken_references(&env, &config.audit);
            if *json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report);
            }
        }
        Command::Recheck { family, write, json } => {
            let engine = builder(&cli)?.build()?;
            let trigger = match family {
                Some(family) => RecheckTrigger::FamilyChanged(family.clone()),
                None => RecheckTrigger::CoreColorChanged,
            };
            let report = engine.recheck(&trigger)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
            if let Some(path) = write {
                let theme = engine.documents().theme.clone().unwrap_or(Value::Null);
                fs::write(path, serde_json::to_string_pretty(&theme)?)?;
                log::info!("Wrote updated theme to {}", path.display());
            }
        }
    }
    Ok(())
}
