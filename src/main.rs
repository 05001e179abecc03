use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kontrast::models::{ExperimentConfig, SessionRecord};
use kontrast::services::{export, generator};

#[derive(Parser)]
#[command(name = "kontrast")]
#[command(about = "Trial generation engine for simultaneous color contrast experiments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default experiment configuration to a YAML file
    Init {
        /// Output configuration file path
        #[arg(short, long, default_value = "experiment.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
    /// Show the per-axis breakdown and total trial count for a configuration
    Count {
        /// Experiment configuration YAML
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Generate the trial sequence as JSON
    Generate {
        /// Experiment configuration YAML
        #[arg(short, long)]
        config: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the shuffle, for reproducible randomized sequences
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Flatten a recorded session into the tabular CSV export
    Export {
        /// Session record JSON produced by the presentation layer
        #[arg(short, long)]
        results: PathBuf,

        /// Output CSV file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kontrast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output, force } => run_init_command(&output, force),
        Commands::Count { config } => run_count_command(&config),
        Commands::Generate {
            config,
            output,
            seed,
            pretty,
        } => run_generate_command(&config, output.as_deref(), seed, pretty),
        Commands::Export { results, output } => run_export_command(&results, &output),
    }
}

fn load_config(path: &Path) -> anyhow::Result<ExperimentConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ExperimentConfig::from_yaml_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn run_init_command(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let yaml = ExperimentConfig::default()
        .to_yaml_string()
        .context("serializing default config")?;
    std::fs::write(output, yaml)
        .with_context(|| format!("writing config {}", output.display()))?;

    tracing::info!(path = %output.display(), "wrote default configuration");
    Ok(())
}

fn run_count_command(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let counts = generator::count_trials(&config)?;

    println!("target H:        {}", counts.target_h);
    println!("target S:        {}", counts.target_s);
    println!("target L:        {}", counts.target_l);
    println!("bgA delta H:     {}", counts.bg_a_delta_h);
    println!("bgB H:           {}", counts.bg_b_h);
    println!("bgB S:           {}", counts.bg_b_s);
    println!("bgB L:           {}", counts.bg_b_l);
    println!("total trials:    {}", counts.total());
    Ok(())
}

fn run_generate_command(
    config_path: &Path,
    output: Option<&Path>,
    seed: Option<u64>,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let trials = match seed {
        Some(seed) => generator::generate_seeded(&config, seed)?,
        None => generator::generate(&config)?,
    };
    tracing::info!(trials = trials.len(), "generated trial sequence");

    let json = if pretty {
        serde_json::to_string_pretty(&trials)?
    } else {
        serde_json::to_string(&trials)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing trials {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote trial sequence");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_export_command(results_path: &Path, output: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(results_path)
        .with_context(|| format!("reading session record {}", results_path.display()))?;
    let session: SessionRecord = serde_json::from_str(&content)
        .with_context(|| format!("parsing session record {}", results_path.display()))?;

    let csv = export::session_to_csv(&session);
    std::fs::write(output, csv)
        .with_context(|| format!("writing export {}", output.display()))?;

    tracing::info!(
        rows = session.results.len(),
        path = %output.display(),
        "wrote session export"
    );
    Ok(())
}
