//! cellsim CLI
//!
//! Runs the cell treatment simulation and prints the before/after summary.

mod report;

use anyhow::{bail, Context, Result};
use cell_core::{pipeline, PipelineOutput, SimulationConfig, Table};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellsim")]
#[command(about = "Simulate a cell population treatment and summarize the effect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a population and run the full pipeline
    Run {
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// YAML or JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the phased table as CSV
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Print the summary as JSON instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Treat an existing before-table CSV
    Treat {
        /// Input CSV (identifier,cell_type,division_rate,gene_expression_level)
        #[arg(long)]
        input: PathBuf,

        /// YAML or JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the phased table as CSV
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Print the summary as JSON instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as YAML
    Config {
        #[arg(long, value_enum, default_value_t = Preset::Standard)]
        preset: Preset,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Standard,
    Small,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            config,
            export_csv,
            json,
        } => {
            let cfg = load_config(config.as_deref())?;
            let out = pipeline::run_seeded(&cfg, seed).context("Simulation failed")?;
            emit(&out, export_csv.as_deref(), json)?;
        }

        Commands::Treat {
            input,
            config,
            export_csv,
            json,
        } => {
            let cfg = load_config(config.as_deref())?;
            let file = File::open(&input)
                .with_context(|| format!("Failed to open CSV file: {}", input.display()))?;
            let before = Table::read_csv(file)
                .with_context(|| format!("Failed to parse CSV file: {}", input.display()))?;
            let out = pipeline::treat_table(&cfg, before).context("Treatment failed")?;
            emit(&out, export_csv.as_deref(), json)?;
        }

        Commands::Config { preset } => {
            let cfg = match preset {
                Preset::Standard => SimulationConfig::standard(),
                Preset::Small => SimulationConfig::small(),
            };
            print!("{}", cfg.to_yaml_string()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    let Some(path) = path else {
        return Ok(SimulationConfig::default());
    };

    let src = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let cfg = parse_config(ext, &src)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    tracing::info!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

/// Decode a config document by file extension.
fn parse_config(ext: &str, src: &str) -> Result<SimulationConfig> {
    let cfg = match ext {
        "yaml" | "yml" => SimulationConfig::from_yaml_str(src)?,
        "json" => SimulationConfig::from_json_str(src)?,
        other => bail!("Unsupported config extension {:?}", other),
    };
    Ok(cfg)
}

fn emit(out: &PipelineOutput, export_csv: Option<&Path>, json: bool) -> Result<()> {
    if let Some(path) = export_csv {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        out.merged
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = out.merged.len(), "phased table exported");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&out.summary)?);
    } else {
        let mut text = String::new();
        report::write_summary(&mut text, &out.summary)?;
        print!("{}", text);
    }
    Ok(())
}
