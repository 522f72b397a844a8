use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rtrwh_api::{build_engine, config::RtrwhConfig, create_app, tracing_setup, validation};
use rtrwh_core::types::{CalculationType, UserInput};
use tracing::info;

#[derive(Parser)]
#[command(name = "rtrwh", version, about = "Rooftop rainwater harvesting and recharge estimator")]
struct Cli {
    /// Configuration file (overrides RTRWH_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Calculate one submission read from a JSON file and print the results
    Calculate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "rainwater")]
        mode: CalculationType,
    },
    /// Print the city reference table
    Cities,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RtrwhConfig::load_from(path)?.apply_env_overrides(),
        None => RtrwhConfig::load()?,
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Calculate { input, mode } => calculate(&config, &input, mode),
        Command::Cities => cities(&config),
    }
}

async fn serve(config: RtrwhConfig) -> anyhow::Result<()> {
    tracing_setup::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment.env_type,
        config_file = ?config.source,
        "Starting RTRWH estimator"
    );

    let app = create_app(&config)?;
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Web server started");
    axum::serve(listener, app).await?;

    Ok(())
}

fn calculate(config: &RtrwhConfig, path: &Path, mode: CalculationType) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
    let input: UserInput = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse input file '{}'", path.display()))?;
    validation::validate_input(&input)?;

    let engine = build_engine(config)?;
    let results = engine.calculate(&input, mode)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn cities(config: &RtrwhConfig) -> anyhow::Result<()> {
    let engine = build_engine(config)?;
    println!(
        "{:<20} {:<16} {:>6} {:>10} {:>8}  {}",
        "CITY", "STATE", "PIN", "RAIN(mm)", "GW(m)", "AQUIFER"
    );
    for city in engine.reference_data().cities() {
        println!(
            "{:<20} {:<16} {:>6} {:>10.0} {:>8.1}  {}",
            city.city,
            city.state,
            city.pincode_prefix,
            city.annual_rainfall,
            city.groundwater_depth,
            city.aquifer_type
        );
    }
    Ok(())
}
