use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ferrite_cost::{evaluate, CostKind, EvalConfig};

/// Evaluates an output-layer cost, its gradient and the L2 penalty for one
/// batch described in a JSON file, and prints the report as JSON.
#[derive(Parser)]
#[command(name = "ferrite-cost", version, long_about = None)]
struct Cli {
    /// JSON file with `cost`, `labels`, `pre_activation` and optional `params`, `lambd`
    input: PathBuf,

    /// Override the pairing named in the file
    #[arg(long, value_enum)]
    cost: Option<CostKind>,

    /// Override the L2 regularization strength
    #[arg(long)]
    lambd: Option<f64>,

    /// Log filter (e.g. info, debug, ferrite_cost=trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let mut config = EvalConfig::load_json(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    if let Some(cost) = cli.cost {
        config.cost = cost;
    }
    if let Some(lambd) = cli.lambd {
        config.lambd = lambd;
    }

    let report = evaluate(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
