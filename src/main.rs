use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use labour_cost_engine::api::{AppState, create_router};
use labour_cost_engine::config::RatesLoader;
use labour_cost_engine::logging;
use labour_cost_engine::store::{InMemoryProfileStore, JsonFileProfileStore};

/// Serve the labour cost engine over HTTP.
///
/// Without `--config` the built-in 2025 Ontario rates are used.
#[derive(Parser, Debug)]
#[command(name = "labour-cost-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Rate configuration directory (holding jurisdiction.yaml and rates/)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file holding saved employee profiles
    #[arg(short, long, default_value = "employee_profiles.json")]
    profiles: PathBuf,

    /// Keep profiles in memory only
    #[arg(long, default_value_t = false)]
    ephemeral: bool,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let rates = match &args.config {
        Some(dir) => RatesLoader::load(dir)
            .with_context(|| format!("Failed to load rate configuration: {}", dir.display()))?,
        None => RatesLoader::builtin(),
    };
    info!(
        jurisdiction = %rates.jurisdiction().code,
        rate_sets = rates.rate_sets().len(),
        "Rates ready"
    );

    let state = if args.ephemeral {
        info!("Profiles kept in memory");
        AppState::new(rates, InMemoryProfileStore::new())
    } else {
        info!(path = %args.profiles.display(), "Profiles stored on disk");
        AppState::new(rates, JsonFileProfileStore::new(&args.profiles))
    };

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!(addr = %args.bind, "labour-cost-server listening");

    axum::serve(listener, create_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
