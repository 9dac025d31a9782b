use std::path::PathBuf;

mod config;
mod db;
mod error;
mod filter;
mod models;
mod sources;
mod web;

use config::{Config, SourceConfig};
use db::Repository;
use error::Result;
use models::NewOpportunity;
use web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (info for this crate unless RUST_LOG says otherwise)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("opportunity_board=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let config_path = flag_value(&args, "--config")?.map(PathBuf::from);
    let import_path = flag_value(&args, "--import")?.map(PathBuf::from);
    let seed_only = args.iter().any(|a| a == "--seed");

    // Load configuration
    let config = Config::load(config_path.as_deref())?;

    // If import path provided, copy the CSV into the store and exit
    if let Some(path) = import_path {
        let repository = open_store(&config).await?;
        let bytes = std::fs::read(&path)?;
        let opportunities: Vec<NewOpportunity> = sources::parse_csv(&bytes)?
            .into_iter()
            .map(NewOpportunity::from)
            .collect();
        let inserted = repository.insert_many(opportunities).await?;
        println!("Imported {} opportunities from {:?}", inserted, path);
        return Ok(());
    }

    // If --seed, populate an empty store and exit
    if seed_only {
        let repository = open_store(&config).await?;
        let inserted = repository.seed_if_empty().await?;
        println!(
            "Seeded {} opportunities ({} total)",
            inserted,
            repository.count().await?
        );
        return Ok(());
    }

    let state = AppState::new(&config).await?;
    web::listen(&config.listen_addr, state).await
}

fn flag_value(args: &[String], flag: &str) -> Result<Option<String>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.clone())),
            None => Err(anyhow::anyhow!("{} expects a path", flag).into()),
        },
        None => Ok(None),
    }
}

async fn open_store(config: &Config) -> Result<Repository> {
    match &config.source {
        SourceConfig::Sqlite { db_path, .. } => Repository::new(db_path).await,
        _ => Err(anyhow::anyhow!("--seed and --import need a sqlite source in the config").into()),
    }
}
