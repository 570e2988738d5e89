use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorekeeper::api::state::AppState;
use scorekeeper::calculate::{
    compute_avg_rounds, compute_global_leader_stats, compute_placements, compute_standings,
    compute_trends,
};
use scorekeeper::config::AppConfig;
use scorekeeper::models::{GlobalLeaderSort, Leader, Match, MatchResult, Player};
use scorekeeper::storage::{
    load_snapshot, EntityType, JsonlReader, JsonlWriter, StorageConfig,
};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Board-game group tracker with standings and analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute derived analytics for one group and print them as JSON
    Derive {
        /// Group to analyze
        #[arg(long)]
        group: String,

        /// Reports to run (comma-separated: standings, trends, placements,
        /// leaders, rounds); all of them by default
        #[arg(long)]
        report: Option<String>,
    },

    /// Append records from external JSONL files into a group's data lake
    Import {
        /// Group to import into
        #[arg(long)]
        group: String,

        /// JSONL file of matches
        #[arg(long)]
        matches: Option<PathBuf>,

        /// JSONL file of results
        #[arg(long)]
        results: Option<PathBuf>,

        /// JSONL file of players
        #[arg(long)]
        players: Option<PathBuf>,

        /// JSONL file of leaders
        #[arg(long)]
        leaders: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting scorekeeper v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(std::path::Path::new(&cli.config))?;
    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState {
                storage: Arc::new(storage),
            };
            let app = scorekeeper::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Standings API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Derive { group, report } => {
            let snapshot = load_snapshot(&storage, &group)?;
            tracing::info!(
                "Loaded {} matches / {} results for group {}",
                snapshot.matches.len(),
                snapshot.results.len(),
                group
            );

            let requested = report.unwrap_or_else(|| {
                "standings,trends,placements,leaders,rounds".to_string()
            });

            let mut output = serde_json::Map::new();
            for name in requested.split(',').map(str::trim) {
                match name {
                    "standings" => {
                        let standings =
                            compute_standings(&snapshot.players, &snapshot.results)?;
                        output.insert(name.to_string(), serde_json::to_value(standings)?);
                    }
                    "trends" => {
                        let trends = compute_trends(&snapshot)?;
                        output.insert(name.to_string(), serde_json::to_value(trends)?);
                    }
                    "placements" => {
                        let placements =
                            compute_placements(&snapshot.players, &snapshot.results)?;
                        output.insert(name.to_string(), serde_json::to_value(placements)?);
                    }
                    "leaders" => {
                        let leaders = compute_global_leader_stats(
                            &snapshot.leaders,
                            &snapshot.results,
                            GlobalLeaderSort::MostUsed,
                        )?;
                        output.insert(name.to_string(), serde_json::to_value(leaders)?);
                    }
                    "rounds" => {
                        let rounds = compute_avg_rounds(&snapshot.matches, &snapshot.results);
                        output.insert(name.to_string(), serde_json::to_value(rounds)?);
                    }
                    other => bail!(
                        "Unknown report: {} (expected standings, trends, placements, leaders, rounds)",
                        other
                    ),
                }
            }

            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(output))?
            );
        }
        Commands::Import {
            group,
            matches,
            results,
            players,
            leaders,
        } => {
            if let Some(path) = matches {
                let count = import_file::<Match>(&storage, EntityType::Match, &group, &path)?;
                println!("Imported {} matches", count);
            }
            if let Some(path) = results {
                let count =
                    import_file::<MatchResult>(&storage, EntityType::Result, &group, &path)?;
                println!("Imported {} results", count);
            }
            if let Some(path) = players {
                let count = import_file::<Player>(&storage, EntityType::Player, &group, &path)?;
                println!("Imported {} players", count);
            }
            if let Some(path) = leaders {
                let count = import_file::<Leader>(&storage, EntityType::Leader, &group, &path)?;
                println!("Imported {} leaders", count);
            }
        }
    }

    Ok(())
}

/// Parse one external JSONL file and append its entities to the group.
fn import_file<T: Serialize + DeserializeOwned>(
    storage: &StorageConfig,
    entity: EntityType,
    group: &str,
    path: &PathBuf,
) -> Result<usize> {
    let reader: JsonlReader<T> = JsonlReader::new(path.clone());
    if !reader.exists() {
        bail!("File not found: {}", path.display());
    }

    let entities = reader.read_all()?;
    let count = JsonlWriter::for_entity(storage, entity, group).append_batch(&entities)?;
    Ok(count)
}
