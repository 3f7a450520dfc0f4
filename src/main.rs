//! insightnet - demo driver for the professional network engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use insightnet::{InsightId, Network, NetworkConfig, UserId};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "insightnet")]
#[command(version)]
#[command(about = "In-memory professional network engine")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INSIGHTNET_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the reference scenario and print the results
    Demo,

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("insightnet={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match cli.config {
        Some(path) => NetworkConfig::from_file(&path)?,
        None => {
            let path = NetworkConfig::default_path();
            if path.exists() {
                NetworkConfig::from_file(&path)?
            } else {
                NetworkConfig::default()
            }
        }
    };

    match cli.command {
        Commands::Demo => run_demo(config).await?,
        Commands::Config { default } => show_config(if default { None } else { Some(&config) })?,
    }

    Ok(())
}

async fn run_demo(config: NetworkConfig) -> Result<()> {
    let network = Network::new(config);

    for (id, name) in [(1, "Financial_Guru"), (2, "Market_Analyst"), (3, "Tech_Investor")] {
        network.register(UserId(id), name).await?;
    }
    network.follow(UserId(3), UserId(1)).await?;
    network.follow(UserId(3), UserId(2)).await?;

    let posts = [
        (1, 101, "Inflation data suggests a rate pause"),
        (2, 102, "Energy sector breaking out"),
        (3, 103, "Cloud spending is re-accelerating"),
        (1, 104, "Treasury curve steepening"),
        (2, 105, "Retail earnings beat expectations"),
    ];
    for (author, id, content) in posts {
        network.publish(UserId(author), InsightId(id), content).await?;
    }

    let feed = network.feed(UserId(3)).await?;
    println!("Feed for Tech_Investor:");
    for id in &feed {
        let insight = network.insight(*id).await?;
        let author = network.user(insight.author_id).await?;
        println!("  [{}] {}: {}", id, author.name, insight.content);
    }

    println!();
    network.connect(UserId(3), UserId(1)).await?;
    println!("Connection request 3 -> 1 sent");
    match network.connect(UserId(3), UserId(1)).await {
        Ok(()) => println!("Second request unexpectedly accepted"),
        Err(e) => println!("Second request rejected: {} ({})", e, e.code()),
    }

    let accepted = network.accept(UserId(3), UserId(1)).await?;
    println!("Connection 3 -> 1 is now {:?}", accepted.status);

    Ok(())
}

fn show_config(config: Option<&NetworkConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
