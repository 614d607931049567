//! Trellis CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Tech tree synchronization and enhancement engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the remote tech tree and print a summary
    Show {
        /// Ledger gateway base URL
        #[arg(short, long)]
        ledger: String,
    },
    /// Run the enhancement walk against the remote tree
    Enhance {
        /// Ledger gateway base URL
        #[arg(short, long)]
        ledger: String,

        /// Expansion service: an HTTP base URL, or "local"
        #[arg(short, long, default_value = "local")]
        service: String,

        /// Maximum number of expansions for this walk
        #[arg(short, long, default_value = "1")]
        iterations: u32,

        /// Seed node id (defaults to the first enhanceable node)
        #[arg(short, long)]
        node: Option<String>,

        /// Title of the tree's overall objective
        #[arg(short, long)]
        objective: Option<String>,

        /// Submit the resulting overlay to the ledger afterwards
        #[arg(short, long)]
        publish: bool,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "trellis={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Show { ledger } => commands::show(ledger).await,
        Commands::Enhance {
            ledger,
            service,
            iterations,
            node,
            objective,
            publish,
        } => commands::enhance(ledger, service, iterations, node, objective, publish).await,
        Commands::Version => {
            println!("Trellis v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
