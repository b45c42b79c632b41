#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, ParseInput, ParseStrategy, ServeInput,
    ServeStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "ordex")]
#[command(about = "Extract product quantities from free-text orders", long_about = None)]
struct Cli {
    /// Config file (default: ~/ordex/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an order from text
    Parse {
        /// Catalog product name (repeatable)
        #[arg(short = 'p', long = "product")]
        products: Vec<String>,

        /// File with one catalog product per line
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Order text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// Run the HTTP parser API
    Serve {
        /// Address to bind, overrides the config
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config
        #[arg(long)]
        port: Option<u16>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            products,
            catalog,
            text,
            pretty,
        } => {
            ParseStrategy
                .execute(ParseInput {
                    config_path: cli.config,
                    products,
                    catalog,
                    text,
                    pretty,
                })
                .await
        }
        Commands::Serve { host, port } => {
            ServeStrategy
                .execute(ServeInput {
                    config_path: cli.config,
                    host,
                    port,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(cli.config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
