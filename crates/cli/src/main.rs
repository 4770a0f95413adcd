//! Tienda CLI - data seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Populate the catalog with sample products
//! tienda-cli seed --data-dir data --count 5
//!
//! # Show collection statistics
//! tienda-cli inspect --data-dir data
//! ```
//!
//! # Commands
//!
//! - `seed` - Insert sample products through the catalog
//! - `inspect` - Report record counts for both collections
//!
//! Both commands go through the store crate; nothing here opens the
//! collection files directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tienda-cli")]
#[command(author, version, about = "Tienda CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert sample products through the catalog
    Seed {
        /// Directory holding the collection files
        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// How many sample products to insert
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },
    /// Report record counts for both collections
    Inspect {
        /// Directory holding the collection files
        #[arg(short, long, default_value = "data")]
        data_dir: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, count } => commands::seed::run(&data_dir, count).await?,
        Commands::Inspect { data_dir } => commands::inspect::run(&data_dir).await?,
    }
    Ok(())
}
