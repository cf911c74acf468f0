//! Paper Parser stub CLI
//!
//! # Commands
//!
//! ```bash
//! paper-parser serve                      # Start stub server (port 5000)
//! paper-parser serve --fixture paper.json # Serve a custom fixture
//! paper-parser serve --fail-with "boom"   # Make every upload fail
//! paper-parser sample                     # Print the built-in fixture
//! paper-parser check paper.json           # Validate a fixture file
//! ```

use clap::{Parser, Subcommand};
use paper_parser::{Fixture, ServerConfig, DEFAULT_PORT};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paper-parser")]
#[command(about = "Stub server for the Past Paper Parser frontend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PAPER_PARSER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// JSON fixture to serve (default: built-in sample paper)
        #[arg(short, long, env = "PAPER_PARSER_FIXTURE")]
        fixture: Option<PathBuf>,

        /// Simulated processing time in milliseconds
        #[arg(long, env = "PAPER_PARSER_DELAY_MS", default_value_t = 0)]
        delay_ms: u64,

        /// Fail every upload with this message
        #[arg(long)]
        fail_with: Option<String>,
    },

    /// Print the built-in sample fixture
    Sample {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a fixture file
    Check {
        /// Fixture JSON file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            fixture,
            delay_ms,
            fail_with,
        } => {
            cmd_serve(ServerConfig {
                port,
                fixture,
                delay: Duration::from_millis(delay_ms),
                fail_with,
            })
            .await
        }

        Commands::Sample { output } => cmd_sample(output.as_deref()),

        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        tracing::error!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    paper_parser::server::start_server(config).await?;
    Ok(())
}

fn cmd_sample(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(Fixture::sample().document())?;
    write_output(&json, output)
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = Fixture::load(input)?;
    println!(
        "✅ {} is a valid fixture ({} questions)",
        input.display(),
        fixture.question_count()
    );
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            tracing::info!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
