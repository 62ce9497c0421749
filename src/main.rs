//! Gastos - personal expense ledger
//!
//! Main entry point: runs the MCP server on stdio, or manipulates the ledger
//! directly from the command line.

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::helpers::OutputFormat;
use gastos_core::{recency::DEFAULT_DAYS, GastosConfig};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gastos")]
#[command(about = "Personal expense ledger exposed as an MCP server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Ledger CSV path (overrides GASTOS_DATA_PATH env var and default)
    #[arg(long)]
    data_path: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server (stdio mode), the default
    Serve,

    /// Record an expense
    Add {
        /// Date in YYYY-MM-DD format
        fecha: String,

        /// Category
        categoria: String,

        /// Amount spent
        cantidad: f64,

        /// Payment method
        metodo_pago: String,
    },

    /// List every recorded expense
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List expenses from the last N days
    Recent {
        /// Number of days to look back
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the recent-expenses summary prompt
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "gastos={level},gastos_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the MCP protocol
        .init();

    debug!("Gastos v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = GastosConfig::resolve(cli.data_path).context("failed to resolve ledger path")?;
    let ledger = config.data_path().display().to_string();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => cli::serve::handle(&config)
            .await
            .with_context(|| format!("MCP server failed (ledger {})", ledger)),
        Commands::Add {
            fecha,
            categoria,
            cantidad,
            metodo_pago,
        } => cli::add::handle(&config, fecha, categoria, cantidad, metodo_pago)
            .await
            .with_context(|| format!("failed to record expense in {}", ledger)),
        Commands::List { format } => cli::list::handle(&config, format)
            .await
            .with_context(|| format!("failed to read {}", ledger)),
        Commands::Recent { days, format } => cli::recent::handle(&config, days, format)
            .await
            .with_context(|| format!("failed to list recent expenses from {}", ledger)),
        Commands::Summary => cli::summary::handle(&config)
            .await
            .context("failed to build summary prompt"),
    }
}
