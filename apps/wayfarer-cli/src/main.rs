//! # Wayfarer CLI
//!
//! Lists travel packages from a SQLite store.
//!
//! ## Usage
//! ```text
//! wayfarer list                                   # everything, by package name
//! wayfarer list --country France --min-stars 4    # filters are independent
//! wayfarer list --max-price 500.00 --format table
//! wayfarer check                                  # can the store be reached?
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (defaults ◄ TOML ◄ env ◄ flags)
//! 3. Initialize tracing (stderr)
//! 4. Open the pool, run the command, close the pool

mod config;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wayfarer_core::{Money, PackageListingFilter};
use wayfarer_db::Database;

use crate::config::{LogFormat, WayfarerConfig};
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "wayfarer", version, about = "List travel packages")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite URL; overrides config file and WAYFARER_DATABASE_URL.
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List packages, ascending by name.
    List(ListArgs),

    /// Check that the store is reachable.
    Check,
}

#[derive(Debug, clap::Args)]
struct ListArgs {
    /// Country name contains this text.
    #[arg(long)]
    country: Option<String>,

    /// City name contains this text.
    #[arg(long)]
    city: Option<String>,

    /// Minimum hotel star rating.
    #[arg(long)]
    min_stars: Option<i32>,

    /// Maximum price per person, e.g. 500.00.
    #[arg(long)]
    max_price: Option<Money>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl ListArgs {
    fn filter(&self) -> PackageListingFilter {
        PackageListingFilter::from_parts(
            self.country.clone(),
            self.city.clone(),
            self.min_stars,
            self.max_price,
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        WayfarerConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = cli.database_url.clone() {
        config.database.url = url;
    }

    init_tracing(config.logging.format);

    let db = Database::new(config.db_config())
        .await
        .context("Failed to open database")?;

    let result = run(&db, cli.command).await;
    db.close().await;
    result
}

async fn run(db: &Database, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List(args) => {
            let filter = args.filter();
            let rows = db
                .packages()
                .list_packages(&filter)
                .await
                .context("Failed to list packages")?;

            info!(count = rows.len(), "Listing complete");
            println!("{}", output::render(&rows, args.format)?);
        }
        Command::Check => {
            if !db.health_check().await {
                anyhow::bail!("Database is not responding");
            }
            println!("ok");
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
///
/// Default level is INFO, overridable with `RUST_LOG`.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_args_build_filter() {
        let cli = Cli::parse_from([
            "wayfarer",
            "list",
            "--country",
            "France",
            "--city",
            "",
            "--max-price",
            "500.00",
        ]);

        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        let filter = args.filter();

        assert_eq!(filter.country(), Some("France"));
        assert_eq!(filter.city(), None);
        assert_eq!(filter.min_stars(), None);
        assert_eq!(filter.max_price(), Some(Money::from_cents(50000)));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let result = Cli::try_parse_from(["wayfarer", "list", "--max-price", "12.345"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_database_url() {
        let cli = Cli::parse_from(["wayfarer", "check", "--database-url", "sqlite://x.db"]);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite://x.db"));
        assert!(matches!(cli.command, Command::Check));
    }
}
