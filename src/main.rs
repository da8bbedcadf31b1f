//! Sitemap Frontier main entry point
//!
//! Command-line access to the sitemap operations. Each subcommand prints
//! its response envelope as JSON on stdout; logs go to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sitemap_frontier::config::{load_config_with_hash, Config};
use sitemap_frontier::frontier::FrontierRules;
use sitemap_frontier::service::{DiscoverInput, Envelope, FrontierInput, ListInput};
use sitemap_frontier::SitemapService;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Sitemap Frontier: sitemap discovery and crawl-frontier assembly
#[derive(Parser, Debug)]
#[command(name = "sitemap-frontier")]
#[command(version)]
#[command(about = "Discover sitemaps and build crawl frontiers", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find all sitemaps for a domain
    Discover {
        /// Domain or URL, e.g. example.com
        url: String,
    },

    /// List one page of entries from a sitemap or sitemap index
    List {
        /// Absolute URL of the sitemap document
        sitemap_url: String,

        /// Entries per page (1-1000)
        #[arg(long)]
        limit: Option<usize>,

        /// Cursor returned by a previous call
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Build a filtered, deduplicated crawl frontier
    Frontier {
        /// Seed domain or URL
        seed_url: String,

        /// Glob a URL must match (repeatable; any match passes)
        #[arg(long = "include", value_name = "GLOB")]
        include: Vec<String>,

        /// Glob that rejects a URL (repeatable)
        #[arg(long = "exclude", value_name = "GLOB")]
        exclude: Vec<String>,

        /// Maximum URLs to collect (capped at 10000)
        #[arg(long)]
        max_urls: Option<u64>,

        /// Maximum URLs to return
        #[arg(long)]
        limit: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let service = match SitemapService::new(&config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            return ExitCode::from(2);
        }
    };

    let ok = match cli.command {
        Command::Discover { url } => {
            print_envelope(&service.discover_sitemaps(DiscoverInput { url }).await)
        }
        Command::List {
            sitemap_url,
            limit,
            cursor,
        } => print_envelope(
            &service
                .list_sitemap_urls(ListInput {
                    sitemap_url,
                    limit,
                    cursor,
                })
                .await,
        ),
        Command::Frontier {
            seed_url,
            include,
            exclude,
            max_urls,
            limit,
        } => {
            let rules = FrontierRules {
                include: Some(include),
                exclude: Some(exclude),
                max_urls,
            };
            print_envelope(
                &service
                    .build_crawl_frontier(FrontierInput {
                        seed_url,
                        rules: Some(rules),
                        limit,
                    })
                    .await,
            )
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Loads the config file if given, otherwise defaults plus environment
fn load(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => Ok(Config::from_env()?),
    }
}

/// Prints an envelope as pretty JSON; returns whether it was a success
fn print_envelope<T: Serialize>(envelope: &Envelope<T>) -> bool {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            return false;
        }
    }
    envelope.is_ok()
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_frontier=warn,warn"),
            1 => EnvFilter::new("sitemap_frontier=info,warn"),
            2 => EnvFilter::new("sitemap_frontier=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
