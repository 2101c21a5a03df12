//! gotdrawn main entry point
//!
//! This is the command-line interface for the gallery builder.

use clap::Parser;
use gotdrawn::config::{load_or_default, Config};
use gotdrawn::crawler::scrape;
use gotdrawn::GalleryError;
use gotdrawn::output::{
    format_report, print_statistics, render_gallery, write_gallery, GalleryStats, RenderOptions,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// gotdrawn: a viewer-friendly gallery for drawing-request boards
///
/// Scrapes the board's listing page, follows every submission to its
/// discussion page, and writes the reference photos alongside the artwork
/// they received as one static HTML page.
#[derive(Parser, Debug)]
#[command(name = "gotdrawn")]
#[command(version)]
#[command(about = "Builds an HTML gallery from a drawing-request board", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print every gallery entry and scrape statistics to stdout
    #[arg(long)]
    report: bool,

    /// Validate config and show what would be fetched without fetching
    #[arg(long, conflicts_with = "report")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match load_or_default(cli.config.as_deref()) {
        Ok(cfg) => {
            match &cli.config {
                Some(path) => tracing::info!("Configuration loaded from {}", path.display()),
                None => tracing::info!("Using built-in configuration"),
            }
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_build(config, cli.report).await?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gotdrawn=info,warn"),
            1 => EnvFilter::new("gotdrawn=debug,info"),
            2 => EnvFilter::new("gotdrawn=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be fetched and written
fn handle_dry_run(config: &Config) {
    println!("=== gotdrawn Dry Run ===\n");

    println!("Site:");
    println!("  Board: {}", config.site.board_name);
    println!("  Listing page: {}", config.site.listing_url());
    println!("  Excluded link patterns: {}", config.site.exclusions().join(", "));

    println!("\nImage Host:");
    println!("  Direct host: {}", config.image_host.direct_host);
    println!("  Gallery domain: {}", config.image_host.gallery_domain);
    println!("  Extensions: {}", config.image_host.extensions.join(", "));

    println!("\nFetch:");
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s (connect {}s)", config.fetch.timeout_secs, config.fetch.connect_timeout_secs);

    println!("\nOutput:");
    println!("  Gallery: {}", config.output.gallery_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape-and-render operation
async fn handle_build(config: Config, report: bool) -> Result<(), GalleryError> {
    let options = RenderOptions::from_config(&config);
    let gallery_path = PathBuf::from(&config.output.gallery_path);

    let submissions = match scrape(config).await {
        Ok(submissions) => submissions,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e);
        }
    };

    let stats = GalleryStats::from_submissions(&submissions);
    tracing::info!(
        "Scraped {} submissions, {} rendered, {}/{} artworks resolved",
        stats.submissions,
        stats.rendered,
        stats.resolved_artworks,
        stats.artworks
    );

    let html = render_gallery(&submissions, &options);
    write_gallery(&html, &gallery_path)?;
    tracing::info!("Gallery written to {}", gallery_path.display());

    if report {
        print!("{}", format_report(&submissions));
        print_statistics(&stats);
    }

    Ok(())
}
