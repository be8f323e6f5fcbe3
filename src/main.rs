//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `wiki_collect` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C cancellation
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use wiki_collect::config::{Cli, Command};
use wiki_collect::initialization::init_logger_with;
use wiki_collect::{read_urls, run_images, run_revisions, LogStatus, StatusSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so the API
    // token does not have to be exported manually
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupt received, stopping after the current request");
            signal_cancel.cancel();
        }
    });

    let status: Arc<dyn StatusSink> = Arc::new(LogStatus);
    let client = cli.client_config();

    let outcome = match cli.command {
        Command::Revisions(args) => {
            let urls = read_urls(&args.urls).await;
            match urls {
                Ok(urls) => run_revisions(args.into_config(client, urls), status, cancel)
                    .await
                    .map(|report| {
                        println!(
                            "Retrieved {} revision{} for {} page(s) ({} skipped) in {:.1}s",
                            report.revisions,
                            if report.revisions == 1 { "" } else { "s" },
                            report.articles,
                            report.skipped_articles,
                            report.elapsed_seconds
                        );
                        if report.geolocated_addresses > 0 {
                            println!(
                                "Geolocated {} anonymous editor address(es)",
                                report.geolocated_addresses
                            );
                        }
                        println!("Results saved in {}", report.output.display());
                    }),
                Err(e) => Err(e),
            }
        }
        Command::Images(args) => run_images(args.into_config(client), status, cancel)
            .await
            .map(|report| {
                println!(
                    "Found {} image occurrence{} ({} distinct) across {} language version(s) in {:.1}s",
                    report.occurrences,
                    if report.occurrences == 1 { "" } else { "s" },
                    report.distinct_images,
                    report.language_versions,
                    report.elapsed_seconds
                );
                println!("Report saved in {}", report.output.display());
            }),
    };

    if let Err(e) = outcome {
        eprintln!("wiki_collect error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
