use std::process::exit;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use torrust_scrape::common::common::setup_logging;
use torrust_scrape::config::structs::configuration::Configuration;
use torrust_scrape::scrape::structs::scrape_client::ScrapeClient;
use torrust_scrape::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_with_overrides(
        &args.config,
        args.create_config,
        args.tracker.as_deref(),
        args.retry_limit,
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let client = match ScrapeClient::from_config(&config.scrape) {
        Ok(client) => client,
        Err(e) => {
            error!("[SCRAPE] Cannot use tracker {}: {e}", config.scrape.tracker);
            exit(1);
        }
    };

    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match client.scrape(&args.infohashes).await {
                Ok(results) => {
                    for result in results {
                        println!("{result}");
                    }
                    Ok(())
                }
                Err(e) => {
                    error!("[SCRAPE] Scrape of {} failed: {e}", client.endpoint());
                    exit(1);
                }
            }
        })
}
