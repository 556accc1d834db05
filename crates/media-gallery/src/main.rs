//! Media Gallery - print the latest anime, manga and novel updates
//!
//! Reads the three lists from a running list server and prints them as a
//! text gallery, or a single error line if any of them fails to load.

use anyhow::{Context, Result};
use clap::Parser;
use media_gallery::{render_error, render_gallery, GalleryClient};
use shared::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Media Gallery CLI arguments
#[derive(Parser, Debug)]
#[command(name = "media-gallery")]
#[command(about = "Print the latest anime, manga and novel list updates")]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// List API base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Print the gallery as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let (config, origin) = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    // Initialize logging
    let level_override = args.verbose.then_some(tracing::Level::DEBUG);
    shared::logging::init_from_config("media-gallery", &config, level_override)?;
    origin.log(&args.config);

    let api_url = args
        .api_url
        .unwrap_or_else(|| config.gallery.api_base_url.clone());
    info!(api_url = %api_url, "Loading media collection");

    let client = GalleryClient::new(
        api_url,
        Duration::from_secs(config.gallery.request_timeout_secs),
    )?;

    match client.fetch_all().await {
        Ok(gallery) => {
            if args.json {
                let json = serde_json::to_string_pretty(&gallery)
                    .context("Failed to serialize gallery")?;
                println!("{}", json);
            } else {
                print!("{}", render_gallery(&gallery));
            }
            Ok(())
        }
        Err(e) => {
            error!(kind = %e.kind(), error = %e, "Failed to load gallery");
            eprint!("{}", render_error());
            std::process::exit(1);
        }
    }
}
