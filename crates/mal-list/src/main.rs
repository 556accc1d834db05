//! MAL list server.

use anyhow::{Context, Result};
use clap::Parser;
use mal_list::{bind_listener, build_router, AppState, ListService, LIST_LIMIT};
use shared::Config;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let (mut config, origin) = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    config.apply_env_overrides()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Initialize logging
    let level_override = args.verbose.then_some(tracing::Level::DEBUG);
    shared::logging::init_from_config("mal-list", &config, level_override)?;

    origin.log(&args.config);
    info!(
        user = %config.mal.username,
        base_url = %config.mal.base_url,
        limit = LIST_LIMIT,
        "Serving lists"
    );

    let static_dir = config.static_dir();
    if !static_dir.join("index.html").exists() {
        warn!(
            static_dir = %static_dir.display(),
            "No index.html in static directory, the application shell will 404"
        );
    }

    let lists = ListService::from_config(&config).context("Failed to create list service")?;
    let app = build_router(AppState::new(lists), &static_dir);

    let listener = bind_listener(&config.server).await?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
