//! `fleetcardd` — the fleetcard server binary.
//!
//! Usage:
//!   fleetcardd [-c <context-name-or-path>] [--listen <addr>]
//!
//! The context name resolves to `/etc/fleetcard/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly. With no
//! config at all the server runs on built-in defaults.

mod config;
mod routes;

use clap::Parser;
use fleetcard_core::Module;
use tracing::info;

use cards::{CardService, CardsModule};
use config::ServerConfig;

/// Fleetcard server.
#[derive(Parser, Debug)]
#[command(name = "fleetcardd", about = "SVG status card server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let server_config = match &cli.config {
        Some(name) => {
            let config_path = ServerConfig::resolve_path(name);
            info!("Loading configuration from {}", config_path.display());
            ServerConfig::load(&config_path)?
        }
        None => ServerConfig::default(),
    };
    server_config.validate()?;

    let service = CardService::new(
        server_config.fetch_config(),
        server_config.server.cache_max_age,
    )
    .map_err(|e| anyhow::anyhow!("failed to build upstream client: {}", e))?;
    let cards_module = CardsModule::new(service);
    info!("Cards module initialized");

    let module_routes = vec![(cards_module.name(), cards_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Fleetcard server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
