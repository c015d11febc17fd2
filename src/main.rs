//! Client registry daemon
//!
//! A minimal client-registry REST service: five CRUD endpoints over an
//! in-memory record store.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client_registry::config::DaemonConfig;
use client_registry::error::{DaemonError, DaemonResult};
use client_registry::server::Server;

/// Registry daemon CLI
#[derive(Parser)]
#[command(name = "registryd")]
#[command(about = "Client registry REST service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "REGISTRY_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "REGISTRY_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "REGISTRY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "REGISTRY_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration, then apply CLI overrides
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.json = true;
    }

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    println!(
        "Client registry v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server.listen_addr
    );

    let server = Server::new(config);
    server.run().await
}
