mod config;
mod logging;
mod signals;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use api_gateway::ApiGateway;
use axum::Router;
use clap::{Parser, Subcommand};
use utoipa::OpenApi as _;

use crate::config::{AppConfig, CliOverrides};

/// Required Remainder Server - batch solver for max k with k mod x = y, k <= n
#[derive(Parser)]
#[command(name = "remainder-server")]
#[command(about = "Required Remainder Server - batch solver for max k with k mod x = y, k <= n")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn build_gateway(config: &AppConfig) -> Result<(ApiGateway, Router)> {
    let gateway =
        ApiGateway::new(config.server.clone()).with_openapi(required_remainder::ApiDoc::openapi());
    let router = gateway.build_router(required_remainder::register_routes(Router::new()))?;
    Ok((gateway, router))
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config
        .server
        .bind_addr
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid bind address '{}'", config.server.bind_addr))?;
    build_gateway(config)?;

    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!(
        application = %config.server.application_name,
        version = env!("CARGO_PKG_VERSION"),
        "Required Remainder Server starting"
    );

    let (gateway, router) = build_gateway(&config)?;

    let shutdown = async {
        match signals::wait_for_shutdown().await {
            Ok(signal) => {
                tracing::info!(%signal, "Shutdown signal received, draining connections");
            }
            Err(e) => tracing::error!(error = %e, "Signal handling failed, shutting down"),
        }
    };

    gateway.serve(router, shutdown).await?;
    tracing::info!("Server stopped");
    Ok(())
}
