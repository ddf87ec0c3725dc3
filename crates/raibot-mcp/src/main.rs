//! # Raibot MCP Server
//!
//! Model Context Protocol server that lets AI agents drive a simulated robot
//! around a 5x5 grid.
//!
//! ## Overview
//!
//! This server provides:
//! - Tools (hello_world, raibot_location, raibot_simulator)
//! - Resources (memory://raibot_map, memory://raibot_location, memory://raibot_history)
//! - A guidance prompt (Raibot)
//!
//! ## Architecture
//!
//! This is Layer 3 - the main MCP server binary that ties together:
//! - raibot-core: Core types, grid model and configuration
//! - raibot-store: JSON file documents
//! - raibot-simulator: Move orchestration
//!
//! ## Usage
//!
//! ```text
//! raibot-mcp [--config <path>] [--data-dir <path>]
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, bail};
use rmcp::{transport::stdio, ServiceExt};

use raibot_core::ServerConfig;
use raibot_mcp::RaibotMcpServer;

/// Command line options.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Parse `args`, skipping the program name.
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            let slot = match arg.as_str() {
                "--config" => &mut parsed.config,
                "--data-dir" => &mut parsed.data_dir,
                other => bail!("Unknown argument: {other}"),
            };
            let value = iter
                .next()
                .filter(|value| !value.starts_with("--"))
                .ok_or_else(|| anyhow!("Missing value for {arg}"))?;
            *slot = Some(PathBuf::from(value));
        }

        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let cli = CliArgs::parse(&args)?;

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
        config.validate()?;
    }

    // Initialize logging; stdout belongs to the stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "Raibot MCP Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let server = RaibotMcpServer::from_config(&config)?;

    tracing::info!("Server initialized, starting stdio transport...");

    // Serve the MCP server over stdio
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Error starting server: {}", e);
        e
    })?;

    tracing::info!("Raibot MCP Server running on stdio");

    // Wait for the service to complete
    service.waiting().await?;

    tracing::info!("Raibot MCP Server shutting down");

    Ok(())
}
