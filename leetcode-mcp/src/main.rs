//! MCP Server entry point for LeetCode.
//!
//! Starts the MCP server with stdio transport. The site is chosen with
//! `--site` / `LEETCODE_SITE`; supplying both `LEETCODE_SESSION` and
//! `LEETCODE_CSRF_TOKEN` enables the account tools.

mod config;
mod envelope;
mod registry;
mod resources;
mod schemas;
mod server;
mod tools;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use config::{Cli, Config};
use rmcp::ServiceExt;
use server::LeetCodeMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_server(config: &Config) -> anyhow::Result<LeetCodeMcp> {
    let service = leetcode_provider::create_service(config.variant, config.credential.clone())
        .with_context(|| format!("Failed to create {} client", config.variant.display_name()))?;
    let server = LeetCodeMcp::new(&service).context("Failed to register capabilities")?;
    Ok(server)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = match Config::try_from(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Starting LeetCode MCP Server for {} ({})",
        config.variant.display_name(),
        if config.is_authenticated() {
            "authenticated tools enabled"
        } else {
            "anonymous, authenticated tools disabled"
        }
    );

    let mcp_server = match build_server(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let capabilities = mcp_server.capabilities();
    tracing::info!(
        "MCP server initialized with {} tools: {}",
        capabilities.tools().len(),
        capabilities.tool_names().join(", ")
    );
    tracing::info!(
        "Exposing {} resources: {}",
        capabilities.resources().len(),
        capabilities.resource_names().join(", ")
    );

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
