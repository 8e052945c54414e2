//! Host Telemetry MCP Server
//!
//! Serves the telemetry tools over stdio. Logging goes to stderr (stdout is
//! reserved for the MCP protocol); set `LOG_FORMAT=json` for structured
//! output and `RUST_LOG` to adjust filtering.

use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use telemetry_mcp::TelemetryMcpServer;

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("telemetry_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting telemetry MCP Server");

    let server = TelemetryMcpServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    // The interrupt branch drops the running service, which releases the
    // stdio transport before the clean exit.
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received");
        }
        result = service.waiting() => {
            result?;
        }
    }

    tracing::info!("Server shutting down");
    Ok(())
}
