//! Desktop shell variant of the consultas server.
//!
//! ## Purpose
//! Serves the read endpoint and the frontend for a native window host to load.
//!
//! ## Intended use
//! Unlike the workspace's main `consultas-run` binary, this never refreshes the data file: it
//! serves whatever `consultas refresh` last wrote, and answers 404 with a hint to run that
//! command when the file is missing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, Deployment};
use consultas_core::CoreConfig;

/// Main entry point for the desktop shell variant
///
/// # Environment Variables
/// - `CONSULTAS_DESKTOP_ADDR`: Server address (default: "127.0.0.1:5001")
/// - `CONSULTAS_DATA_FILE`: Consultations document (default: "data.json")
/// - `CONSULTAS_STATIC_DIR`: Frontend assets (default: "static")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("consultas_desktop=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CONSULTAS_DESKTOP_ADDR").unwrap_or_else(|_| "127.0.0.1:5001".into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("CONSULTAS_DATA_FILE").ok(),
        std::env::var("CONSULTAS_STATIC_DIR").ok(),
    )?;

    if !cfg.document_store().exists() {
        tracing::warn!(
            "data file {} does not exist yet; run `consultas refresh` to create it",
            cfg.data_file().display()
        );
    }

    let app = router(&cfg, Deployment::Desktop);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "-- Consultas desktop server ready; point the window host at http://{}/",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;

    Ok(())
}
