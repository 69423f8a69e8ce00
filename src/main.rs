use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, Deployment};
use consultas_core::{initialise_data, CoreConfig, MockApiSource, RefreshOutcome};

/// Main entry point for the consultas server
///
/// Refreshes the consultations document from the (mock) external API once, then starts the
/// REST server. A failed refresh is not fatal: the server falls back to whatever data file is
/// already on disk.
///
/// # Environment Variables
/// - `CONSULTAS_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `CONSULTAS_DATA_FILE`: Consultations document (default: "data.json")
/// - `CONSULTAS_STATIC_DIR`: Frontend assets (default: "static")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("consultas_run=info".parse()?)
                .add_directive("consultas_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CONSULTAS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("CONSULTAS_DATA_FILE").ok(),
        std::env::var("CONSULTAS_STATIC_DIR").ok(),
    )?;

    // Must finish before the listener is bound so no request sees a half-written file.
    match initialise_data(&cfg, MockApiSource::new()) {
        RefreshOutcome::Refreshed { count } => {
            tracing::info!("++ Loaded {} consultations into {}", count, cfg.data_file().display())
        }
        RefreshOutcome::FetchFailed | RefreshOutcome::WriteFailed => tracing::warn!(
            "++ Serving existing data file {} (refresh did not complete)",
            cfg.data_file().display()
        ),
    }

    tracing::info!("++ Starting Consultas REST on {}", rest_addr);

    let app = router(&cfg, Deployment::Server);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
