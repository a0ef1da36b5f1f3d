use std::sync::Arc;

use nyaya_core::{config::Config, orchestrator::Orchestrator};
use nyaya_genai::GeminiBackend;
use nyaya_server::{routes, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nyaya_server=info,nyaya_core=info,nyaya_genai=info".into()),
        )
        .init();

    // Missing credential is fatal; never serve degraded traffic.
    let config = Config::from_env()?;

    let backend = GeminiBackend::new(
        config.api_key.as_str(),
        config.fast_model.as_str(),
        config.quality_model.as_str(),
        config.request_timeout_s,
    )?
    .with_base_url(config.genai_base_url.as_str());

    let state = Arc::new(AppState {
        orchestrator: Orchestrator::new(Arc::new(backend)),
    });

    let app = routes::router(state, config.max_body_mb);

    let addr = format!("{}:{}", config.bind, config.port);
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
