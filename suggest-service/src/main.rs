use service_core::observability::init_tracing;
use suggest_service::config::SuggestConfig;
use suggest_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("suggest-service", "info");

    // A missing credential aborts here; no port is ever bound.
    let config = SuggestConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Starting suggest-service");
    app.run_until_stopped().await
}
