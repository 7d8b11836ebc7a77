use std::sync::Arc;

use tower_http::cors::CorsLayer;

use vendor_onboard::config::OnboardingConfig;
use vendor_onboard::http::{
    HttpAspectWriter, HttpIdentityProvider, HttpPaymentStatusSource, HttpProfileRepository,
};
use vendor_onboard::manager::OnboardingManager;
use vendor_onboard::reconcile::ReconciliationService;
use vendor_onboard::routes::{OnboardingRouteState, onboarding_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = OnboardingConfig::from_env()?;
    let client = reqwest::Client::new();

    let repository = Arc::new(HttpProfileRepository::new(
        client.clone(),
        config.remote_base_url.clone(),
    ));
    let writers = HttpAspectWriter::all(&client, &config.remote_base_url);
    let payment = Arc::new(HttpPaymentStatusSource::new(
        client.clone(),
        config.remote_base_url.clone(),
    ));
    let reconciler = Arc::new(ReconciliationService::new(repository, writers, payment));

    let identity = Arc::new(HttpIdentityProvider::new(
        client,
        config.identity_base_url.clone(),
    ));

    let manager = Arc::new(OnboardingManager::new(identity, reconciler));

    let app = onboarding_routes(OnboardingRouteState { manager }).layer(CorsLayer::permissive());
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.bind_port)).await?;
    tracing::info!(port = config.bind_port, remote = %config.remote_base_url, "onboarding status server started");
    axum::serve(listener, app).await?;

    Ok(())
}
