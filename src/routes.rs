//! REST endpoints for onboarding status and progress.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::manager::OnboardingManager;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
}

/// GET /api/onboarding/status
///
/// Returns the current step, session flags, and derived progress.
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let status = state.manager.status().await;
    Json(status)
}

/// GET /api/onboarding/progress
///
/// The progress-banner payload: per-step completion only. Derived from the
/// same predicate engine as the status view, so the two can never disagree.
async fn get_progress(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let status = state.manager.status().await;
    Json(status.progress)
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/progress", get(get_progress))
        .with_state(state)
}
