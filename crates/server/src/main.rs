use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use consignment_api::{LocationProvider, SubmissionSink};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ConsignmentPayload, LocationsResponse, SubmissionReceipt},
};
use tracing::{error, info};

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    info!(
        locations = settings.locations.len(),
        delay_ms = settings.locations_delay_ms,
        fail_submissions = settings.fail_submissions,
        "loaded consignment server settings"
    );
    let app = build_router(Arc::new(AppState::from_settings(&settings)));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/locations", get(list_locations))
        .route("/consignments", post(create_consignment))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LocationsResponse>, (StatusCode, Json<ApiError>)> {
    let locations = state.backend.fetch_locations().await.map_err(|e| {
        error!(error = %e, "location lookup failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new(ErrorCode::Unavailable, e.to_string())),
        )
    })?;
    Ok(Json(locations))
}

async fn create_consignment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConsignmentPayload>,
) -> Result<Json<SubmissionReceipt>, (StatusCode, Json<ApiError>)> {
    let receipt = state
        .backend
        .submit_consignment(payload)
        .await
        .map_err(|e| {
            error!(error = %e, "consignment submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, e.to_string())),
            )
        })?;
    info!(consignment_id = %receipt.consignment_id, "consignment accepted");
    Ok(Json(receipt))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
