use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::put,
    Router,
};
use tracing::debug;

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events/{domain}/delivered", put(record_delivered))
        .route("/events/{domain}/bounced", put(record_bounced))
}

async fn record_delivered(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<StatusCode, ApiError> {
    let counter = state.record_delivered.execute(&domain).await?;
    debug!(domain = %counter.domain, delivered = counter.delivered, "Delivered event accepted");
    Ok(StatusCode::OK)
}

async fn record_bounced(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<StatusCode, ApiError> {
    let counter = state.record_bounced.execute(&domain).await?;
    debug!(domain = %counter.domain, bounced = counter.bounced, "Bounced event accepted");
    Ok(StatusCode::OK)
}
