use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use catchall_domain::DomainError;

use crate::{
    dto::{DomainCounterResponse, DomainStatusResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/domains/", get(get_empty_domain_status))
        .route("/domains/{domain}", get(get_domain_status))
        .route("/domains/{domain}/counters", get(get_domain_counters))
}

async fn get_domain_status(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DomainStatusResponse>, ApiError> {
    let status = state
        .get_domain_status
        .execute(&domain)
        .await?
        .ok_or_else(|| not_found(&domain))?;

    Ok(Json(DomainStatusResponse { status }))
}

/// `{domain}` never matches an empty trailing segment; the use case rejects it.
async fn get_empty_domain_status(
    State(state): State<AppState>,
) -> Result<Json<DomainStatusResponse>, ApiError> {
    get_domain_status(State(state), Path(String::new())).await
}

async fn get_domain_counters(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DomainCounterResponse>, ApiError> {
    let counter = state
        .get_domain_status
        .get_counter(&domain)
        .await?
        .ok_or_else(|| not_found(&domain))?;

    Ok(Json(DomainCounterResponse::from_counter(counter)))
}

fn not_found(domain: &str) -> ApiError {
    ApiError(DomainError::NotFound(format!("Domain {} not found", domain)))
}
