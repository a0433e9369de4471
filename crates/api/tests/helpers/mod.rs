#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use catchall_api::{create_api_routes, AppState};
use catchall_application::ports::DomainCounterRepository;
use catchall_application::use_cases::{
    GetDomainStatusUseCase, RecordBouncedUseCase, RecordDeliveredUseCase,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_app(repo: Arc<dyn DomainCounterRepository>) -> Router {
    create_test_app_with_timeout(repo, TEST_TIMEOUT)
}

pub fn create_test_app_with_timeout(
    repo: Arc<dyn DomainCounterRepository>,
    timeout: Duration,
) -> Router {
    let state = AppState {
        record_delivered: Arc::new(RecordDeliveredUseCase::new(repo.clone(), timeout)),
        record_bounced: Arc::new(RecordBouncedUseCase::new(repo.clone(), timeout)),
        get_domain_status: Arc::new(GetDomainStatusUseCase::new(repo, timeout)),
    };
    create_api_routes(state)
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = body_bytes(response).await;
    serde_json::from_slice(&body).unwrap()
}
