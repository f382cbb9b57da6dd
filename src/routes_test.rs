use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn host() -> Router {
    with_host_routes(Router::new(), Path::new("target/site"))
}

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    host().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    assert_eq!(status_of("/pkg/does-not-exist.wasm").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_host_route_is_not_found() {
    assert_eq!(status_of("/api/content").await, StatusCode::NOT_FOUND);
}
