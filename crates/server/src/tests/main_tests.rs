use super::*;
use axum::{body, body::Body, http::Request};
use consignment_api::is_consignment_id;
use tower::ServiceExt;

use crate::config::Settings;

fn test_app(fail_submissions: bool) -> Router {
    let settings = Settings {
        locations: vec!["Perth".into(), "Sydney".into(), "Canberra".into()],
        locations_delay_ms: 0,
        fail_submissions,
        ..Settings::default()
    };
    build_router(Arc::new(AppState::from_settings(&settings)))
}

fn consignment_body() -> Body {
    Body::from(
        serde_json::json!({
            "source": "Perth",
            "destination": "Sydney",
            "weight": 10.0,
            "width": 50.0,
            "height": 50.0,
            "depth": 50.0,
            "units": "centimetres",
            "dimensions": { "width": 50.0, "height": 50.0, "depth": 50.0 }
        })
        .to_string(),
    )
}

#[tokio::test]
async fn healthz_reports_ok() {
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = test_app(false).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn locations_route_lists_configured_locations() {
    let request = Request::get("/locations")
        .body(Body::empty())
        .expect("request");
    let response = test_app(false).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let dto: LocationsResponse = serde_json::from_slice(&body).expect("json");
    assert_eq!(dto.locations, vec!["Perth", "Sydney", "Canberra"]);
}

#[tokio::test]
async fn consignment_route_returns_id_and_echo() {
    let request = Request::post("/consignments")
        .header("content-type", "application/json")
        .body(consignment_body())
        .expect("request");
    let response = test_app(false).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let receipt: SubmissionReceipt = serde_json::from_slice(&body).expect("json");
    assert!(is_consignment_id(&receipt.consignment_id));
    assert_eq!(receipt.consignment.source, "Perth");
    assert_eq!(receipt.consignment.dimensions.depth, 50.0);
}

#[tokio::test]
async fn failing_backend_reports_api_error() {
    let request = Request::post("/consignments")
        .header("content-type", "application/json")
        .body(consignment_body())
        .expect("request");
    let response = test_app(true).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let err: ApiError = serde_json::from_slice(&body).expect("json");
    assert_eq!(err.code, ErrorCode::Internal);
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let request = Request::post("/consignments")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"source":"Perth","units":"inches"}"#))
        .expect("request");
    let response = test_app(false).oneshot(request).await.expect("response");
    assert!(response.status().is_client_error());
}
