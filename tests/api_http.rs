// tests/api_http.rs
// In-process router tests via `oneshot`; no sockets, no real clock (every
// request injects `now`).

use axum::body::{to_bytes, Body};
use axum::http::Request;
use http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use meetzy_recommender::api::{create_router, AppState};
use meetzy_recommender::catalog::StaticCatalog;
use meetzy_recommender::Event;

fn sample_events() -> Vec<Event> {
    serde_json::from_value(json!([
        {
            "name": "Tiché čtení",
            "description": "posezení s knihou v café",
            "place": "Knihovna",
            "date": "2025-06-01",
            "startTime": "18:00"
        },
        {
            "name": "Stadium concert",
            "description": "big loud show",
            "place": "Arena",
            "date": "2025-06-02",
            "startTime": "20:00"
        }
    ]))
    .expect("sample events")
}

fn router_with(events: Vec<Event>) -> axum::Router {
    create_router(AppState::new(Arc::new(StaticCatalog::new(events))))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), 256 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_ok() {
    let resp = router_with(Vec::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn post_recommend_round_trip() {
    let body = json!({
        "events": sample_events(),
        "energy": "low",
        "environment": "quiet",
        "plan": "calm",
        "now": "2025-01-01T00:00:00"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/recommend")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = router_with(Vec::new()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["recommendation"]["name"], json!("Tiché čtení"));
    assert_eq!(v["fallback"], json!(false));
    assert_eq!(v["candidates"], json!(2));
    assert!(v["matched"]
        .as_array()
        .unwrap()
        .iter()
        .any(|k| k == "cafe"));
}

#[tokio::test]
async fn get_recommend_uses_catalog() {
    let uri = "/recommend?energy=high&environment=loud&plan=move&now=2025-01-01T00:00:00";
    let resp = router_with(sample_events())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["recommendation"]["name"], json!("Stadium concert"));
    assert_eq!(v["fallback"], json!(false));
}

#[tokio::test]
async fn empty_catalog_yields_null_recommendation() {
    let uri = "/recommend?energy=low&environment=quiet&plan=calm&now=2025-01-01T00:00:00";
    let resp = router_with(Vec::new())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["recommendation"], Value::Null);
    assert_eq!(v["candidates"], json!(0));
}

#[tokio::test]
async fn unknown_axis_value_is_rejected() {
    let body = json!({
        "events": [],
        "energy": "zen",
        "environment": "quiet",
        "plan": "calm"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/recommend")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = router_with(Vec::new()).oneshot(req).await.unwrap();
    assert!(
        resp.status().is_client_error(),
        "expected 4xx for unknown enum value, got {}",
        resp.status()
    );
}

#[tokio::test]
async fn debug_lexicon_reports_all_axes() {
    let resp = router_with(Vec::new())
        .oneshot(
            Request::builder()
                .uri("/debug/lexicon")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 9, "three axes x three values");
    let balanced = rows
        .iter()
        .find(|r| r["value"] == json!("balanced"))
        .unwrap();
    assert_eq!(balanced["keywords"], json!(0));
}
