use airport_search::error::SearchError;
use airport_search::gateway::AirportDirectory;
use airport_search::models::{Address, AirportRecord, GeoCode};
use airport_search::server::router;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct StaticDirectory(Vec<AirportRecord>);

#[async_trait]
impl AirportDirectory for StaticDirectory {
    async fn search(&self, _keyword: &str) -> Result<Vec<AirportRecord>, SearchError> {
        Ok(self.0.clone())
    }
}

struct FailingDirectory;

#[async_trait]
impl AirportDirectory for FailingDirectory {
    async fn search(&self, _keyword: &str) -> Result<Vec<AirportRecord>, SearchError> {
        Err(SearchError::Auth("token endpoint returned 401".to_string()))
    }
}

fn airport() -> AirportRecord {
    AirportRecord {
        iata_code: "MAD".to_string(),
        name: "ADOLFO SUAREZ BARAJAS".to_string(),
        address: Address {
            city_name: Some("MADRID".to_string()),
            country_name: Some("SPAIN".to_string()),
        },
        geo_code: GeoCode {
            latitude: 40.49810,
            longitude: -3.56764,
        },
    }
}

fn search_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/search-airport")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_airport_field_is_a_400() {
    let app = router(Arc::new(StaticDirectory(vec![airport()])));

    let response = app.oneshot(search_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn blank_airport_field_is_a_400() {
    let app = router(Arc::new(StaticDirectory(vec![airport()])));

    let response = app
        .oneshot(search_request(json!({ "airport": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn successful_search_relays_the_data_array() {
    let app = router(Arc::new(StaticDirectory(vec![airport()])));

    let response = app
        .oneshot(search_request(json!({ "airport": "Madrid" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["iataCode"], "MAD");
    assert_eq!(body["data"][0]["address"]["cityName"], "MADRID");
}

#[tokio::test]
async fn gateway_failure_is_a_generic_500() {
    let app = router(Arc::new(FailingDirectory));

    let response = app
        .oneshot(search_request(json!({ "airport": "Madrid" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    // Upstream detail must not leak to the client.
    assert_eq!(body["error"], "airport search failed");
    assert!(!body["error"].as_str().unwrap().contains("401"));
}
