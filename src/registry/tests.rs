//! Civil-registry client tests

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::RegistryConfig;
use crate::core::models::Cedula;
use crate::utils::error::AppError;

use super::client::HttpCivilRegistry;
use super::types::CivilRegistry;

fn config_for(server: &MockServer, timeout_ms: u64) -> RegistryConfig {
    RegistryConfig {
        base_url: Some(server.uri()),
        timeout_ms,
    }
}

fn cedula() -> Cedula {
    "V12345678".parse().unwrap()
}

#[tokio::test]
async fn test_lookup_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/cedula"))
        .and(query_param("nacionalidad", "V"))
        .and(query_param("cedula", "12345678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": false,
            "data": {"name": "Ana", "surname": "Gomez"}
        })))
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 2000)).unwrap();
    let record = client.lookup(&cedula()).await.unwrap().unwrap();
    assert_eq!(record.name, "Ana");
    assert_eq!(record.surname, "Gomez");
}

#[tokio::test]
async fn test_negative_payload_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": true,
            "data": null
        })))
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 2000)).unwrap();
    assert!(client.lookup(&cedula()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_payload_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 2000)).unwrap();
    assert!(client.lookup(&cedula()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_dependency_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 2000)).unwrap();
    let err = client.lookup(&cedula()).await.unwrap_err();
    assert!(matches!(err, AppError::Dependency(_)));
}

#[tokio::test]
async fn test_slow_registry_times_out_as_dependency_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({"error": false, "data": null})),
        )
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 50)).unwrap();
    let err = client.lookup(&cedula()).await.unwrap_err();
    assert!(matches!(err, AppError::Dependency(_)));
}

#[tokio::test]
async fn test_disabled_registry_resolves_not_found() {
    let config = RegistryConfig {
        base_url: None,
        timeout_ms: 1000,
    };
    let client = HttpCivilRegistry::new(&config).unwrap();
    assert!(client.lookup(&cedula()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_partial_data_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": false,
            "data": {"name": "Ana"}
        })))
        .mount(&server)
        .await;

    let client = HttpCivilRegistry::new(&config_for(&server, 2000)).unwrap();
    assert!(client.lookup(&cedula()).await.unwrap().is_none());
}
