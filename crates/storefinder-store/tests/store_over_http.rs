//! End-to-end tests: `LocationStore` over `DataSourceRepository` over
//! `LocationsClient`, against a local `wiremock` server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefinder_client::{ClientConfig, LocationsClient};
use storefinder_store::{DataSourceRepository, LocationError, LocationStore};

fn store_for(server: &MockServer) -> LocationStore<DataSourceRepository<LocationsClient>> {
    let client = LocationsClient::new(&ClientConfig {
        base_url: server.uri(),
        locations_path: "/locations".to_owned(),
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
        user_agent: "storefinder-test/0.1".to_owned(),
        max_retries: 0,
        backoff_base_secs: 0,
    })
    .expect("failed to build test client");
    LocationStore::new(DataSourceRepository::new(client))
}

fn location_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "address": "1 Main St, Springfield",
        "shortAddress": "1 Main St",
        "latitude": 40.71,
        "longitude": -74.0,
        "imgUrl": format!("https://cdn.example.com/{id}.jpg"),
        "status": null,
        "isEnabled": true,
        "_disableUntil": null
    })
}

async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn pages_through_all_locations_and_searches() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "1",
        json!({
            "locations": [
                location_json("a", "Blank Street A"),
                location_json("b", "Blank Street B")
            ],
            "hasMore": true
        }),
    )
    .await;
    mount_page(
        &server,
        "2",
        json!({
            "locations": [
                location_json("b", "Blank Street B"),
                location_json("c", "Corner Cafe")
            ]
        }),
    )
    .await;

    let store = store_for(&server);
    store.load_initial().await;
    store.load_more().await;
    store.load_more().await;

    let state = store.state();
    let ids: Vec<_> = state.locations.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(state.page, 3);
    assert!(!state.has_more);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    store.search("blank street b");
    let filtered: Vec<_> = store
        .state()
        .filtered_locations
        .iter()
        .map(|l| l.id.clone())
        .collect();
    assert_eq!(filtered, ["b"]);
}

#[tokio::test]
async fn server_error_becomes_network_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.load_initial().await;

    let state = store.state();
    assert_eq!(state.error, LocationError::Network);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Server responded with status 502.")
    );
    assert!(!state.is_loading);
    assert_eq!(state.page, 1);
}

#[tokio::test]
async fn malformed_page_becomes_unexpected_error_state() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!({ "locations": [{ "id": "a" }] })).await;

    let store = store_for(&server);
    store.load_initial().await;

    let state = store.state();
    assert_eq!(state.error, LocationError::Network);
    assert_eq!(state.error_message.as_deref(), Some("Unexpected error"));
    assert!(state.locations.is_empty());
}
