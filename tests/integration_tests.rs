//! Integration tests using a mock HTTP server
//!
//! Exercises the full end-to-end flow: login → bearer token → paginated
//! machine stream.

use futures::{pin_mut, StreamExt, TryStreamExt};
use sepm_machines::auth::{Authenticator, Credentials};
use sepm_machines::http::{api_base, HttpClient, HttpClientConfig};
use sepm_machines::machines::{self, MachinesQuery, PAGE_SIZE};
use sepm_machines::types::Record;
use sepm_machines::Error;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "e2e-session-token";

fn session_client(server: &MockServer) -> HttpClient {
    HttpClient::with_config(HttpClientConfig::json_session(server.uri())).unwrap()
}

/// A page body with `count` records numbered from `start`
fn page_body(start: usize, count: usize) -> serde_json::Value {
    let content: Vec<_> = (start..start + count)
        .map(|i| json!({"uniqueId": format!("m-{i}"), "computerName": format!("HOST-{i}")}))
        .collect();
    json!({"content": content})
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/identity/authenticate"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(server)
        .await;
}

/// Mount a machines page that requires the bearer token from the login
async fn mount_page(server: &MockServer, offset: usize, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/machines"))
        .and(header("Authorization", format!("Bearer {TOKEN}")))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("limit", PAGE_SIZE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn login(client: &mut HttpClient) {
    let authenticator = Authenticator::new(Credentials::new("admin", "secret"));
    let token = authenticator.login(client).await.unwrap();
    client.set_bearer_token(token.into_inner());
}

#[tokio::test]
async fn test_full_flow_bearer_token_reaches_every_page() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    mount_page(&mock_server, 0, page_body(0, 1000)).await;
    mount_page(&mock_server, 1000, page_body(1000, 250)).await;

    let mut client = session_client(&mock_server);
    login(&mut client).await;

    let records: Vec<Record> = machines::stream(&client, MachinesQuery::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 1250);
    assert_eq!(records[0]["uniqueId"], "m-0");
    assert_eq!(records[1249]["uniqueId"], "m-1249");
    // Each page mock matches on the Authorization header and expects
    // exactly one request
    mock_server.verify().await;
}

#[tokio::test]
async fn test_full_flow_with_name_filter() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/machines"))
        .and(header("Authorization", format!("Bearer {TOKEN}")))
        .and(query_param("computerName", "HOST-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"uniqueId": "m-42", "computerName": "HOST-42"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = session_client(&mock_server);
    login(&mut client).await;

    let query = MachinesQuery::new().with_computer_name("HOST-42");
    let records: Vec<Record> = machines::stream(&client, query)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["computerName"], "HOST-42");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_unauthenticated_listing_is_rejected() {
    let mock_server = MockServer::start().await;

    // The server only accepts requests carrying the session token
    Mock::given(method("GET"))
        .and(path("/machines"))
        .and(header("Authorization", format!("Bearer {TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/machines"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    // Skipping login leaves the client without a token
    let client = session_client(&mock_server);
    let result: Result<Vec<Record>, _> = machines::stream(&client, MachinesQuery::new())
        .try_collect()
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 401, .. })));
}

#[tokio::test]
async fn test_streaming_survives_partial_failure() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;
    mount_page(&mock_server, 0, page_body(0, 1000)).await;

    Mock::given(method("GET"))
        .and(path("/machines"))
        .and(query_param("offset", "1000"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let mut client = session_client(&mock_server);
    login(&mut client).await;

    let record_stream = machines::stream(&client, MachinesQuery::new());
    pin_mut!(record_stream);

    let mut yielded: Vec<Record> = Vec::new();
    let err = loop {
        match record_stream.next().await {
            Some(Ok(record)) => yielded.push(record),
            Some(Err(e)) => break e,
            None => panic!("stream ended without surfacing the error"),
        }
    };

    // Everything from the first page was observed before the failure
    assert_eq!(yielded.len(), 1000);
    assert_eq!(yielded[999]["uniqueId"], "m-999");
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_rerun_yields_identical_sequence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/machines"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 3)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut first: Vec<Record> = Vec::new();
    let mut second: Vec<Record> = Vec::new();
    for run in [&mut first, &mut second] {
        let mut client = session_client(&mock_server);
        login(&mut client).await;
        *run = machines::stream(&client, MachinesQuery::new())
            .try_collect()
            .await
            .unwrap();
    }

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_login_failure_aborts_before_any_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/authenticate"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/machines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = session_client(&mock_server);
    let authenticator = Authenticator::new(Credentials::new("admin", "secret"));
    let err = authenticator.login(&client).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 403, .. }));
    mock_server.verify().await;
}

#[test]
fn test_api_base_shape() {
    let base = api_base("sepm.example.com").unwrap();
    assert_eq!(base.as_str(), "https://sepm.example.com/sepm/api/v1");
}
