//! Fetch adapter against a mock user source.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use roster_business::{BusinessConfig, FetchError, TotalCountPolicy, fetch_users};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{USERS_PATH, mount_page, users_api_url};

async fn config_for(server: &MockServer) -> BusinessConfig {
    BusinessConfig::new(users_api_url(server), server.uri())
}

#[tokio::test]
async fn test_every_page_has_ten_records_and_five_pages() {
    let server = MockServer::start().await;
    for page in 1..=5 {
        mount_page(&server, page, None).await;
    }
    let config = config_for(&server).await;

    for page in 1..=5u32 {
        let fetched = fetch_users(&config, page).await.expect("page fetches");

        assert_eq!(fetched.records.len(), 10);
        assert_eq!(fetched.page_index, page - 1);
        assert_eq!(fetched.total_count, 50);
        assert_eq!(fetched.total_count.div_ceil(10), 5);
    }
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch_users(&config_for(&server).await, 1)
        .await
        .expect_err("503 must fail");

    assert_eq!(err, FetchError::Status(503));
    assert_eq!(err.to_string(), "Error fetching users. (status 503)");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = fetch_users(&config_for(&server).await, 1)
        .await
        .expect_err("garbage must fail");

    assert!(matches!(err, FetchError::Decode(_)), "unexpected: {err:?}");
}

#[tokio::test]
async fn test_reported_total_count_policy_uses_info_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "info": { "total": 123 }
        })))
        .mount(&server)
        .await;

    let mut config = config_for(&server).await;
    config.total_count = TotalCountPolicy::Reported { fallback: 50 };
    let fetched = fetch_users(&config, 1).await.expect("page fetches");
    assert_eq!(fetched.total_count, 123);

    config.total_count = TotalCountPolicy::default();
    let fetched = fetch_users(&config, 1).await.expect("page fetches");
    assert_eq!(fetched.total_count, 50);
}

#[tokio::test]
async fn test_slow_source_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::users_payload(1, 10))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server).await;
    config.request_timeout = std::time::Duration::from_millis(100);

    let err = fetch_users(&config, 1).await.expect_err("should time out");
    assert_eq!(err, FetchError::Timeout);
}
