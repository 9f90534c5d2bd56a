//! Shared helpers for the mock-server tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERS_PATH: &str = "/api/";

/// A randomuser-shaped payload with `count` records for `page`.
pub fn users_payload(page: u32, count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "gender": "female",
                "name": { "title": "Ms", "first": format!("First{page}x{i}"), "last": format!("Last{i}") },
                "email": format!("user{page}.{i}@example.com"),
                "location": { "city": format!("City{i}"), "country": "Norway", "postcode": 1234 },
                "login": { "uuid": format!("{page}-{i}") }
            })
        })
        .collect();

    json!({
        "results": results,
        "info": { "seed": "abc", "results": count, "page": page, "version": "1.4" }
    })
}

pub async fn mount_page(server: &MockServer, page: u32, delay: Option<Duration>) {
    let mut template = ResponseTemplate::new(200).set_body_json(users_payload(page, 10));
    if let Some(delay) = delay {
        template = template.set_delay(delay);
    }

    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .and(query_param("results", "10"))
        .and(query_param("page", page.to_string()))
        .respond_with(template)
        .mount(server)
        .await;
}

pub fn users_api_url(server: &MockServer) -> String {
    format!("{}{USERS_PATH}", server.uri())
}
