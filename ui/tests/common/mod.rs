#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use roster_states::Spawner;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to run after a request should have completed.
pub const UI_PROPAGATION_FRAMES: usize = 10;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App on `/users` against a server that serves pages 1 to 5.
    pub async fn new_app() -> Self {
        Self::new_app_at("/users").await
    }

    pub async fn new_app_at(initial_url: &str) -> Self {
        let mock_server = MockServer::start().await;
        for page in 1..=5 {
            mount_page(&mock_server, page, None).await;
        }
        Self::with_server(mock_server, initial_url)
    }

    pub fn with_server(mock_server: MockServer, initial_url: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let spawner = Spawner::try_current().expect("tests run inside a tokio runtime");
        let state = State::test_at(&mock_server.uri(), spawner, initial_url);
        let app = RosterApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1024.0, 1200.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Lets spawned requests finish, then renders a few frames.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }
}

pub fn users_payload(page: u32) -> Value {
    let results: Vec<Value> = (0..10)
        .map(|i| {
            json!({
                "name": { "title": "Mr", "first": format!("First{page}x{i}"), "last": format!("Last{i}") },
                "email": format!("user{page}.{i}@example.com"),
                "location": { "city": format!("City{i}"), "country": "Norway" }
            })
        })
        .collect();
    json!({ "results": results, "info": { "page": page } })
}

pub async fn mount_page(server: &MockServer, page: u32, delay: Option<Duration>) {
    let mut template = ResponseTemplate::new(200).set_body_json(users_payload(page));
    if let Some(delay) = delay {
        template = template.set_delay(delay);
    }
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", page.to_string()))
        .respond_with(template)
        .mount(server)
        .await;
}
