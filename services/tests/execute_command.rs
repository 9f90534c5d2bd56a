//! `/api/execute-command` against the real command and against fakes.

use axum::http::StatusCode;
use axum_test::TestServer;
use roster_services::{
    command::{CommandError, CommandRunner, SystemCommand},
    config::Config,
    routes,
};
use serde_json::json;

#[derive(Clone)]
struct FailingCommand(CommandError);

impl CommandRunner for FailingCommand {
    async fn run(&self) -> Result<String, CommandError> {
        Err(self.0.clone())
    }
}

fn server<R: CommandRunner>(runner: R) -> TestServer {
    TestServer::new(routes(runner, Config::new_for_test())).unwrap()
}

#[tokio::test]
async fn test_post_returns_command_output() {
    let response = server(SystemCommand).post("/api/execute-command").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "output": "Hello from the server!\n" }));
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let server = server(SystemCommand);

    for response in [
        server.get("/api/execute-command").await,
        server.put("/api/execute-command").await,
        server.delete("/api/execute-command").await,
    ] {
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_json(&json!({ "error": "Method Not Allowed" }));
    }
}

#[tokio::test]
async fn test_spawn_failure_is_500_with_raw_message() {
    let response = server(FailingCommand(CommandError::Spawn(
        "Failed to run echo: No such file or directory".to_owned(),
    )))
    .post("/api/execute-command")
    .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "error": "Failed to run echo: No such file or directory",
        "kind": "spawn"
    }));
}

#[tokio::test]
async fn test_stderr_is_500_with_raw_text() {
    let response = server(FailingCommand(CommandError::Stderr(
        "warning: something odd\n".to_owned(),
    )))
    .post("/api/execute-command")
    .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "warning: something odd\n", "kind": "stderr" }));
}

#[tokio::test]
async fn test_exit_status_is_500() {
    let response = server(FailingCommand(CommandError::ExitStatus(
        "Command failed: echo (exit status: 1)".to_owned(),
    )))
    .post("/api/execute-command")
    .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "error": "Command failed: echo (exit status: 1)",
        "kind": "exit_status"
    }));
}
