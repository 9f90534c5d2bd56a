//! The fixed demo command behind `POST /api/execute-command`.
//!
//! The command is hard-coded and takes no input. It is started directly,
//! without a shell.

use std::future::Future;
use std::process::Stdio;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tokio::process::Command;

pub const PROGRAM: &str = "echo";
pub const ARGS: [&str; 1] = ["Hello from the server!"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The process could not be started.
    #[error("{0}")]
    Spawn(String),
    /// The process exited with a non-zero status.
    #[error("{0}")]
    ExitStatus(String),
    /// The process succeeded but wrote to standard error.
    #[error("{0}")]
    Stderr(String),
}

impl CommandError {
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Spawn(_) => "spawn",
            CommandError::ExitStatus(_) => "exit_status",
            CommandError::Stderr(_) => "stderr",
        }
    }
}

#[derive(Debug, Serialize)]
struct CommandErrorBody<'a> {
    error: String,
    kind: &'a str,
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let body = CommandErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Runs the demo command and returns its standard output.
pub trait CommandRunner: Clone + Send + Sync + 'static {
    fn run(&self) -> impl Future<Output = Result<String, CommandError>> + Send;
}

/// Runs [`PROGRAM`] with [`ARGS`] on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommand;

impl CommandRunner for SystemCommand {
    async fn run(&self) -> Result<String, CommandError> {
        let output = Command::new(PROGRAM)
            .args(ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| CommandError::Spawn(format!("Failed to run {PROGRAM}: {err}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let mut message = format!("Command failed: {PROGRAM} ({})", output.status);
            if !stderr.is_empty() {
                message.push('\n');
                message.push_str(&stderr);
            }
            return Err(CommandError::ExitStatus(message));
        }
        if !stderr.is_empty() {
            return Err(CommandError::Stderr(stderr));
        }

        tracing::debug!(bytes = stdout.len(), "command finished");
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn system_command_echoes_greeting() {
        let output = SystemCommand.run().await.expect("echo should run");
        assert_eq!(output, "Hello from the server!\n");
    }

    #[test]
    fn error_kinds() {
        assert_eq!(CommandError::Spawn("x".to_owned()).kind(), "spawn");
        assert_eq!(CommandError::ExitStatus("x".to_owned()).kind(), "exit_status");
        assert_eq!(CommandError::Stderr("x".to_owned()).kind(), "stderr");
    }

    #[test]
    fn error_message_is_raw() {
        let err = CommandError::Stderr("warning: low disk\n".to_owned());
        assert_eq!(err.to_string(), "warning: low disk\n");
    }
}
