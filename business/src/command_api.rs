//! Client for the demo command endpoint of `roster-services`.

use roster_states::{QueryClient, QueryView, Spawner, State};
use serde::Deserialize;

use crate::BusinessConfig;
use crate::http::{Client, HttpError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandOutput {
    pub output: String,
}

#[derive(Debug, Deserialize)]
struct CommandFailure {
    error: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandApiError {
    /// The server answered with a JSON `{ error, kind? }` body.
    #[error("Command failed ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        kind: Option<String>,
    },
    #[error("Command endpoint returned status {0}")]
    Status(u16),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Failed to parse command response: {0}")]
    Decode(String),
}

/// `POST {url}` with no body.
pub async fn execute_command(url: &str) -> Result<CommandOutput, CommandApiError> {
    let response = Client::post(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(match response.json::<CommandFailure>() {
            Ok(failure) => CommandApiError::Server {
                status: response.status,
                message: failure.error,
                kind: failure.kind,
            },
            Err(_) => CommandApiError::Status(response.status),
        });
    }

    response
        .json()
        .map_err(|err| CommandApiError::Decode(err.to_string()))
}

/// The "Run server command" debug action. Each run replaces the last result.
#[derive(Debug)]
pub struct ServerCommand {
    url: String,
    query: QueryClient<(), CommandOutput>,
}

impl ServerCommand {
    pub fn new(config: &BusinessConfig, spawner: Spawner) -> Self {
        Self {
            url: config.execute_command_url(),
            query: QueryClient::new(spawner),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn run(&mut self) {
        let url = self.url.clone();
        log::info!("running server command via {url}");
        self.query
            .refetch((), move |()| async move { execute_command(&url).await });
    }

    pub fn sync(&mut self) {
        self.query.sync();
    }

    pub fn is_running(&self) -> bool {
        self.query.in_flight() > 0
    }

    /// `None` until the command has been run once.
    pub fn view(&self) -> Option<QueryView<'_, CommandOutput>> {
        self.query.selected().map(|()| self.query.view())
    }
}

impl State for ServerCommand {}
