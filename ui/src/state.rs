use roster_business::{BusinessConfig, ServerCommand, UsersPage};
use roster_states::{Spawner, StateCtx};

use crate::location::Location;

/// The main application state.
///
/// Everything the screen needs lives in `ctx`: the config, the users page
/// (which owns the query client), the server command and the location.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    pub fn new(config: BusinessConfig, spawner: Spawner, location: Location) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(ServerCommand::new(&config, spawner.clone()));
        ctx.add_state(UsersPage::new(config.clone(), spawner));
        ctx.add_state(config);
        ctx.add_state(location);

        Self { ctx }
    }

    /// State pointed at a mock server: users at `{base_url}/api/`, services at
    /// `base_url`, starting on `/users`.
    pub fn test(base_url: &str, spawner: Spawner) -> Self {
        Self::test_at(base_url, spawner, "/users")
    }

    pub fn test_at(base_url: &str, spawner: Spawner, initial_url: &str) -> Self {
        let config = BusinessConfig::new(format!("{base_url}/api/"), base_url);
        Self::new(config, spawner, Location::memory(initial_url))
    }
}
