//! Application state plumbing for the roster screen.
//!
//! - [`StateCtx`]: the explicitly constructed context that owns every piece of
//!   screen state. One is created per application root and passed down.
//! - [`QueryCache`] / [`QueryClient`]: a keyed async result cache that keeps
//!   showing the previous key's data while a new key loads.
//! - [`TaskId`] / [`TaskHandle`]: cooperative cancellation for spawned fetches.

mod ctx;
mod query;
mod query_client;
mod spawner;
mod state;
mod task;

pub use ctx::StateCtx;
pub use query::{QueryCache, QueryStatus, QueryView};
pub use query_client::QueryClient;
pub use spawner::Spawner;
pub use state::State;
pub use task::{TaskHandle, TaskId};
