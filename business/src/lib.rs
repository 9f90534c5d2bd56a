//! Business logic of the roster screen: fetching users, the table and
//! pagination state machines, location handling and the command client.
//!
//! Nothing in this crate depends on egui; the UI reads the state exposed here
//! and forwards user input back into it.

mod columns;
mod command_api;
mod config;
mod fetch_users;
pub mod http;
mod pagination;
mod route;
mod table;
mod user;
mod users_page;

pub use columns::{COLUMNS, ColumnDef, ColumnKey, column};
pub use command_api::{CommandApiError, CommandOutput, ServerCommand, execute_command};
pub use config::{
    BusinessConfig, DEFAULT_PAGE_SIZE, DEFAULT_USERS_API_URL, MOCK_TOTAL_COUNT, TotalCountPolicy,
};
pub use fetch_users::{FetchError, UserPage, fetch_users, users_url};
pub use pagination::PaginationController;
pub use route::{MemoryHistory, Navigator, USERS_PATH, UsersRoute, query_param};
pub use table::{FilterState, SortDirection, SortKey, SortState, TableState};
pub use user::{UserLocation, UserName, UserRecord};
pub use users_page::{ReadyView, UsersPage, UsersView};
