mod pagination;
mod panel;
mod search;
pub mod table;

pub use pagination::{PaginationActions, pagination_bar};
pub use panel::users_panel;
pub use search::search_bar;
