mod command_panel;
#[cfg(not(target_arch = "wasm32"))]
mod history;
pub mod users;

pub use command_panel::command_panel;
#[cfg(not(target_arch = "wasm32"))]
pub use history::history_buttons;
pub use users::users_panel;
