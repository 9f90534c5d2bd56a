//! egui front end of the roster screen, for native and wasm32.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod location;
pub mod state;
pub mod widgets;

pub use app::RosterApp;
