use std::time::Duration;

use roster_business::{ServerCommand, UsersPage};

use crate::location::Location;
use crate::{state::State, widgets};

/// How often to poll for finished requests while any are in flight.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Pulls the location into the users page and applies finished requests.
    fn sync(&mut self) {
        let query = self.state.ctx.state::<Location>().query();
        self.state.ctx.state_mut::<UsersPage>().sync(&query);
        self.state.ctx.state_mut::<ServerCommand>().sync();
    }

    fn has_pending_work(&self) -> bool {
        self.state.ctx.state::<UsersPage>().in_flight() > 0
            || self.state.ctx.state::<ServerCommand>().is_running()
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster");
                ui.separator();
                #[cfg(not(target_arch = "wasm32"))]
                {
                    widgets::history_buttons(&mut self.state.ctx, ui);
                    ui.separator();
                }
                widgets::command_panel(&mut self.state.ctx, ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users");
            ui.add_space(4.0);
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        // Results arrive off-frame; keep polling until they are in.
        if self.has_pending_work() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
