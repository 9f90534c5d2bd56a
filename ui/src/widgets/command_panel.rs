//! Debug button that runs the fixed command on `roster-services`.

use egui::{Button, Color32, Ui};
use roster_business::ServerCommand;
use roster_states::StateCtx;

pub fn command_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let command = state_ctx.state_mut::<ServerCommand>();

    ui.horizontal(|ui| {
        let running = command.is_running();
        if ui
            .add_enabled(!running, Button::new("Run server command"))
            .on_hover_text(command.url())
            .clicked()
        {
            command.run();
        }

        let Some(view) = command.view() else {
            return;
        };
        if view.is_fetching {
            ui.spinner();
        } else if let Some(error) = view.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        } else if let Some(output) = view.data {
            ui.monospace(format!("Output: {}", output.output.trim_end()));
        }
    });
}
