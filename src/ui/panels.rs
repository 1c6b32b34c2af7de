use eframe::egui::{self, RichText, Ui};

use crate::panel::Panel;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – project selector
// ---------------------------------------------------------------------------

/// Render the left panel with the project selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Projects");
    ui.separator();

    let mut selected = state.panel();
    egui::ComboBox::from_label("Select the Project")
        .selected_text(selected.label())
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            for panel in Panel::ALL {
                ui.selectable_value(&mut selected, panel, panel.label());
            }
        });
    state.select(selected);

    ui.add_space(12.0);
    ui.label(RichText::new("Every panel recomputes from its own inputs.").weak().small());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / title bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Help", |ui: &mut Ui| {
            ui.hyperlink_to("Get Help", "https://docs.rs/egui");
            if ui.button("About").clicked() {
                state.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("Learning egui");
        ui.separator();
        ui.label(state.panel().label());
    });
}

/// Modal-ish "About" window, opened from the Help menu.
pub fn about_window(ctx: &egui::Context, state: &mut AppState) {
    egui::Window::new("About")
        .open(&mut state.show_about)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.heading("Bay Dashboard");
            ui.label("Interactive HCI demos: geology, US capitals, Biscayne Bay water quality and crypto quotes.");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
        });
}
