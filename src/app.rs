use eframe::egui::{self, ScrollArea, Ui};

use crate::quotes::fetch::JsonFetcher;
use crate::state::{AppState, PanelState};
use crate::ui::{biscayne, capitals, crypto, geology, home, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    fetcher: Box<dyn JsonFetcher>,
}

impl DashboardApp {
    pub fn new(state: AppState, fetcher: Box<dyn JsonFetcher>) -> Self {
        Self { state, fetcher }
    }

    /// Dispatch to the handler of the selected panel.
    fn show_panel(&mut self, ui: &mut Ui) {
        debug_assert_eq!(self.state.panel_state.panel(), self.state.panel());
        ui.heading(self.state.panel().label());
        ui.separator();

        let config = &self.state.config;
        match &mut self.state.panel_state {
            PanelState::Homepage(s) => home::show(ui, s, config),
            PanelState::Geology(s) => geology::show(ui, s),
            PanelState::Capitals(s) => capitals::show(ui, s),
            PanelState::Biscayne(s) => biscayne::show(ui, s),
            PanelState::Crypto(s) => crypto::show(ui, s, config, self.fetcher.as_ref()),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: project selector ----
        egui::SidePanel::left("project_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected project ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| self.show_panel(ui));
        });

        panels::about_window(ctx, &mut self.state);
    }
}
