use eframe::egui::Ui;

use crate::state::CapitalsState;

use super::plot::{scatter_map, MapStyle};
use super::table::dataset_table;
use super::widgets::{caption, error_label};

pub fn show(ui: &mut Ui, capitals: &CapitalsState) {
    let (table, rows) = match &capitals.loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error_label(ui, e);
            return;
        }
    };
    let positions: Vec<[f64; 2]> = rows.iter().map(|c| c.position()).collect();

    ui.columns(2, |cols| {
        dataset_table(&mut cols[0], "capitals_table", table, 420.0);
        caption(
            &mut cols[0],
            "Table of the 50 states of the USA with their respective city capitals and their coordinates.",
        );

        scatter_map(
            &mut cols[1],
            "capitals_map",
            &positions,
            &MapStyle::default(),
            |i| format!("{}, {}", rows[i].city, rows[i].state),
        );
        caption(&mut cols[1], "Map marking the city capitals of all the states in the USA.");
    });
}
