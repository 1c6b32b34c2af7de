use eframe::egui::Ui;

use crate::state::GeologyState;

use super::table::dataset_table;
use super::widgets::{caption, media_image, media_link};

pub fn show(ui: &mut Ui, geology: &GeologyState) {
    ui.columns(3, |cols| {
        dataset_table(&mut cols[0], "geological_periods", &geology.table, 220.0);
        caption(&mut cols[0], "Geological periods in millions of years ago");

        media_image(&mut cols[1], &geology.image);
        caption(&mut cols[1], "Sedona, Arizona, USA, by Edmundo Mendez Jr, 2020");

        media_link(&mut cols[2], "Play video", &geology.video);
        caption(&mut cols[2], "Volcano by Martin Sanchez");
    });
}
