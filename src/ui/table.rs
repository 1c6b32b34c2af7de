use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::TabularDataset;
use crate::data::stats::{ColumnSummary, SUMMARY_ROWS};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Dataset table
// ---------------------------------------------------------------------------

/// Scrollable table of a dataset with a leading row-index column.
pub fn dataset_table(ui: &mut Ui, id: &str, dataset: &TabularDataset, max_height: f32) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(max_height)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(28.0))
            .columns(Column::auto().at_least(70.0), dataset.columns.len())
            .header(20.0, |mut header| {
                header.col(|_ui| {});
                for name in &dataset.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                    let i = row.index();
                    row.col(|ui| {
                        ui.weak(i.to_string());
                    });
                    for cell in &dataset.rows[i] {
                        row.col(|ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// describe() table
// ---------------------------------------------------------------------------

/// Statistic rows down, one column per numeric dataset column.
pub fn summary_table(ui: &mut Ui, id: &str, summaries: &[ColumnSummary]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(48.0))
            .columns(Column::auto().at_least(90.0), summaries.len())
            .header(20.0, |mut header| {
                header.col(|_ui| {});
                for s in summaries {
                    header.col(|ui| {
                        ui.strong(&s.column);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, SUMMARY_ROWS.len(), |mut row| {
                    let stat = row.index();
                    row.col(|ui| {
                        ui.strong(SUMMARY_ROWS[stat]);
                    });
                    for s in summaries {
                        row.col(|ui| {
                            ui.label(format!("{:.6}", s.values()[stat]));
                        });
                    }
                });
            });
    });
}
