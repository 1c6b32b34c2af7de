use std::f64::consts::PI;

use eframe::egui::{self, Color32, Ui};

use crate::color::to_hex;
use crate::data::water::{WaterParameter, LATITUDE, LONGITUDE};
use crate::state::{BiscayneState, DataSource};

use super::plot::{line_chart, scatter_3d, scatter_map, MapStyle, Series};
use super::table::{dataset_table, summary_table};
use super::widgets::error_label;

// rgba(26, 255, 0, 160) premultiplied
const SAMPLE_COLOR: Color32 = Color32::from_rgba_premultiplied(16, 160, 0, 160);

pub fn show(ui: &mut Ui, bay: &mut BiscayneState) {
    ui.heading("1 - Map - Water Quality Parameters");
    source_picker(ui, bay);

    let survey = match &bay.survey {
        Ok(s) => s,
        Err(e) => {
            error_label(ui, e);
            return;
        }
    };

    // ---- Map ----
    let (lat, lon) = survey.center();
    ui.label(format!("Center: {lat:.6}, {lon:.6}  ({} samples)", survey.len()));
    let (rows, positions): (Vec<usize>, Vec<[f64; 2]>) = survey.positions().into_iter().unzip();
    scatter_map(
        ui,
        "bay_map",
        &positions,
        &MapStyle {
            color: SAMPLE_COLOR,
            radius: 3.0,
            height: 420.0,
            center: Some([lon, lat]),
        },
        |i| survey.tooltip(rows[i]),
    );

    egui::CollapsingHeader::new("See definitions for the water quality parameters")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for p in WaterParameter::ALL {
                ui.label(format!("- {}: {}", p.column(), p.definition()));
            }
        });

    // ---- Line plot ----
    ui.separator();
    ui.heading("2 - Plots - Water Quality Parameters");
    ui.columns(2, |cols| {
        cols[0].label("Select a water parameter");
        for p in WaterParameter::ALL {
            cols[0].radio_value(&mut bay.parameter, p, p.column());
        }

        cols[1].horizontal(|ui: &mut Ui| {
            ui.label("Pick a color");
            ui.color_edit_button_srgba(&mut bay.line_color);
        });
        cols[1].label(format!("The chosen color is {}", to_hex(bay.line_color)));
    });
    line_chart(
        ui,
        "bay_line",
        vec![Series {
            name: bay.parameter.column(),
            points: survey.series(bay.parameter),
            color: bay.line_color,
        }],
        "index",
        bay.parameter.column(),
    );

    // ---- 3D scatter ----
    ui.separator();
    ui.heading("3 - 3D Plot for the Total Water Column");
    if let Some(projection) = bay.projection.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            ui.add(egui::Slider::new(&mut projection.yaw, -PI..=PI).text("rotate"));
            ui.add(egui::Slider::new(&mut projection.pitch, -1.5..=1.5).text("tilt"));
        });
        scatter_3d(
            ui,
            "bay_3d",
            projection,
            &bay.depth_points,
            [LONGITUDE, LATITUDE, WaterParameter::TotalWaterColumn.column()],
        );
        ui.label("All three axes are reversed; colour follows the total water column.");
    }

    // ---- Table ----
    ui.separator();
    ui.heading("4 - Table - Water Quality Parameters");
    ui.label("Select One or More Parameters");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for p in WaterParameter::ALL {
            let mut on = bay.table_parameters.contains(p);
            if ui.checkbox(&mut on, p.column()).changed() {
                bay.table_parameters.toggle(p);
            }
        }
    });
    match survey.table(bay.table_parameters.as_slice()) {
        Ok(table) => dataset_table(ui, "bay_table", &table, 300.0),
        Err(e) => error_label(ui, &e),
    }

    // ---- Statistics ----
    ui.separator();
    ui.heading("5 - Descriptive Statistics - Water Quality Parameters");
    summary_table(ui, "bay_stats", &bay.summary);
}

fn source_picker(ui: &mut Ui, bay: &mut BiscayneState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Choose a CSV file…").clicked() {
            let file = rfd::FileDialog::new()
                .set_title("Open water quality data")
                .add_filter("CSV", &["csv"])
                .pick_file();
            if let Some(path) = file {
                log::info!("Loading survey from {}", path.display());
                bay.pick(path);
            }
        }
        match &bay.source {
            DataSource::Bundled(p) => ui.label(format!(
                "No file chosen, showing the default dataset ({})",
                p.display()
            )),
            DataSource::Picked(p) => ui.label(format!("Showing {}", p.display())),
        };
    });
}
