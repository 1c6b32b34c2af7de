use std::time::Instant;

use chrono::Local;
use eframe::egui::{self, Id, LayerId, Order, Ui};
use egui_extras::DatePickerButton;

use crate::color::{from_hue, generate_palette};
use crate::config::DashboardConfig;
use crate::showcase::{
    random_chart, BalloonLaunch, Campus, Major, ProgressDemo, Severity, TimeRange, CAMPUS_LOCATIONS,
    CHART_COLUMNS,
};
use crate::state::HomepageState;

use super::plot::{line_chart, scatter_map, MapStyle, Series};
use super::widgets::{caption, media_link, message_box};

const WAVES_URL: &str = "https://bigsoundbank.com/UPLOAD/mp3/0267.mp3";

pub fn show(ui: &mut Ui, home: &mut HomepageState, config: &DashboardConfig) {
    personal_info(ui, home);

    ui.checkbox(&mut home.show_campus_map, "See all of the FIU campuses on the map");
    if home.show_campus_map {
        ui.label("User selected the field");
        let points: Vec<[f64; 2]> = CAMPUS_LOCATIONS.iter().map(|[lat, lon]| [*lon, *lat]).collect();
        scatter_map(ui, "campus_map", &points, &MapStyle::default(), |i| {
            format!("{:.6}, {:.6}", CAMPUS_LOCATIONS[i][0], CAMPUS_LOCATIONS[i][1])
        });
    }

    ui.separator();
    ui.heading("Widget Features");

    basic_plots(ui, home);
    sliders(ui, home);

    ui.checkbox(&mut home.show_audio, "Audio");
    if home.show_audio {
        ui.label("Waves and Birds");
        ui.hyperlink_to("▶ Play", WAVES_URL);
        ui.label("Alla Turca by Wolfgang Amadeus Mozart Sonata No. 11");
        media_link(ui, "Play", &config.data.media("Alla-Turca.mp3"));
        caption(ui, "License & Usage: Creative Commons CC BY 3.0");
    }

    ui.checkbox(&mut home.show_boxes, "Check the types of message boxes");
    if home.show_boxes {
        for severity in Severity::ALL {
            message_box(ui, severity, severity.sample_text());
        }
    }

    balloons(ui, home);
    progress(ui, home);
}

fn personal_info(ui: &mut Ui, home: &mut HomepageState) {
    ui.heading("Personal Info");
    let info = &mut home.info;

    egui::Grid::new("personal_info")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("First Name");
            ui.text_edit_singleline(&mut info.first_name);
            ui.end_row();

            ui.label("Last Name");
            ui.text_edit_singleline(&mut info.last_name);
            ui.end_row();

            ui.label("What is your major");
            egui::ComboBox::from_id_salt("major")
                .selected_text(info.major.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for major in Major::ALL {
                        ui.selectable_value(&mut info.major, major, major.to_string());
                    }
                });
            ui.end_row();

            ui.label("Which campus are you at?");
            ui.horizontal(|ui: &mut Ui| {
                for campus in Campus::ALL {
                    ui.radio_value(&mut info.campus, campus, campus.to_string());
                }
            });
            ui.end_row();

            ui.label("Start Date at FIU");
            ui.add(DatePickerButton::new(&mut info.start_date).id_salt("start_date"));
            ui.end_row();
        });

    if let Some(greeting) = info.greeting(Local::now().date_naive()) {
        ui.label(greeting);
    }
    ui.add_space(8.0);
}

fn basic_plots(ui: &mut Ui, home: &mut HomepageState) {
    if ui.checkbox(&mut home.show_plots, "Basic Plots").changed() {
        home.chart = None;
    }
    if !home.show_plots {
        return;
    }
    let chart = home.chart.get_or_insert_with(|| random_chart(&mut rand::rng()));
    let colors = generate_palette(CHART_COLUMNS.len());
    let series = CHART_COLUMNS
        .iter()
        .zip(chart.iter())
        .zip(colors)
        .map(|((name, values), color)| Series {
            name: *name,
            points: values.iter().enumerate().map(|(i, v)| [i as f64, *v]).collect(),
            color,
        })
        .collect();
    line_chart(ui, "random_chart", series, "row", "value");
}

fn sliders(ui: &mut Ui, home: &mut HomepageState) {
    ui.checkbox(&mut home.show_sliders, "Sliders");
    if !home.show_sliders {
        return;
    }

    message_box(ui, Severity::Info, "Integer slider for age");
    ui.add(egui::Slider::new(&mut home.age, 0..=100).text("How old are you?"));
    ui.label(format!("I'm {} years old.", home.age));

    message_box(ui, Severity::Info, "Time slider for appointment");
    ui.label("Schedule an appointment:");
    let mut start = home.appointment.start();
    let mut end = home.appointment.end();
    if ui.add(time_slider(&mut start, "from")).changed() {
        home.appointment.set_start(start);
    }
    if ui.add(time_slider(&mut end, "to")).changed() {
        home.appointment.set_end(end);
    }
    ui.label(home.appointment.message());

    message_box(ui, Severity::Info, "Float slider for a range");
    ui.label("Select a range of values");
    let mut low = home.values.low();
    let mut high = home.values.high();
    if ui.add(egui::Slider::new(&mut low, 0.0..=100.0).text("low")).changed() {
        home.values.set_low(low);
    }
    if ui.add(egui::Slider::new(&mut high, 0.0..=100.0).text("high")).changed() {
        home.values.set_high(high);
    }
    ui.label(home.values.message());
}

fn time_slider<'a>(minutes: &'a mut u32, text: &str) -> egui::Slider<'a> {
    egui::Slider::new(minutes, 0..=TimeRange::LAST_MINUTE)
        .step_by(TimeRange::STEP_MINUTES as f64)
        .custom_formatter(|v, _| TimeRange::format(v as u32))
        .text(text)
}

fn balloons(ui: &mut Ui, home: &mut HomepageState) {
    let mut on = home.balloons.is_some();
    if ui.checkbox(&mut on, "Surprise!").changed() {
        home.balloons = on.then(|| (Instant::now(), BalloonLaunch::balloons(&mut rand::rng())));
    }
    let Some((started, flock)) = &home.balloons else {
        return;
    };
    let elapsed = started.elapsed();
    if elapsed > BalloonLaunch::DURATION {
        return;
    }

    let ctx = ui.ctx();
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("balloons")));
    for balloon in flock {
        let rise = BalloonLaunch::rise(balloon, elapsed);
        let center = egui::pos2(
            screen.left() + balloon.x * screen.width(),
            screen.bottom() + balloon.radius - rise * screen.height(),
        );
        let string_end = center + egui::vec2(0.0, balloon.radius * 2.5);
        painter.line_segment([center, string_end], egui::Stroke::new(1.0, egui::Color32::GRAY));
        painter.circle_filled(center, balloon.radius, from_hue(balloon.hue));
    }
    ctx.request_repaint();
}

fn progress(ui: &mut Ui, home: &mut HomepageState) {
    if ui.checkbox(&mut home.show_progress, "Progress Bar").changed() {
        home.progress_started = home.show_progress.then(Instant::now);
    }
    let Some(started) = home.progress_started else {
        return;
    };
    let elapsed = started.elapsed();
    ui.label(format!("Iteration {}", ProgressDemo::iteration(elapsed)));
    ui.add(egui::ProgressBar::new(ProgressDemo::fraction(elapsed)).show_percentage());
    if !ProgressDemo::is_done(elapsed) {
        ui.ctx().request_repaint_after(ProgressDemo::STEP);
    }
}
