use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::severity_colors;
use crate::error::DashboardError;
use crate::showcase::Severity;

/// Coloured box with a message, one style per severity.
pub fn message_box(ui: &mut Ui, severity: Severity, text: &str) {
    let (fill, fg) = severity_colors(severity);
    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(fg));
        });
}

/// Panel failure, shown in place of the output it blocked.
pub fn error_label(ui: &mut Ui, err: &DashboardError) {
    ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
}

pub fn caption(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().weak());
}

/// Hand a local media file to the system player. Missing files get a warning
/// instead of a link.
pub fn media_link(ui: &mut Ui, label: &str, path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(abs) => {
            if ui.button(format!("▶ {label}")).clicked() {
                log::info!("Opening {}", abs.display());
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(format!("file://{}", abs.display())));
            }
        }
        Err(_) => {
            log::warn!("Media file missing: {}", path.display());
            message_box(
                ui,
                Severity::Warning,
                &format!("Media file not found: {}", path.display()),
            );
        }
    }
}

/// Inline image from disk, or a warning when it is missing.
pub fn media_image(ui: &mut Ui, path: &Path) {
    if path.exists() {
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .max_width(ui.available_width())
                .max_height(320.0),
        );
    } else {
        message_box(
            ui,
            Severity::Warning,
            &format!("Image not found: {}", path.display()),
        );
    }
}
