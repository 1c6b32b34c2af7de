use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::showcase::Severity;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

pub fn from_hue(hue: f32) -> Color32 {
    hsl_to_color32(hue, 0.8, 0.6)
}

// ---------------------------------------------------------------------------
// Continuous scale: value → Color32
// ---------------------------------------------------------------------------

/// Maps a numeric range onto a purple → yellow hue sweep.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        ColorScale { min, max }
    }

    /// Position of `value` inside the range, in `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if !range.is_finite() || range.abs() < f64::EPSILON {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        let t = self.normalize(value);
        hsl_to_color32(270.0 - t * 210.0, 0.8, 0.35 + 0.25 * t)
    }
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// `#rrggbb` for display next to the colour picker.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// (fill, text) for a message box.
pub fn severity_colors(severity: Severity) -> (Color32, Color32) {
    match severity {
        Severity::Success => (Color32::from_rgb(223, 240, 216), Color32::from_rgb(33, 115, 70)),
        Severity::Warning => (Color32::from_rgb(255, 244, 206), Color32::from_rgb(146, 108, 0)),
        Severity::Error => (Color32::from_rgb(253, 226, 226), Color32::from_rgb(176, 32, 32)),
        Severity::Info => (Color32::from_rgb(220, 234, 252), Color32::from_rgb(20, 80, 160)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_distinct() {
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[1]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_scale_normalizes() {
        let scale = ColorScale::new([1.0, 3.0, 2.0]);
        assert_eq!(scale.normalize(1.0), 0.0);
        assert_eq!(scale.normalize(2.0), 0.5);
        assert_eq!(scale.normalize(10.0), 1.0);
        assert_ne!(scale.color_for(1.0), scale.color_for(3.0));
    }

    #[test]
    fn test_flat_scale() {
        let scale = ColorScale::new([2.0, 2.0]);
        assert_eq!(scale.normalize(2.0), 0.0);
        assert_eq!(ColorScale::new([]).normalize(1.0), 0.0);
    }

    #[test]
    fn test_hex() {
        assert_eq!(to_hex(Color32::from_rgb(0, 249, 0)), "#00f900");
    }
}
