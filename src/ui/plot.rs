use eframe::egui::{Color32, Pos2, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::ColorScale;

use super::projection::Projection;

// ---------------------------------------------------------------------------
// Marker map
// ---------------------------------------------------------------------------

/// How a scatter map is drawn.
pub struct MapStyle {
    pub color: Color32,
    pub radius: f32,
    pub height: f32,
    /// `[longitude, latitude]` to keep in the middle of the view.
    pub center: Option<[f64; 2]>,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(255, 75, 75),
            radius: 5.0,
            height: 420.0,
            center: None,
        }
    }
}

/// Extra hover slack around a marker, in screen points.
const HOVER_SLACK: f32 = 4.0;

/// Index of the marker closest to `pointer` in screen space, if it lies
/// within `max_distance` of it.
fn nearest_within(
    points: &[[f64; 2]],
    to_screen: impl Fn([f64; 2]) -> Pos2,
    pointer: Pos2,
    max_distance: f32,
) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, to_screen(*p).distance(pointer)))
        .filter(|(_, d)| *d <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Plot `[longitude, latitude]` markers. Hovering a marker shows `tooltip(i)`.
pub fn scatter_map(
    ui: &mut Ui,
    id: &str,
    points: &[[f64; 2]],
    style: &MapStyle,
    tooltip: impl Fn(usize) -> String,
) {
    let mut plot = Plot::new(id)
        .height(style.height)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|_name, _value| String::new());

    if let Some([cx, cy]) = style.center {
        // symmetric bounds keep the center in the middle of the view
        let dx = points.iter().map(|p| (p[0] - cx).abs()).fold(1e-4, f64::max);
        let dy = points.iter().map(|p| (p[1] - cy).abs()).fold(1e-4, f64::max);
        plot = plot
            .include_x(cx - dx)
            .include_x(cx + dx)
            .include_y(cy - dy)
            .include_y(cy + dy);
    }

    let hovered = plot.show(ui, |plot_ui| {
        let markers: PlotPoints = points.iter().copied().collect();
        plot_ui.points(
            Points::new(markers)
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(style.radius)
                .color(style.color),
        );

        let pointer = plot_ui.pointer_coordinate()?;
        let pointer = plot_ui.screen_from_plot(pointer);
        nearest_within(
            points,
            |p| plot_ui.screen_from_plot(PlotPoint::new(p[0], p[1])),
            pointer,
            style.radius + HOVER_SLACK,
        )
    });

    if let Some(i) = hovered.inner {
        hovered.response.on_hover_text_at_pointer(tooltip(i));
    }
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

pub struct Series<'a> {
    pub name: &'a str,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

pub fn line_chart(ui: &mut Ui, id: &str, series: Vec<Series<'_>>, x_label: &str, y_label: &str) {
    Plot::new(id)
        .height(300.0)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .show(ui, |plot_ui| {
            for s in series {
                let points: PlotPoints = s.points.into_iter().collect();
                plot_ui.line(Line::new(points).name(s.name).color(s.color).width(1.5));
            }
        });
}

// ---------------------------------------------------------------------------
// Projected 3D scatter
// ---------------------------------------------------------------------------

/// Scatter of `[x, y, z]` points through `projection`, coloured by z.
pub fn scatter_3d(
    ui: &mut Ui,
    id: &str,
    projection: &Projection,
    points: &[[f64; 3]],
    axis_labels: [&str; 3],
) {
    let scale = ColorScale::new(points.iter().map(|p| p[2]));

    Plot::new(id)
        .height(460.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            for (segment, label) in projection.axis_segments().iter().zip(axis_labels) {
                let [_, end] = *segment;
                plot_ui.line(
                    Line::new(PlotPoints::from(segment.to_vec()))
                        .color(Color32::GRAY)
                        .width(1.0),
                );
                plot_ui.text(Text::new(PlotPoint::new(end[0], end[1]), label).color(Color32::GRAY));
            }

            for p in points {
                let [x, y] = projection.project(*p);
                plot_ui.points(
                    Points::new(vec![[x, y]])
                        .radius(3.0)
                        .filled(true)
                        .color(scale.color_for(p[2])),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_nearest_marker_within_reach() {
        let points = [[10.0, 10.0], [40.0, 40.0], [13.0, 10.0]];
        let identity = |p: [f64; 2]| pos2(p[0] as f32, p[1] as f32);

        assert_eq!(nearest_within(&points, identity, pos2(39.0, 41.0), 5.0), Some(1));
        assert_eq!(nearest_within(&points, identity, pos2(12.0, 10.0), 5.0), Some(2));
    }

    #[test]
    fn test_empty_space_has_no_marker() {
        let points = [[10.0, 10.0], [40.0, 40.0]];
        let identity = |p: [f64; 2]| pos2(p[0] as f32, p[1] as f32);

        assert_eq!(nearest_within(&points, identity, pos2(25.0, 25.0), 5.0), None);
        assert_eq!(nearest_within(&[], identity, pos2(0.0, 0.0), 5.0), None);
    }
}
