//! Draws chart payloads with egui_plot.
//!
//! Bars become one single-bar `BarChart` each so every bar gets its own
//! legend entry; pie slices are filled polygon fans.

use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};
use std::f64::consts::PI;
use vm_app::{ChartPayload, PieChart, Rgb};

const CHART_HEIGHT: f32 = 260.0;
/// Widest arc a single polygon may cover; keeps each fan convex.
const MAX_WEDGE_RAD: f64 = PI / 2.0;
const ARC_STEP_RAD: f64 = PI / 90.0;

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, chart: &ChartPayload) {
        ui.strong(chart.title());
        match chart {
            ChartPayload::Bar(bar_chart) => show_bar_chart(ui, bar_chart),
            ChartPayload::Pie(pie) => show_pie_chart(ui, pie),
        }
    }
}

fn show_bar_chart(ui: &mut egui::Ui, chart: &vm_app::BarChart) {
    let charts: Vec<BarChart> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            BarChart::new(vec![
                Bar::new(i as f64, bar.value)
                    .width(0.6)
                    .fill(color(bar.color))
                    .name(&bar.label),
            ])
            .color(color(bar.color))
            .name(&bar.label)
        })
        .collect();

    let labels: Vec<Text> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Text::new(PlotPoint::new(i as f64, bar.value), bar.data_label.clone())
                .anchor(egui::Align2::CENTER_BOTTOM)
        })
        .collect();

    Plot::new(format!("{:?}", chart.id))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(chart.y_label.clone())
        .show_x(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for bars in charts {
                plot_ui.bar_chart(bars);
            }
            for label in labels {
                plot_ui.text(label);
            }
        });
}

fn show_pie_chart(ui: &mut egui::Ui, pie: &PieChart) {
    let start = pie.start_angle_deg.to_radians();

    Plot::new(format!("{:?}", pie.id))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            let mut angle = start;
            for slice in &pie.slices {
                let sweep = slice.fraction * 2.0 * PI;
                if sweep <= 0.0 {
                    continue;
                }
                for wedge in wedges(angle, angle + sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge))
                            .fill_color(color(slice.color))
                            .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                            .name(&slice.label),
                    );
                }

                let mid = angle + sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    slice.percent_label.clone(),
                ));
                angle += sweep;
            }
        });
}

/// Convex polygon fans from the origin covering `[from, to]` on the unit circle.
fn wedges(from: f64, to: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = to - from;
    if sweep <= 0.0 {
        return Vec::new();
    }
    let count = ((sweep / MAX_WEDGE_RAD).ceil() as usize).max(1);
    let per_wedge = sweep / count as f64;
    let steps = ((per_wedge / ARC_STEP_RAD).ceil() as usize).max(1);

    (0..count)
        .map(|w| {
            let a = from + per_wedge * w as f64;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for k in 0..=steps {
                let t = a + per_wedge * k as f64 / steps as f64;
                points.push([t.cos(), t.sin()]);
            }
            points
        })
        .collect()
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_splits_into_quarter_wedges() {
        let w = wedges(0.0, 2.0 * PI);
        assert_eq!(w.len(), 4);
        for wedge in &w {
            assert_eq!(wedge[0], [0.0, 0.0]);
        }
    }

    #[test]
    fn small_slice_is_one_wedge() {
        let w = wedges(PI / 2.0, PI / 2.0 + 0.1);
        assert_eq!(w.len(), 1);
        let first = w[0][1];
        assert!((first[0] - 0.0).abs() < 1e-12);
        assert!((first[1] - 1.0).abs() < 1e-12);
    }
}
