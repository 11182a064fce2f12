use egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use itertools::Itertools;

use crate::metrics::MetricSeries;
use crate::session::Session;
use crate::ui::metric_color;

/// Periods the rolling-average overlay smooths across.
const SMOOTHING_WINDOW: usize = 3;

const CHART_HEIGHT: f32 = 220.;

/// Line chart of a metric series over elapsed periods, optionally with a
/// rolling-average overlay.
pub(crate) fn show_trend(ui: &mut Ui, series: &MetricSeries, smoothed: bool) {
    let raw = series
        .samples
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64, *value as f64])
        .collect_vec();

    Plot::new("metric_trend")
        .legend(Legend::default())
        .show_background(false)
        .include_x(0.)
        .height(CHART_HEIGHT)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series.metric.to_string(), PlotPoints::new(raw))
                    .color(metric_color(series.metric)),
            );

            if smoothed {
                let rolling = series
                    .rolling_average::<SMOOTHING_WINDOW>()
                    .iter()
                    .enumerate()
                    .map(|(i, value)| [i as f64, *value as f64])
                    .collect_vec();
                plot_ui.line(
                    Line::new(
                        format!("{} ({SMOOTHING_WINDOW}-period avg)", series.metric),
                        PlotPoints::new(rolling),
                    )
                    .color(Color32::LIGHT_GRAY),
                );
            }
        });
}

/// Scatter of average exit velocity against average launch angle, one point
/// per session in the current filter.
pub(crate) fn show_impact_scatter(ui: &mut Ui, sessions: &[&Session]) {
    let points = sessions
        .iter()
        .map(|session| {
            [
                session.metrics.avg_launch_angle as f64,
                session.metrics.avg_exit_velocity as f64,
            ]
        })
        .collect_vec();

    Plot::new("impact_scatter")
        .legend(Legend::default())
        .show_background(false)
        .height(CHART_HEIGHT)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new("Avg EV vs Avg LA", PlotPoints::new(points))
                    .color(Color32::LIGHT_BLUE)
                    .radius(4.),
            );
        });
}
