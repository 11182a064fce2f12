use std::collections::HashMap;

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui, Visuals, style::Widgets};
use log::error;

use crate::dashboard::QuickStats;
use crate::icons::IconKind;
use crate::metrics::{MetricKey, MetricSeries, MetricSummary, TimeRange};
use crate::performance::{COMPARISON_CAPACITY, FilterType, PerformanceViewState, TabKey};
use crate::session::{Session, SessionKind};
use crate::ui::config::{AppConfig, WindowPosition, WindowSize};
use crate::ui::{
    PALETTE_CHALK, PALETTE_CLAY, PALETTE_FIELD, PALETTE_GRASS, PALETTE_NIGHT, icon_glyph,
    metric_color,
};

mod comparison_view;
mod trend_view;

/// Desktop host for the performance screen.
///
/// Owns the session list and trend data handed over on startup, plus a
/// [`PerformanceViewState`] snapshot. Every user gesture is routed through a
/// view-state operation and the resulting snapshot replaces the old one
/// before the next frame renders, so the UI can never observe a
/// half-applied transition.
pub struct PerformanceApp {
    sessions: Vec<Session>,
    trends: HashMap<MetricKey, MetricSeries>,
    view: PerformanceViewState,
    app_config: AppConfig,
}

impl PerformanceApp {
    pub fn new(
        sessions: Vec<Session>,
        trends: HashMap<MetricKey, MetricSeries>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            panel_fill: PALETTE_NIGHT,
            faint_bg_color: PALETTE_FIELD,
            extreme_bg_color: PALETTE_NIGHT,
            window_fill: PALETTE_FIELD,
            widgets: Widgets::dark(),
            striped: true,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        Self {
            sessions,
            trends,
            view: PerformanceViewState::new(),
            app_config,
        }
    }

    fn show_header(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Performance").color(PALETTE_CHALK));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let stats = QuickStats::from_sessions(&self.sessions);
                ui.label(format!("{:.0}° avg LA", stats.avg_launch_angle));
                ui.separator();
                ui.label(format!("{:.0} mph avg EV", stats.avg_exit_velocity));
                ui.separator();
                ui.label(format!("{} swings", stats.total_swings));
            });
        });
    }

    fn show_tab_bar(&mut self, ui: &mut Ui) {
        let mut next_tab = None;
        ui.horizontal(|ui| {
            for &tab in self.view.tabs() {
                let active = tab == self.view.active_tab();
                if ui.selectable_label(active, tab.to_string()).clicked() && !active {
                    next_tab = Some(tab);
                }
            }
        });
        if let Some(tab) = next_tab {
            match self.view.set_active_tab(tab) {
                Ok(next) => self.view = next,
                Err(e) => error!("Rejected tab change: {}", e),
            }
        }
    }

    fn show_controls(&mut self, ui: &mut Ui) {
        let mut next_metric = None;
        let mut next_filter = None;
        let mut next_range = None;

        ui.horizontal(|ui| {
            for &metric in self.view.metric_keys() {
                let active = metric == self.view.selected_metric();
                let label = format!("{} {}", icon_glyph(metric.icon()), metric);
                if ui.selectable_label(active, label).clicked() && !active {
                    next_metric = Some(metric);
                }
            }

            ui.separator();
            let current = self.view.filter_type();
            egui::ComboBox::from_id_salt("session_kind_filter")
                .selected_text(format!("{} {}", icon_glyph(IconKind::Filter), current))
                .show_ui(ui, |ui| {
                    for filter in FilterType::ALL_FILTERS {
                        if ui
                            .selectable_label(filter == current, filter.to_string())
                            .clicked()
                        {
                            next_filter = Some(filter);
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            for range in TimeRange::ALL_RANGES {
                let active = range == self.view.time_filter();
                if ui.selectable_label(active, range.to_string()).clicked() && !active {
                    next_range = Some(range);
                }
            }
        });

        if let Some(metric) = next_metric {
            match self.view.set_selected_metric(metric) {
                Ok(next) => self.view = next,
                Err(e) => error!("Rejected metric change: {}", e),
            }
        }
        if let Some(filter) = next_filter {
            self.view = self.view.set_filter_type(filter);
        }
        if let Some(range) = next_range {
            self.view = self.view.set_time_filter(range);
        }
    }

    fn show_tab_content(&mut self, ui: &mut Ui) {
        match self.view.active_tab() {
            TabKey::Contact => self.show_summary_cards(ui),
            TabKey::Consistency => self.show_trend_chart(ui, true),
            TabKey::Impact => {
                let filtered = self.view.filtered_sessions(&self.sessions);
                trend_view::show_impact_scatter(ui, &filtered);
            }
            TabKey::Progress => self.show_trend_chart(ui, false),
        }
    }

    fn show_summary_cards(&self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            for &metric in self.view.metric_keys() {
                if let Some(series) = self.trends.get(&metric) {
                    let summary = MetricSummary::from_series(series);
                    summary_card(ui, &summary);
                }
            }
        });
    }

    fn show_trend_chart(&self, ui: &mut Ui, smoothed: bool) {
        match self.view.trend_series_for(&self.trends) {
            Ok(series) => trend_view::show_trend(ui, series, smoothed),
            Err(e) => {
                let message = e.to_string();
                error!("{}", message);
                ui.colored_label(Color32::RED, message);
            }
        }
    }

    fn show_session_list(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Session History")
                    .strong()
                    .color(PALETTE_CHALK),
            );
            let count = self.view.selection().len();
            if count > 0 {
                ui.label(format!("{count} of {COMPARISON_CAPACITY} selected"));
                if ui.small_button("Clear").clicked() {
                    self.view = self.view.clear_selection();
                }
            }
        });

        let mut toggled: Option<String> = None;
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for session in self.view.filtered_sessions(&self.sessions) {
                    let selected = self.view.selection().contains(&session.id);
                    if session_card(ui, session, selected) {
                        toggled = Some(session.id.clone());
                    }
                }
            });
        if let Some(id) = toggled {
            self.view = self.view.toggle_session_selection(&id);
        }
    }
}

impl eframe::App for PerformanceApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // remember where the user left the window
        if let Some(outer_rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.app_config.performance_window_position = WindowPosition {
                x: outer_rect.min.x,
                y: outer_rect.min.y,
            };
            self.app_config.performance_window_size = WindowSize {
                width: outer_rect.width(),
                height: outer_rect.height(),
            };
        }

        egui::TopBottomPanel::top("performance_header").show(ctx, |ui| {
            self.show_header(ui);
            self.show_tab_bar(ui);
            self.show_controls(ui);
            ui.add_space(4.);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_tab_content(ui);
            ui.separator();
            self.show_session_list(ui);
        });

        if self.view.comparison_visible() {
            let selected = self.view.selected_sessions(&self.sessions);
            if !comparison_view::show_comparison_window(ctx, &selected) {
                self.view = self.view.close_comparison();
            }
        }
    }
}

fn summary_card(ui: &mut Ui, summary: &MetricSummary) {
    egui::Frame::group(ui.style())
        .fill(PALETTE_FIELD)
        .show(ui, |ui| {
            ui.set_min_width(170.);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(icon_glyph(summary.metric.icon()))
                        .color(metric_color(summary.metric)),
                );
                ui.label(RichText::new(summary.metric.to_string()).strong());
            });
            ui.horizontal(|ui| {
                metric_value(ui, "Current", summary.current, summary.unit, PALETTE_GRASS);
                metric_value(ui, "Max", summary.max, summary.unit, PALETTE_CHALK);
                metric_value(ui, "Average", summary.average, summary.unit, PALETTE_CLAY);
            });
        });
}

fn metric_value(ui: &mut Ui, label: &str, value: f32, unit: &str, color: Color32) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(format!("{value:.1} {unit}")).color(color));
    });
}

/// Draw one session card; returns true when the user toggled its selection.
fn session_card(ui: &mut Ui, session: &Session, selected: bool) -> bool {
    let mut toggled = false;
    let fill = if selected {
        PALETTE_FIELD
    } else {
        Color32::TRANSPARENT
    };
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} {} • {}",
                icon_glyph(IconKind::Calendar),
                session.date,
                session.time
            ));
            let tag_color = match session.kind {
                SessionKind::Practice => PALETTE_GRASS,
                SessionKind::Game => PALETTE_CLAY,
            };
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(session.kind.to_string()).color(tag_color));
            });
        });
        ui.label(RichText::new(&session.title).strong());
        ui.horizontal(|ui| {
            ui.label(format!("{} swings", session.metrics.swing_count));
            ui.separator();
            ui.label(format!("{:.0} mph EV", session.metrics.avg_exit_velocity));
            ui.separator();
            ui.label(format!("{:.0}° LA", session.metrics.avg_launch_angle));
            ui.separator();
            ui.label(format!("{:.0}% barrels", session.metrics.barrel_percentage));
        });
        let toggle_text = if selected {
            "Selected for comparison"
        } else {
            "Compare"
        };
        if ui.selectable_label(selected, toggle_text).clicked() {
            toggled = true;
        }
    });
    toggled
}
