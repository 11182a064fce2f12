use egui::{Context, RichText};
use egui_extras::{Column, TableBuilder};

use crate::session::Session;
use crate::ui::PALETTE_CHALK;

/// Show the side-by-side comparison of the selected sessions.
///
/// Returns `false` once the user closes it, via the title-bar X or the
/// start-new-comparison button; the host then resets the selection.
pub(crate) fn show_comparison_window(ctx: &Context, selected: &[&Session]) -> bool {
    let mut open = true;
    let mut start_new = false;

    egui::Window::new("Session Comparison")
        .open(&mut open)
        .collapsible(false)
        .default_width(440.)
        .show(ctx, |ui| {
            let rows: [(&str, fn(&Session) -> String); 6] = [
                ("Recorded", |s| format!("{} • {}", s.date, s.time)),
                ("Kind", |s| s.kind.to_string()),
                ("Swings", |s| s.metrics.swing_count.to_string()),
                ("Avg Exit Velocity", |s| {
                    format!("{:.1} mph", s.metrics.avg_exit_velocity)
                }),
                ("Avg Launch Angle", |s| {
                    format!("{:.1}°", s.metrics.avg_launch_angle)
                }),
                ("Barrel %", |s| {
                    format!("{:.1}%", s.metrics.barrel_percentage)
                }),
            ];

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(120.))
                .columns(Column::remainder(), selected.len())
                .header(22., |mut header| {
                    header.col(|ui| {
                        ui.strong("Metric");
                    });
                    for session in selected {
                        header.col(|ui| {
                            ui.strong(RichText::new(&session.title).color(PALETTE_CHALK));
                        });
                    }
                })
                .body(|mut body| {
                    for (label, value) in rows {
                        body.row(20., |mut row| {
                            row.col(|ui| {
                                ui.label(label);
                            });
                            for session in selected {
                                row.col(|ui| {
                                    ui.label(value(session));
                                });
                            }
                        });
                    }
                });

            ui.add_space(8.);
            if ui.button("Start New Comparison").clicked() {
                start_new = true;
            }
        });

    open && !start_new
}
