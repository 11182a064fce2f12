use egui::Color32;

use crate::icons::IconKind;
use crate::metrics::MetricKey;

pub mod config;
pub mod performance;

pub(crate) const PALETTE_NIGHT: Color32 = Color32::from_rgb(16, 20, 26);
pub(crate) const PALETTE_FIELD: Color32 = Color32::from_rgb(30, 38, 48);
pub(crate) const PALETTE_GRASS: Color32 = Color32::from_rgb(58, 156, 98);
pub(crate) const PALETTE_CLAY: Color32 = Color32::from_rgb(196, 109, 62);
pub(crate) const PALETTE_CHALK: Color32 = Color32::from_rgb(232, 234, 237);

/// Resolve an icon identity to the glyph the UI draws for it.
///
/// This is the only place icon tags become something renderable; the data
/// model never sees UI types.
pub(crate) fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::TrendingUp => "↗",
        IconKind::Zap => "⚡",
        IconKind::Target => "◎",
        IconKind::Crosshair => "✛",
        IconKind::Ruler => "↔",
        IconKind::Calendar => "🗓",
        IconKind::Filter => "▼",
    }
}

/// Chart color for a metric's lines and points.
pub(crate) fn metric_color(metric: MetricKey) -> Color32 {
    match metric {
        MetricKey::ExitVelocity => PALETTE_GRASS,
        MetricKey::LaunchAngle => Color32::LIGHT_BLUE,
        MetricKey::BarrelPercentage => PALETTE_CLAY,
        MetricKey::Distance => Color32::from_rgb(171, 130, 255),
    }
}
