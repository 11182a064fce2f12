use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use simple_moving_average::{SMA, SumTreeSMA};

use crate::icons::IconKind;

/// Closed set of measurable swing attributes the product charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    ExitVelocity,
    LaunchAngle,
    BarrelPercentage,
    Distance,
}

impl MetricKey {
    pub const ALL: [MetricKey; 4] = [
        MetricKey::ExitVelocity,
        MetricKey::LaunchAngle,
        MetricKey::BarrelPercentage,
        MetricKey::Distance,
    ];

    /// Unit suffix shown next to values of this metric.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKey::ExitVelocity => "mph",
            MetricKey::LaunchAngle => "°",
            MetricKey::BarrelPercentage => "%",
            MetricKey::Distance => "ft",
        }
    }

    pub fn icon(&self) -> IconKind {
        match self {
            MetricKey::ExitVelocity => IconKind::TrendingUp,
            MetricKey::LaunchAngle => IconKind::Target,
            MetricKey::BarrelPercentage => IconKind::Crosshair,
            MetricKey::Distance => IconKind::Ruler,
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricKey::ExitVelocity => write!(f, "Exit Velocity"),
            MetricKey::LaunchAngle => write!(f, "Launch Angle"),
            MetricKey::BarrelPercentage => write!(f, "Barrel %"),
            MetricKey::Distance => write!(f, "Distance"),
        }
    }
}

/// Time window the host is rendering trend data for.
///
/// Session timestamps are opaque display strings, so the range never slices
/// the session list itself; it selects which externally supplied data set the
/// screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    pub const ALL_RANGES: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
        TimeRange::All,
    ];
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Week => write!(f, "Week"),
            TimeRange::Month => write!(f, "Month"),
            TimeRange::Year => write!(f, "Year"),
            TimeRange::All => write!(f, "All"),
        }
    }
}

/// Ordered samples for one metric, one value per elapsed period.
///
/// Read-only input to the performance screen; produced upstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: MetricKey,
    pub samples: Vec<f32>,
}

impl MetricSeries {
    pub fn new(metric: MetricKey, samples: Vec<f32>) -> Self {
        Self { metric, samples }
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<f32> {
        self.samples.last().copied()
    }

    pub fn max(&self) -> Option<f32> {
        self.samples
            .iter()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f32| m.max(v))))
    }

    pub fn average(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f32>() / self.samples.len() as f32)
    }

    /// Smoothed copy of the series: each point is the moving average of the
    /// last `WINDOW` samples seen so far.
    pub fn rolling_average<const WINDOW: usize>(&self) -> Vec<f32> {
        let mut sma = SumTreeSMA::<f32, f32, WINDOW>::new();
        self.samples
            .iter()
            .map(|sample| {
                sma.add_sample(*sample);
                sma.get_average()
            })
            .collect()
    }
}

/// Current/max/average roll-up of a series for the metric summary cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSummary {
    pub metric: MetricKey,
    pub current: f32,
    pub max: f32,
    pub average: f32,
    pub unit: &'static str,
}

impl MetricSummary {
    pub fn from_series(series: &MetricSeries) -> Self {
        Self {
            metric: series.metric,
            current: series.latest().unwrap_or(0.),
            max: series.max().unwrap_or(0.),
            average: series.average().unwrap_or(0.),
            unit: series.metric.unit(),
        }
    }
}

/// Built-in trend data used by the demo binary and tests, one series per
/// metric key the screen offers.
pub fn sample_trends() -> HashMap<MetricKey, MetricSeries> {
    HashMap::from([
        (
            MetricKey::ExitVelocity,
            MetricSeries::new(MetricKey::ExitVelocity, vec![82., 84., 83., 85., 87.]),
        ),
        (
            MetricKey::LaunchAngle,
            MetricSeries::new(MetricKey::LaunchAngle, vec![12., 13., 15., 14., 15.]),
        ),
        (
            MetricKey::BarrelPercentage,
            MetricSeries::new(MetricKey::BarrelPercentage, vec![25., 26., 28., 30., 32.]),
        ),
        (
            MetricKey::Distance,
            MetricSeries::new(MetricKey::Distance, vec![228., 231., 225., 234., 240.]),
        ),
    ])
}
