// Error types for swinglab

use crate::metrics::MetricKey;
use crate::performance::TabKey;
use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum SwingLabError {
    // Performance screen configuration errors
    #[snafu(display("Tab {tab} is not part of the configured tab set"))]
    InvalidTabKind { tab: TabKey },
    #[snafu(display("Metric {metric} is not offered by this data source"))]
    UnknownMetric { metric: MetricKey },
    #[snafu(display("Invalid performance screen configuration: {reason}"))]
    InvalidScreenConfiguration { reason: String },

    // Trend data errors
    #[snafu(display("No trend series supplied for metric {metric}"))]
    MissingSeries { metric: MetricKey },

    // Drill catalog errors
    #[snafu(display("Unknown drill category: {category}"))]
    UnknownDrillCategory { category: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
